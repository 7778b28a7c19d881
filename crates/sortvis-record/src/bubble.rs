//! Bubble sort with early exit.

use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record a bubble sort of `input`.
///
/// A pass that performs no swap marks every remaining unsorted index in one
/// `Sorted` event and ends the sort.
pub fn record_bubble(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut values = input.to_vec();
    let mut recorder = Recorder::new();
    let mut n = values.len();

    loop {
        let mut swapped = false;
        n -= 1;
        for i in 0..n {
            recorder.select(&[i, i + 1]);
            if values[i] > values[i + 1] {
                recorder.swap(&mut values, i, i + 1);
                swapped = true;
            }
            recorder.idle(&[i, i + 1]);
        }
        if !swapped {
            let rest: Vec<usize> = (0..=n).collect();
            recorder.sorted(&rest);
            break;
        }
        recorder.sorted(&[n]);
    }

    recorder.into_events()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{replay, sorted_copy, sorted_indices};

    #[test]
    fn sorts_by_replay() {
        for input in [vec![3, 1, 2], vec![5, 5, 1, 0, 9, 2], vec![2, 1], vec![7, 6, 5, 4, 3]] {
            let events = record_bubble(&input);
            assert_eq!(replay(&input, &events), sorted_copy(&input));
        }
    }

    #[test]
    fn sorted_input_finishes_in_one_pass() {
        let events = record_bubble(&[1, 2, 3, 4]);
        // 3 compared pairs (select + idle each), then one Sorted covering all
        assert_eq!(events.len(), 7);
        assert_eq!(
            events.last(),
            Some(&AnimationEvent::Sorted {
                indices: vec![0, 1, 2, 3]
            })
        );
    }

    #[test]
    fn swapping_pass_marks_only_last_index() {
        let events = record_bubble(&[2, 1, 3]);
        // pass 1: (0,1) swaps, (1,2) no swap -> Sorted [2]
        let first_sorted = events
            .iter()
            .find(|e| matches!(e, AnimationEvent::Sorted { .. }));
        assert_eq!(first_sorted, Some(&AnimationEvent::Sorted { indices: vec![2] }));
    }

    #[test]
    fn every_index_ends_sorted() {
        let input = [4, 3, 2, 1, 0];
        let events = record_bubble(&input);
        assert!(sorted_indices(input.len(), &events).iter().all(|&s| s));
    }
}
