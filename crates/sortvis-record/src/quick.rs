//! Quick sort with the Lomuto partition scheme.

use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record a quick sort of `input`.
///
/// The last element of each range is the pivot. Every partition call ends by
/// marking the pivot's resting index `Sorted`, so every index is eventually
/// marked, including single-element ranges.
pub fn record_quick(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut values = input.to_vec();
    let mut recorder = Recorder::new();
    let last = values.len() - 1;
    quick_sort(&mut values, 0, last, &mut recorder);
    recorder.into_events()
}

fn quick_sort(values: &mut [i64], lo: usize, hi: usize, recorder: &mut Recorder) {
    if lo > hi {
        return;
    }
    let p = partition(values, lo, hi, recorder);
    if p > lo {
        quick_sort(values, lo, p - 1, recorder);
    }
    quick_sort(values, p + 1, hi, recorder);
}

fn partition(values: &mut [i64], lo: usize, hi: usize, recorder: &mut Recorder) -> usize {
    let pivot = values[hi];
    let mut store = lo;
    recorder.marked(&[hi]);
    for scan in lo..hi {
        recorder.select(&[store, scan]);
        if values[scan] < pivot {
            recorder.swap(values, store, scan);
            recorder.idle(&[store, scan]);
            store += 1;
        } else {
            recorder.idle(&[store, scan]);
        }
    }
    recorder.select(&[store, hi]);
    recorder.swap(values, store, hi);
    recorder.idle(&[hi]);
    recorder.sorted(&[store]);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{replay, sorted_copy, sorted_indices};

    #[test]
    fn sorts_by_replay() {
        for input in [
            vec![3, 1, 2],
            vec![5, 5, 1, 0, 9, 2],
            vec![1, 2, 3, 4],
            vec![4, 3, 2, 1],
            vec![7, 7, 7],
        ] {
            let events = record_quick(&input);
            assert_eq!(replay(&input, &events), sorted_copy(&input));
        }
    }

    #[test]
    fn every_index_ends_sorted() {
        for input in [vec![2, 1], vec![9, 4, 7, 1, 1, 3], vec![1, 2, 3, 4, 5]] {
            let events = record_quick(&input);
            assert!(sorted_indices(input.len(), &events).iter().all(|&s| s));
        }
    }

    #[test]
    fn pivot_marked_once_per_partition() {
        let events = record_quick(&[1, 2]);
        // partition(0,1): pivot 2 stays; partition(0,0): single element
        let marked = events
            .iter()
            .filter(|e| matches!(e, AnimationEvent::Marked { .. }))
            .count();
        assert_eq!(marked, 2);
        assert_eq!(events[0], AnimationEvent::Marked { indices: vec![1] });
    }
}
