//! Counting sort over a known value range.

use crate::error::{RecordError, Result};
use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record a counting sort of `input`, whose values must all lie in
/// `[0, max_value)`.
///
/// The input is validated before anything is recorded; a value outside the
/// range rejects the whole recording. This is the only recorder that writes
/// final values directly with `Replace` instead of going through overlays.
pub fn record_counting(input: &[i64], max_value: i64) -> Result<Vec<AnimationEvent>> {
    validate(input, max_value)?;
    if input.len() <= 1 {
        return Ok(Vec::new());
    }

    let mut recorder = Recorder::with_capacity(input.len() * 5);
    // Validated above: every value lies in 0..max_value.
    let largest = input.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; largest as usize + 1];

    for (i, &value) in input.iter().enumerate() {
        recorder.select(&[i]);
        counts[value as usize] += 1;
        recorder.idle(&[i]);
    }

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    for &value in input.iter().rev() {
        let slot = &mut counts[value as usize];
        let target = *slot - 1;
        recorder.select(&[target]);
        recorder.replace(target, value);
        recorder.sorted(&[target]);
        *slot -= 1;
    }

    Ok(recorder.into_events())
}

fn validate(input: &[i64], max_value: i64) -> Result<()> {
    match input
        .iter()
        .enumerate()
        .find(|(_, value)| **value < 0 || **value >= max_value)
    {
        Some((index, &value)) => Err(RecordError::InvalidBounds {
            index,
            value,
            max_value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{replay, sorted_copy, sorted_indices};

    #[test]
    fn replace_values_reconstruct_sorted_output() {
        let input = [4, 2, 2, 0, 3];
        let events = record_counting(&input, 5).unwrap();

        let mut output = vec![None; input.len()];
        for event in &events {
            if let AnimationEvent::Replace { index, value } = event {
                output[*index] = Some(*value);
            }
        }
        let output: Vec<i64> = output.into_iter().map(|v| v.unwrap()).collect();
        assert_eq!(output, vec![0, 2, 2, 3, 4]);
    }

    #[test]
    fn sorts_by_replay() {
        for input in [vec![3, 1, 2], vec![5, 5, 1, 0, 9, 2], vec![0, 0], vec![9, 0]] {
            let events = record_counting(&input, 10).unwrap();
            assert_eq!(replay(&input, &events), sorted_copy(&input));
            assert!(sorted_indices(input.len(), &events).iter().all(|&s| s));
        }
    }

    #[test]
    fn rejects_value_at_bound() {
        let err = record_counting(&[1, 5, 2], 5).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidBounds {
                index: 1,
                value: 5,
                max_value: 5
            }
        );
    }

    #[test]
    fn rejects_negative_value() {
        assert!(matches!(
            record_counting(&[0, -1], 5),
            Err(RecordError::InvalidBounds { index: 1, value: -1, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_singleton() {
        assert!(record_counting(&[7], 5).is_err());
        assert!(record_counting(&[4], 5).unwrap().is_empty());
    }

    #[test]
    fn huge_bound_sizes_counts_from_data() {
        let events = record_counting(&[1, 0], i64::MAX).unwrap();
        assert_eq!(events, record_counting(&[1, 0], 2).unwrap());

        let input = [3, 1 << 20, 0, 3];
        let events = record_counting(&input, 1 << 40).unwrap();
        assert_eq!(replay(&input, &events), sorted_copy(&input));
    }

    #[test]
    fn walks_input_in_reverse() {
        let events = record_counting(&[1, 0], 2).unwrap();
        // Phase 3 starts with the last input element (0), placed at index 0
        assert_eq!(events[4], AnimationEvent::Select { indices: vec![0] });
        assert_eq!(events[5], AnimationEvent::Replace { index: 0, value: 0 });
    }
}
