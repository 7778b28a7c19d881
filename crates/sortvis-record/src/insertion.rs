//! Insertion sort.

use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record an insertion sort of `input`.
pub fn record_insertion(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut values = input.to_vec();
    let mut recorder = Recorder::new();

    for i in 1..values.len() {
        for j in (1..=i).rev() {
            recorder.select(&[j - 1, j]);
            if values[j - 1] > values[j] {
                recorder.swap(&mut values, j - 1, j);
                recorder.idle(&[j - 1, j]);
            } else {
                recorder.idle(&[j - 1, j]);
                break;
            }
        }
    }
    let all: Vec<usize> = (0..values.len()).collect();
    recorder.sorted(&all);

    recorder.into_events()
}
