//! Selection sort.

use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record a selection sort of `input`.
///
/// The running minimum of each pass stays `Marked`; every candidate is
/// `Select`ed and then either becomes the new minimum or reverts to `Idle`.
pub fn record_selection(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut values = input.to_vec();
    let mut recorder = Recorder::new();
    let len = values.len();

    for i in 0..len - 1 {
        let mut min = i;
        recorder.marked(&[min]);
        for j in i + 1..len {
            recorder.select(&[j]);
            if values[j] < values[min] {
                recorder.idle(&[min]);
                recorder.marked(&[j]);
                min = j;
            } else {
                recorder.idle(&[j]);
            }
        }
        if min != i {
            recorder.select(&[i, min]);
            recorder.swap(&mut values, i, min);
            recorder.idle(&[i, min]);
        }
        recorder.sorted(&[i]);
    }
    recorder.sorted(&[len - 1]);

    recorder.into_events()
}
