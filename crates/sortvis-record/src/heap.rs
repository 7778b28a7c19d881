//! Heap sort over an in-place max-heap.

use crate::event::AnimationEvent;
use crate::recorder::Recorder;

/// Record a heap sort of `input`.
pub fn record_heap(input: &[i64]) -> Vec<AnimationEvent> {
    if input.len() <= 1 {
        return Vec::new();
    }
    let mut values = input.to_vec();
    let mut recorder = Recorder::new();

    heapify(&mut values, &mut recorder);

    let mut end = values.len() - 1;
    while end > 0 {
        recorder.select(&[end, 0]);
        recorder.swap(&mut values, end, 0);
        recorder.sorted(&[end]);
        end -= 1;
        sift_down(&mut values, 0, end, &mut recorder);
        if end == 0 {
            recorder.sorted(&[0]);
        }
    }

    recorder.into_events()
}

/// Build a max-heap, sifting down from the last parent back to the root.
fn heapify(values: &mut [i64], recorder: &mut Recorder) {
    let last = values.len() - 1;
    let last_parent = (values.len() - 2) / 2;
    for start in (0..=last_parent).rev() {
        sift_down(values, start, last, recorder);
    }
}

/// Restore the heap property for the subtree at `start`, within `values[..=end]`.
fn sift_down(values: &mut [i64], start: usize, end: usize, recorder: &mut Recorder) {
    let mut root = start;
    while 2 * root + 1 <= end {
        let child = 2 * root + 1;
        let mut largest = root;

        recorder.select(&[largest, child]);
        recorder.idle(&[largest, child]);
        if values[largest] < values[child] {
            largest = child;
        }
        if child + 1 <= end {
            recorder.select(&[largest, child + 1]);
            recorder.idle(&[largest, child + 1]);
            if values[largest] < values[child + 1] {
                largest = child + 1;
            }
        }

        if largest == root {
            return;
        }
        recorder.swap(values, root, largest);
        recorder.idle(&[root, largest]);
        root = largest;
    }
}
