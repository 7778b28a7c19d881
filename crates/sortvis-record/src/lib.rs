//! Sort-and-Record Algorithms
//!
//! Sorting algorithms that, instead of only sorting, record a deterministic and
//! replayable sequence of [`AnimationEvent`]s: every comparison, swap, overwrite
//! and sub-range operation the algorithm performs on its way to a sorted array.
//!
//! # Recording
//!
//! Each recorder runs its sort to completion on a private copy of the input and
//! returns the full event list. Nothing is streamed and nothing can be cancelled;
//! only the replay of the events (see `sortvis-playback`) is interruptible.
//!
//! Arrays of length 0 or 1 are already sorted and always record zero events.
//!
//! # Replay guarantee
//!
//! Applying the events in order to a display array initialized from the input
//! (ignoring highlight and overlay state) yields the input sorted ascending.
//!
//! # Example
//!
//! ```
//! use sortvis_record::{Algorithm, AnimationEvent};
//!
//! let events = Algorithm::Merge.record(&[5, 3, 8, 1], None).unwrap();
//! assert!(matches!(events.last(), Some(AnimationEvent::Sorted { .. })));
//! ```

mod algorithm;
mod bubble;
mod counting;
mod error;
mod event;
mod heap;
mod insertion;
mod merge;
mod quick;
mod recorder;
mod selection;

pub use algorithm::Algorithm;
pub use bubble::record_bubble;
pub use counting::record_counting;
pub use error::{RecordError, Result};
pub use event::{AnimationEvent, AnimationKind, SublistEntry};
pub use heap::record_heap;
pub use insertion::record_insertion;
pub use merge::record_merge;
pub use quick::record_quick;
pub use recorder::Recorder;
pub use selection::record_selection;

#[cfg(test)]
pub(crate) mod testing {
    //! Value-only replay used by the per-algorithm tests.

    use crate::event::AnimationEvent;

    /// Replay events onto plain values, tracking overlays, and return the result.
    pub fn replay(input: &[i64], events: &[AnimationEvent]) -> Vec<i64> {
        let mut values = input.to_vec();
        let mut overlay: Vec<Option<i64>> = vec![None; input.len()];
        for event in events {
            match event {
                AnimationEvent::Swap { a, b } => {
                    values.swap(*a, *b);
                    overlay.swap(*a, *b);
                }
                AnimationEvent::Replace { index, value } => {
                    values[*index] = *value;
                    overlay[*index] = None;
                }
                AnimationEvent::SetSublist { entries } => {
                    for entry in entries {
                        overlay[entry.index] = Some(entry.value);
                    }
                }
                AnimationEvent::MergeSublist { indices } => {
                    for &i in indices {
                        values[i] = overlay[i].take().unwrap_or(0);
                    }
                }
                AnimationEvent::Idle { .. }
                | AnimationEvent::Select { .. }
                | AnimationEvent::Marked { .. }
                | AnimationEvent::Sorted { .. } => {}
            }
        }
        values
    }

    /// Every index that received a `Sorted` mark at some point.
    pub fn sorted_indices(len: usize, events: &[AnimationEvent]) -> Vec<bool> {
        let mut sorted = vec![false; len];
        for event in events {
            if let AnimationEvent::Sorted { indices } = event {
                for &i in indices {
                    sorted[i] = true;
                }
            }
        }
        sorted
    }

    pub fn sorted_copy(input: &[i64]) -> Vec<i64> {
        let mut v = input.to_vec();
        v.sort_unstable();
        v
    }
}
