//! Event sink shared by every recording algorithm.

use crate::event::{AnimationEvent, SublistEntry};

/// Collects animation events in the order they are emitted.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<AnimationEvent>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn idle(&mut self, indices: &[usize]) {
        self.events.push(AnimationEvent::Idle {
            indices: indices.to_vec(),
        });
    }

    pub fn select(&mut self, indices: &[usize]) {
        self.events.push(AnimationEvent::Select {
            indices: indices.to_vec(),
        });
    }

    pub fn marked(&mut self, indices: &[usize]) {
        self.events.push(AnimationEvent::Marked {
            indices: indices.to_vec(),
        });
    }

    pub fn sorted(&mut self, indices: &[usize]) {
        self.events.push(AnimationEvent::Sorted {
            indices: indices.to_vec(),
        });
    }

    /// Record a swap and perform it on `values`.
    pub fn swap(&mut self, values: &mut [i64], a: usize, b: usize) {
        self.events.push(AnimationEvent::Swap { a, b });
        values.swap(a, b);
    }

    pub fn replace(&mut self, index: usize, value: i64) {
        self.events.push(AnimationEvent::Replace { index, value });
    }

    pub fn set_sublist(&mut self, entries: Vec<SublistEntry>) {
        self.events.push(AnimationEvent::SetSublist { entries });
    }

    pub fn merge_sublist(&mut self, indices: Vec<usize>) {
        self.events.push(AnimationEvent::MergeSublist { indices });
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Finish recording and hand back the events.
    pub fn into_events(self) -> Vec<AnimationEvent> {
        self.events
    }
}
