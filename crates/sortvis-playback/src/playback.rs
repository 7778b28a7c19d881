//! Timeline cursor over a recorded animation.

use serde::{Deserialize, Serialize};
use sortvis_record::AnimationEvent;

/// FIFO cursor over a fixed, recorded event list.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    events: Vec<AnimationEvent>,
    cursor: usize,
}

impl Playback {
    /// Create a cursor positioned before the first event.
    pub fn new(events: Vec<AnimationEvent>) -> Self {
        Self { events, cursor: 0 }
    }

    /// Take the next event in recorded order.
    pub fn next_event(&mut self) -> Option<&AnimationEvent> {
        let event = self.events.get(self.cursor)?;
        self.cursor += 1;
        Some(event)
    }

    /// Number of events handed out so far.
    pub fn applied(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }

    pub fn total(&self) -> usize {
        self.events.len()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.events.is_empty() {
            0.0
        } else {
            self.cursor as f64 / self.events.len() as f64
        }
    }
}

/// Playback position for sending to a front end.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackProgress {
    pub applied: usize,
    pub total: usize,
    pub progress: f64,
}

impl From<&Playback> for PlaybackProgress {
    fn from(playback: &Playback) -> Self {
        Self {
            applied: playback.applied(),
            total: playback.total(),
            progress: playback.progress(),
        }
    }
}
