//! Registry of the supported sorting algorithms.

use std::fmt;
use std::str::FromStr;

use crate::error::{RecordError, Result};
use crate::event::AnimationEvent;
use crate::{
    record_bubble, record_counting, record_heap, record_insertion, record_merge, record_quick,
    record_selection,
};

/// A sorting algorithm that can be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Selection,
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
    Counting,
}

impl Algorithm {
    /// Every algorithm, in the order they are offered for selection.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Counting,
    ];

    /// Display name, e.g. `"Merge Sort"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Counting => "Counting Sort",
        }
    }

    /// Short lowercase identifier, e.g. `"merge"`.
    pub const fn slug(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
        }
    }

    /// Whether recording needs an exclusive upper value bound.
    pub const fn requires_bound(&self) -> bool {
        matches!(self, Algorithm::Counting)
    }

    /// Record a full run of this algorithm over `values`.
    ///
    /// `bound` is the exclusive upper value bound; it is only consulted by
    /// counting sort, which fails with [`RecordError::MissingBound`] without it.
    pub fn record(&self, values: &[i64], bound: Option<i64>) -> Result<Vec<AnimationEvent>> {
        let events = match self {
            Algorithm::Selection => record_selection(values),
            Algorithm::Bubble => record_bubble(values),
            Algorithm::Insertion => record_insertion(values),
            Algorithm::Merge => record_merge(values),
            Algorithm::Quick => record_quick(values),
            Algorithm::Heap => record_heap(values),
            Algorithm::Counting => {
                let max_value = bound.ok_or(RecordError::MissingBound)?;
                record_counting(values, max_value)?
            }
        };
        Ok(events)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RecordError;

    /// Accepts the display name (`"Heap Sort"`) or a slug (`"heap"`,
    /// `"heap-sort"`, `"heap_sort"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        let normalized = normalized.strip_suffix(" sort").unwrap_or(&normalized);

        Algorithm::ALL
            .into_iter()
            .find(|a| a.slug() == normalized)
            .ok_or_else(|| RecordError::UnknownAlgorithm(s.to_string()))
    }
}
