//! Animation events: the vocabulary a recording sort emits.

/// The visual effect of an event. Also used as the highlight state of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKind {
    /// Normal, unhighlighted
    #[default]
    Idle,
    /// Being compared
    Select,
    /// Exchanged with another element
    Swap,
    /// Overwritten with a final value
    Replace,
    /// Part of the range currently being worked on
    Marked,
    /// In its final position
    Sorted,
    /// Showing a tentative sublist value
    SetSublist,
    /// Sublist value committed into the primary value
    MergeSublist,
}

/// One tentative placement inside a merge: show `value` on top of `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SublistEntry {
    pub index: usize,
    pub value: i64,
}

impl SublistEntry {
    pub const fn new(index: usize, value: i64) -> Self {
        Self { index, value }
    }
}

/// A single replayable visual step.
///
/// Events are produced in the exact order the algorithm performed the
/// corresponding operation. All indices are positions in the array being sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type")
)]
pub enum AnimationEvent {
    /// Revert the highlight of these indices
    Idle { indices: Vec<usize> },
    /// Highlight these indices as being compared
    Select { indices: Vec<usize> },
    /// Exchange the elements at `a` and `b`
    Swap { a: usize, b: usize },
    /// Overwrite the value at `index`
    Replace { index: usize, value: i64 },
    /// Highlight these indices as the working range
    Marked { indices: Vec<usize> },
    /// These indices hold their final values
    Sorted { indices: Vec<usize> },
    /// Show tentative overlay values
    SetSublist { entries: Vec<SublistEntry> },
    /// Commit the overlay of these indices into their primary values
    MergeSublist { indices: Vec<usize> },
}

impl AnimationEvent {
    /// The kind of this event.
    pub fn kind(&self) -> AnimationKind {
        match self {
            AnimationEvent::Idle { .. } => AnimationKind::Idle,
            AnimationEvent::Select { .. } => AnimationKind::Select,
            AnimationEvent::Swap { .. } => AnimationKind::Swap,
            AnimationEvent::Replace { .. } => AnimationKind::Replace,
            AnimationEvent::Marked { .. } => AnimationKind::Marked,
            AnimationEvent::Sorted { .. } => AnimationKind::Sorted,
            AnimationEvent::SetSublist { .. } => AnimationKind::SetSublist,
            AnimationEvent::MergeSublist { .. } => AnimationKind::MergeSublist,
        }
    }

    /// Every index this event touches, in payload order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            AnimationEvent::Idle { indices }
            | AnimationEvent::Select { indices }
            | AnimationEvent::Marked { indices }
            | AnimationEvent::Sorted { indices }
            | AnimationEvent::MergeSublist { indices } => indices.clone(),
            AnimationEvent::Swap { a, b } => vec![*a, *b],
            AnimationEvent::Replace { index, .. } => vec![*index],
            AnimationEvent::SetSublist { entries } => entries.iter().map(|e| e.index).collect(),
        }
    }

    /// The largest index this event touches, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.indices().into_iter().max()
    }
}
