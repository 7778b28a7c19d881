//! The display array: the visual state animation events are applied to.

use serde::{Deserialize, Serialize};
use sortvis_record::{AnimationEvent, AnimationKind};

use crate::error::{Error, Result};

/// How the values of a display array were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayKind {
    /// Independent uniform values in `[min, max]`
    #[default]
    Random,
    /// Consecutive values from `min`, shuffled
    Sequence,
}

/// One visual bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayElement {
    pub value: i64,
    pub state: AnimationKind,
    /// True while the bar shows a tentative sublist value
    pub has_overlay: bool,
    /// Only meaningful when `has_overlay` is set
    pub overlay_value: i64,
}

impl DisplayElement {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            state: AnimationKind::Idle,
            has_overlay: false,
            overlay_value: 0,
        }
    }

    /// Value and overlay, ignoring the highlight state.
    pub fn contents(&self) -> (i64, bool, i64) {
        (self.value, self.has_overlay, self.overlay_value)
    }
}

/// Ordered bars plus the bounds they were generated with.
///
/// `min_value`/`max_value` only scale rendering; sorting never reads them,
/// except that counting sort derives its value bound from `max_value`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayArray {
    elements: Vec<DisplayElement>,
    kind: ArrayKind,
    min_value: i64,
    max_value: i64,
}

impl DisplayArray {
    /// Build a fresh, unhighlighted array from plain values.
    pub fn from_values(values: &[i64], kind: ArrayKind, min_value: i64, max_value: i64) -> Self {
        Self {
            elements: values.iter().copied().map(DisplayElement::new).collect(),
            kind,
            min_value,
            max_value,
        }
    }

    /// Primary values, in order.
    pub fn values(&self) -> Vec<i64> {
        self.elements.iter().map(|e| e.value).collect()
    }

    pub fn elements(&self) -> &[DisplayElement] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&DisplayElement> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Apply one event.
    ///
    /// Every index is checked before anything changes, so a bad event leaves
    /// the array untouched.
    pub fn apply(&mut self, event: &AnimationEvent) -> Result<()> {
        if let Some(index) = event.max_index() {
            if index >= self.elements.len() {
                return Err(Error::IndexOutOfRange {
                    index,
                    len: self.elements.len(),
                });
            }
        }

        match event {
            AnimationEvent::Idle { indices }
            | AnimationEvent::Select { indices }
            | AnimationEvent::Marked { indices }
            | AnimationEvent::Sorted { indices } => {
                let state = event.kind();
                for &i in indices {
                    self.elements[i].state = state;
                }
            }
            AnimationEvent::Swap { a, b } => {
                self.elements.swap(*a, *b);
                self.elements[*a].state = AnimationKind::Swap;
                self.elements[*b].state = AnimationKind::Swap;
            }
            AnimationEvent::Replace { index, value } => {
                let element = &mut self.elements[*index];
                element.value = *value;
                element.state = AnimationKind::Replace;
                element.has_overlay = false;
            }
            AnimationEvent::SetSublist { entries } => {
                for entry in entries {
                    let element = &mut self.elements[entry.index];
                    element.has_overlay = true;
                    element.overlay_value = entry.value;
                }
            }
            AnimationEvent::MergeSublist { indices } => {
                for &i in indices {
                    let element = &mut self.elements[i];
                    element.value = element.overlay_value;
                    element.has_overlay = false;
                    element.overlay_value = 0;
                }
            }
        }
        Ok(())
    }

    /// Apply events in order, stopping at the first invalid one.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a AnimationEvent>) -> Result<()> {
        for event in events {
            self.apply(event)?;
        }
        Ok(())
    }
}
