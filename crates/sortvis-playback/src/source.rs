//! Array generation for new datasets.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::display::{ArrayKind, DisplayArray};
use crate::error::{Error, Result};

/// Parameters for a generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySpec {
    pub kind: ArrayKind,
    pub min_value: i64,
    pub max_value: i64,
    pub amount: usize,
}

/// Produces fresh display arrays from a seedable RNG.
pub struct ArrayGenerator {
    rng: StdRng,
}

impl ArrayGenerator {
    /// Create a generator; a seed makes every generated array reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate an array per `spec`.
    ///
    /// Random arrays hold `amount` uniform values in `[min, max]`. Sequence
    /// arrays hold `min, min+1, ...` up to but excluding `max`, truncated to
    /// `amount`, then shuffled.
    pub fn generate(&mut self, spec: &ArraySpec) -> Result<DisplayArray> {
        if spec.min_value > spec.max_value {
            return Err(Error::InvalidArraySpec(format!(
                "min {} exceeds max {}",
                spec.min_value, spec.max_value
            )));
        }

        let values: Vec<i64> = match spec.kind {
            ArrayKind::Random => (0..spec.amount)
                .map(|_| self.rng.gen_range(spec.min_value..=spec.max_value))
                .collect(),
            ArrayKind::Sequence => {
                let mut values: Vec<i64> = (spec.min_value..spec.max_value).take(spec.amount).collect();
                values.shuffle(&mut self.rng);
                values
            }
        };

        tracing::debug!(
            kind = ?spec.kind,
            len = values.len(),
            min = spec.min_value,
            max = spec.max_value,
            "generated array"
        );

        Ok(DisplayArray::from_values(
            &values,
            spec.kind,
            spec.min_value,
            spec.max_value,
        ))
    }
}
