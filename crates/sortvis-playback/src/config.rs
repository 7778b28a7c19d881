//! Visualizer configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::display::ArrayKind;
use crate::error::{Error, Result};
use crate::player::PlayerConfig;
use crate::source::ArraySpec;

/// Largest value a generated array may contain.
pub const MAX_GENERATED_VALUE: i64 = 700;
/// Smallest value of a random array.
pub const MIN_RANDOM_VALUE: i64 = 20;
/// First value of a sequence array.
pub const MIN_SEQUENCE_VALUE: i64 = 5;
/// Bar count bounds.
pub const MIN_BARS: usize = 4;
pub const MAX_BARS: usize = 400;
/// Delay bounds between animation steps.
pub const MIN_DELAY: Duration = Duration::from_millis(1);
pub const MAX_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for the visualizer server.
#[derive(Debug, Clone)]
pub struct VisConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Bars in a generated array
    pub bars: usize,

    /// Delay between steps when a run starts without an explicit one
    pub delay: Duration,

    /// Seed for reproducible arrays (random when unset)
    pub seed: Option<u64>,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            bars: 60,
            delay: MIN_DELAY,
            seed: None,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables, falling back to defaults.
    ///
    /// Reads `SORTVIS_ADDR`, `SORTVIS_BARS`, `SORTVIS_DELAY_MS` and `SORTVIS_SEED`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup("SORTVIS_ADDR") {
            config.addr = parse("SORTVIS_ADDR", &addr)?;
        }
        if let Some(bars) = lookup("SORTVIS_BARS") {
            config.bars = parse("SORTVIS_BARS", &bars)?;
        }
        if let Some(delay) = lookup("SORTVIS_DELAY_MS") {
            config.delay = Duration::from_millis(parse("SORTVIS_DELAY_MS", &delay)?);
        }
        if let Some(seed) = lookup("SORTVIS_SEED") {
            config.seed = Some(parse("SORTVIS_SEED", &seed)?);
        }

        Ok(config.clamped())
    }

    /// Pull bar count and delay into their allowed ranges.
    pub fn clamped(mut self) -> Self {
        self.bars = clamp_bars(self.bars);
        self.delay = self.delay.clamp(MIN_DELAY, MAX_DELAY);
        self
    }

    /// Generation parameters for a new array of `kind`.
    pub fn array_spec(&self, kind: ArrayKind, bars: Option<usize>) -> ArraySpec {
        let min_value = match kind {
            ArrayKind::Random => MIN_RANDOM_VALUE,
            ArrayKind::Sequence => MIN_SEQUENCE_VALUE,
        };
        ArraySpec {
            kind,
            min_value,
            max_value: MAX_GENERATED_VALUE,
            amount: clamp_bars(bars.unwrap_or(self.bars)),
        }
    }

    /// Player settings derived from this config.
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            min_delay: MIN_DELAY,
            max_delay: MAX_DELAY,
            ..PlayerConfig::default()
        }
    }
}

fn clamp_bars(bars: usize) -> usize {
    bars.clamp(MIN_BARS, MAX_BARS)
}

fn parse<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("invalid {key}={raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = VisConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bars, 60);
        assert_eq!(config.delay, MIN_DELAY);
        assert_eq!(config.addr.port(), 3000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn env_overrides() {
        let config = VisConfig::from_lookup(lookup(&[
            ("SORTVIS_ADDR", "127.0.0.1:8099"),
            ("SORTVIS_BARS", "120"),
            ("SORTVIS_DELAY_MS", "250"),
            ("SORTVIS_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:8099".parse().unwrap());
        assert_eq!(config.bars, 120);
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = VisConfig::from_lookup(lookup(&[
            ("SORTVIS_BARS", "5000"),
            ("SORTVIS_DELAY_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.bars, MAX_BARS);
        assert_eq!(config.delay, MIN_DELAY);
    }

    #[test]
    fn malformed_values_are_errors() {
        let err = VisConfig::from_lookup(lookup(&[("SORTVIS_BARS", "many")])).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("SORTVIS_BARS")));
    }

    #[test]
    fn array_spec_uses_kind_minimum() {
        let config = VisConfig::default();
        let random = config.array_spec(ArrayKind::Random, None);
        assert_eq!((random.min_value, random.max_value, random.amount), (20, 700, 60));
        let sequence = config.array_spec(ArrayKind::Sequence, Some(1));
        assert_eq!((sequence.min_value, sequence.amount), (5, MIN_BARS));
    }
}
