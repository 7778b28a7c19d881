//! Sort Visualization Playback
//!
//! Paced replay of recorded sorting animations onto a display array.
//!
//! # Architecture
//!
//! - **Display**: Per-bar value, highlight state and merge overlay
//! - **Source**: Seedable random and shuffled-sequence array generation
//! - **Player**: Single paced loop with live speed control and stop
//! - **Server**: REST control surface plus WebSocket notification stream
//!
//! # Usage
//!
//! ```ignore
//! let mut generator = ArrayGenerator::new(Some(7));
//! let display = generator.generate(&config.array_spec(ArrayKind::Random, None))?;
//!
//! let player = Player::new(display, PlayerConfig::default());
//! player.start(Algorithm::Heap, Duration::from_millis(10)).await?;
//! player.wait().await;
//! ```

mod config;
mod display;
mod error;
mod playback;
mod player;
mod server;
mod source;

pub use config::VisConfig;
pub use display::{ArrayKind, DisplayArray, DisplayElement};
pub use error::{Error, Result};
pub use playback::{Playback, PlaybackProgress};
pub use player::{Player, PlayerConfig, PlayerNotification, PlayerState};
pub use server::VisServer;
pub use source::{ArrayGenerator, ArraySpec};

pub use sortvis_record::{Algorithm, AnimationEvent, AnimationKind};
