//! Animation player: paced, stoppable replay of a recorded sort.
//!
//! # Lifecycle
//!
//! `Idle → Running → (Stopped | Completed)`. Starting records the whole event
//! list synchronously, then spawns a single playback loop that applies one
//! event per step to the shared [`DisplayArray`].
//!
//! # Shared controls
//!
//! The delay and the run flag live in `watch` channels owned by the player.
//! The loop reads both fresh on every step, so speed changes apply from the
//! next scheduled step and a stop request wakes the loop out of its current
//! wait. A step that has begun always finishes.
//!
//! # Notifications
//!
//! Every applied event, plus start, stop and completion, is published on a
//! `broadcast` channel (see [`Player::subscribe`]).

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortvis_record::{Algorithm, AnimationEvent};
use tokio::sync::{broadcast, watch, Mutex, RwLock};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, trace, warn};

use crate::display::DisplayArray;
use crate::error::{Error, Result};
use crate::playback::{Playback, PlaybackProgress};

/// Lifecycle state of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// Nothing has been played yet
    #[default]
    Idle,
    /// A playback loop is active
    Running,
    /// Playback ended on request
    Stopped,
    /// Playback ended because every event was applied
    Completed,
}

/// State changes published by a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerNotification {
    /// A run was recorded and playback is about to begin
    Started {
        algorithm: Algorithm,
        total_events: usize,
    },
    /// One event was applied to the display array (`step` is 1-based)
    Applied { step: usize, event: AnimationEvent },
    /// Playback ended on request
    Stopped { applied: usize },
    /// Every recorded event was applied
    Completed { applied: usize },
}

/// Configuration for a player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Shortest allowed delay between steps
    pub min_delay: Duration,
    /// Longest allowed delay between steps
    pub max_delay: Duration,
    /// Notifications buffered per subscriber before it starts lagging
    pub notify_capacity: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1000),
            notify_capacity: 1024,
        }
    }
}

/// Replays recorded sorts onto a display array, one event per step.
pub struct Player {
    config: PlayerConfig,
    display: Arc<RwLock<DisplayArray>>,
    delay: watch::Sender<Duration>,
    running: watch::Sender<bool>,
    state: Arc<watch::Sender<PlayerState>>,
    progress: Arc<watch::Sender<PlaybackProgress>>,
    notifications: broadcast::Sender<PlayerNotification>,
    task: Mutex<Option<JoinHandle<PlayerState>>>,
}

impl Player {
    /// Create an idle player over `display`.
    pub fn new(display: DisplayArray, config: PlayerConfig) -> Self {
        let (delay, _) = watch::channel(config.min_delay);
        let (running, _) = watch::channel(false);
        let (state, _) = watch::channel(PlayerState::Idle);
        let (progress, _) = watch::channel(PlaybackProgress::default());
        let (notifications, _) = broadcast::channel(config.notify_capacity.max(1));
        Self {
            config,
            display: Arc::new(RwLock::new(display)),
            delay,
            running,
            state: Arc::new(state),
            progress: Arc::new(progress),
            notifications,
            task: Mutex::new(None),
        }
    }

    /// Record `algorithm` over the current display values and start playback.
    ///
    /// Returns the number of recorded events. Fails with
    /// [`Error::AlreadyRunning`] if a loop is active; use [`Player::restart`]
    /// to replace a running playback. Counting sort uses `max_value + 1` as its
    /// exclusive bound, since generated values may equal `max_value`.
    pub async fn start(&self, algorithm: Algorithm, initial_delay: Duration) -> Result<usize> {
        let mut task = self.task.lock().await;
        if let Some(previous) = task.take() {
            if self.is_running() && !previous.is_finished() {
                *task = Some(previous);
                return Err(Error::AlreadyRunning);
            }
            // A loop that ended normally has already published its final state.
            if let Err(e) = previous.await {
                self.loop_failed(e);
            }
        }
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }

        let (values, bound) = {
            let display = self.display.read().await;
            (display.values(), display.max_value().saturating_add(1))
        };
        let events = algorithm.record(&values, Some(bound))?;
        let total_events = events.len();
        let playback = Playback::new(events);
        self.progress.send_replace(PlaybackProgress::from(&playback));

        let delay = self.clamp_delay(initial_delay);
        self.delay.send_replace(delay);
        self.running.send_replace(true);
        self.state.send_replace(PlayerState::Running);

        info!(
            algorithm = %algorithm,
            len = values.len(),
            events = total_events,
            delay_ms = delay.as_millis() as u64,
            "playback started"
        );
        let _ = self.notifications.send(PlayerNotification::Started {
            algorithm,
            total_events,
        });

        let playback_loop = PlaybackLoop {
            playback,
            display: Arc::clone(&self.display),
            delay: self.delay.subscribe(),
            running: self.running.subscribe(),
            state: Arc::clone(&self.state),
            progress: Arc::clone(&self.progress),
            notifications: self.notifications.clone(),
        };
        *task = Some(tokio::spawn(playback_loop.run()));

        Ok(total_events)
    }

    /// Stop the active run, wait for its loop to end, then start a new one.
    pub async fn restart(&self, algorithm: Algorithm, initial_delay: Duration) -> Result<usize> {
        self.stop();
        self.wait().await;
        self.start(algorithm, initial_delay).await
    }

    /// Request a stop. Takes effect at the loop's next wait, not mid-step.
    pub fn stop(&self) {
        if self.running.send_replace(false) {
            debug!("stop requested");
        }
    }

    /// Change the delay between steps, clamped to the configured range.
    ///
    /// Applies from the next scheduled step. Returns the delay actually set.
    pub fn set_delay(&self, delay: Duration) -> Duration {
        let delay = self.clamp_delay(delay);
        self.delay.send_replace(delay);
        debug!(delay_ms = delay.as_millis() as u64, "delay changed");
        delay
    }

    /// Current delay between steps.
    pub fn delay(&self) -> Duration {
        *self.delay.borrow()
    }

    pub fn state(&self) -> PlayerState {
        *self.state.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlayerState::Running
    }

    /// Wait for the active loop (if any) to end and return the final state.
    pub async fn wait(&self) -> PlayerState {
        let handle = self.task.lock().await.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                self.loop_failed(e);
            }
        }
        self.state()
    }

    fn loop_failed(&self, e: JoinError) {
        error!("playback loop failed: {}", e);
        self.running.send_replace(false);
        self.state.send_replace(PlayerState::Stopped);
    }

    /// Replace the display array wholesale. Rejected while running.
    pub async fn replace_display(&self, display: DisplayArray) -> Result<()> {
        let _task = self.task.lock().await;
        if self.is_running() {
            return Err(Error::AlreadyRunning);
        }
        *self.display.write().await = display;
        self.progress.send_replace(PlaybackProgress::default());
        Ok(())
    }

    /// Copy of the display array as last mutated.
    pub async fn snapshot(&self) -> DisplayArray {
        self.display.read().await.clone()
    }

    /// Shared handle to the display array.
    pub fn display(&self) -> Arc<RwLock<DisplayArray>> {
        Arc::clone(&self.display)
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerNotification> {
        self.notifications.subscribe()
    }

    /// Observe lifecycle state changes.
    pub fn watch_state(&self) -> watch::Receiver<PlayerState> {
        self.state.subscribe()
    }

    /// Position of the current (or last) run.
    pub fn progress(&self) -> PlaybackProgress {
        *self.progress.borrow()
    }

    fn clamp_delay(&self, delay: Duration) -> Duration {
        delay.clamp(self.config.min_delay, self.config.max_delay.max(self.config.min_delay))
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.running.send_replace(false);
    }
}

/// The single playback loop of a run.
struct PlaybackLoop {
    playback: Playback,
    display: Arc<RwLock<DisplayArray>>,
    delay: watch::Receiver<Duration>,
    running: watch::Receiver<bool>,
    state: Arc<watch::Sender<PlayerState>>,
    progress: Arc<watch::Sender<PlaybackProgress>>,
    notifications: broadcast::Sender<PlayerNotification>,
}

impl PlaybackLoop {
    async fn run(mut self) -> PlayerState {
        let outcome = loop {
            if !*self.running.borrow_and_update() {
                break PlayerState::Stopped;
            }
            let Some(event) = self.playback.next_event().cloned() else {
                break PlayerState::Completed;
            };

            let applied = {
                let mut display = self.display.write().await;
                display.apply(&event)
            };
            if let Err(e) = applied {
                warn!("dropping playback: {}", e);
                break PlayerState::Stopped;
            }

            let step = self.playback.applied();
            self.progress.send_replace(PlaybackProgress::from(&self.playback));
            trace!(step, kind = ?event.kind(), "applied event");
            let _ = self
                .notifications
                .send(PlayerNotification::Applied { step, event });

            let delay = *self.delay.borrow_and_update();
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = self.running.changed() => {
                    if changed.is_err() {
                        break PlayerState::Stopped;
                    }
                }
            }
        };

        let applied = self.playback.applied();
        self.state.send_replace(outcome);
        let notification = match outcome {
            PlayerState::Completed => PlayerNotification::Completed { applied },
            _ => PlayerNotification::Stopped { applied },
        };
        let _ = self.notifications.send(notification);
        info!(
            state = ?outcome,
            applied,
            remaining = self.playback.remaining(),
            finished = self.playback.is_finished(),
            "playback ended"
        );
        outcome
    }
}
