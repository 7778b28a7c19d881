//! Cross-crate tests for recording and playback.
//!
//! The tests live in `tests/`; this crate exports nothing.
