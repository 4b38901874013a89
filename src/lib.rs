//! ProfileReels - candidate review engine
//!
//! Presents a deck of candidate profiles one at a time. A reviewer swipes or
//! clicks to select or reject each profile, can undo the last decision, and
//! can message candidates on a side-channel that survives starting over.
//! The `core` module is the pure state machine; `routes` exposes it over
//! HTTP for a browser front-end.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ReviewSession, GestureTracker, COMMIT_THRESHOLD, INDICATOR_THRESHOLD};
pub use models::{Decision, Profile, ProfileId, SessionSnapshot};
pub use services::{ProfileSource, SessionRuntime, Timing};
