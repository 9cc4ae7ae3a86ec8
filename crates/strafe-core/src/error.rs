//! Engine error taxonomy.
//!
//! Almost everything defensive is a silent no-op (stale destroys,
//! over-capacity fire requests). The one reported violation is driving an
//! engine whose session was never started.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors surfaced by the simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimError {
    /// `advance` was called before the first `request_replay` initialized the
    /// player and clock.
    SessionNotStarted,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::SessionNotStarted => {
                write!(f, "advance called before a session was started")
            }
        }
    }
}

impl std::error::Error for SimError {}
