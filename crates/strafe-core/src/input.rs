//! Per-tick input snapshot supplied by the host.

use serde::{Deserialize, Serialize};

/// Input state sampled once per tick.
///
/// The direction flags are level-triggered (held keys). `fire_pressed` is an
/// edge: the host sets it only on the tick the fire key went down, not while
/// it is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire_pressed: bool,
}
