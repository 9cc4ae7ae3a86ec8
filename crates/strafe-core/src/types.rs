//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in playfield space (pixels; origin top-left, +y down).
/// Positions are entity centers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in pixels per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }
}

/// Axis-aligned rectangle, used for collision footprints and the playfield.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Strict overlap test. Rectangles that merely share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The rectangular simulation area, supplied by the host at session start
/// and on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            min: DVec2::ZERO,
            max: DVec2::new(self.width, self.height),
        }
    }

    /// Clamp a point into the playfield.
    pub fn clamp(&self, point: DVec2) -> DVec2 {
        point.clamp(DVec2::ZERO, DVec2::new(self.width, self.height))
    }
}

/// Session run timer. The start time latches on the first tick of a session,
/// so elapsed begins at exactly 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionClock {
    start_ms: Option<f64>,
    now_ms: f64,
}

impl SessionClock {
    /// Feed the current monotonic time in milliseconds.
    pub fn tick(&mut self, now_ms: f64) {
        if self.start_ms.is_none() {
            self.start_ms = Some(now_ms);
        }
        self.now_ms = now_ms;
    }

    /// Clear the start time for a new session.
    pub fn reset(&mut self) {
        self.start_ms = None;
        self.now_ms = 0.0;
    }

    /// Elapsed time since the first tick of the session, in milliseconds.
    /// 0 before the first tick.
    pub fn elapsed_ms(&self) -> u64 {
        match self.start_ms {
            Some(start) => (self.now_ms - start).max(0.0) as u64,
            None => 0,
        }
    }

    /// Zero-padded `HH:MM:SS` for the HUD timer.
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_ms())
    }
}

/// Convert elapsed milliseconds to a zero-padded `HH:MM:SS` string.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_secs = elapsed_ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
