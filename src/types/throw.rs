//! Motion samples and throw-detection results

use serde::{Deserialize, Serialize};

use super::vector::Vec3;

/// Wrist position at a point in time (world space, seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub position: Vec3,
    pub timestamp: f64,
}

impl MotionSample {
    pub fn new(position: Vec3, timestamp: f64) -> Self {
        Self { position, timestamp }
    }
}

/// Outcome of one throw check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrowResult {
    /// Throw detected this call
    pub thrown: bool,
    /// Window velocity when thrown, zero otherwise
    pub velocity: Vec3,
    /// Estimated speed (m/s), 0 when no estimate was possible
    pub speed: f32,
    /// Why the check ended where it did
    pub reason: ThrowReason,
}

impl ThrowResult {
    pub fn thrown(velocity: Vec3) -> Self {
        Self {
            thrown: true,
            velocity,
            speed: velocity.length(),
            reason: ThrowReason::T001_THROWN,
        }
    }

    /// No throw; `speed` is kept for diagnostics only
    pub fn rejected(reason: ThrowReason, speed: f32) -> Self {
        Self {
            thrown: false,
            velocity: Vec3::ZERO,
            speed,
            reason,
        }
    }
}

/// Reason codes for throw checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ThrowReason {
    /// Speed crossed the threshold
    T001_THROWN,
    /// Still inside the cooldown window of the last throw
    T002_COOLDOWN,
    /// Fewer samples than the velocity window
    T003_INSUFFICIENT_SAMPLES,
    /// Window spans no usable time
    T004_DEGENERATE_WINDOW,
    /// Moving, but not fast enough
    T005_BELOW_THRESHOLD,
}

impl ThrowReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::T001_THROWN => "T001_THROWN",
            Self::T002_COOLDOWN => "T002_COOLDOWN",
            Self::T003_INSUFFICIENT_SAMPLES => "T003_INSUFFICIENT_SAMPLES",
            Self::T004_DEGENERATE_WINDOW => "T004_DEGENERATE_WINDOW",
            Self::T005_BELOW_THRESHOLD => "T005_BELOW_THRESHOLD",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::T001_THROWN => "Throw detected",
            Self::T002_COOLDOWN => "Cooling down after last throw",
            Self::T003_INSUFFICIENT_SAMPLES => "Not enough motion samples",
            Self::T004_DEGENERATE_WINDOW => "Sample window has no duration",
            Self::T005_BELOW_THRESHOLD => "Speed below throw threshold",
        }
    }
}

impl std::fmt::Display for ThrowReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
