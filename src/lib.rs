//! Webshooter: procedural hand-gesture engine
//!
//! Skeleton frame → finger features → gesture flags + edge events →
//! flick-throw detection → projectile simulation. One synchronous tick at a time.

pub mod core;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{GestureError, Result};

// =============================================================================
// FINGER THRESHOLDS [C] - curl ratio dead zones
// =============================================================================

/// Non-thumb finger counts as extended above this curl ratio
pub const CURL_EXTEND_THRESHOLD: f32 = 1.15;

/// Non-thumb finger counts as curled below this curl ratio
pub const CURL_CURL_THRESHOLD: f32 = 1.10;

/// Thumb counts as extended above this ratio (palm-center normalised)
pub const THUMB_EXTEND_THRESHOLD: f32 = 0.95;

/// Thumb counts as curled below this ratio
pub const THUMB_CURL_THRESHOLD: f32 = 0.75;

/// Reference distances shorter than this (metres) are degenerate
pub const MIN_REFERENCE_DISTANCE: f32 = 0.001;

/// Ratio reported for degenerate frames
pub const NEUTRAL_RATIO: f32 = 1.0;

// =============================================================================
// GESTURE THRESHOLDS [C]
// =============================================================================

/// Thumb-tip to fingertip distance (metres) below which a pinch is held
pub const PINCH_DISTANCE: f32 = 0.025;

/// Index-middle tip spread (metres) a V-sign must exceed
pub const PEACE_SPREAD_THRESHOLD: f32 = 0.04;

// =============================================================================
// THROW DETECTION [C]
// =============================================================================

/// Wrist speed (m/s) that counts as a flick
pub const THROW_SPEED_THRESHOLD: f32 = 1.5;

/// Seconds after a throw before another may fire
pub const THROW_COOLDOWN_SECS: f64 = 0.5;

/// Motion samples kept per hand
pub const SAMPLE_CAPACITY: usize = 15;

/// Most recent samples used for the velocity estimate
pub const THROW_WINDOW: usize = 5;

/// Window durations at or below this (seconds) are degenerate
pub const MIN_WINDOW_DT: f64 = 0.001;

// =============================================================================
// PROJECTILES [C]
// =============================================================================

/// Detector velocity is exaggerated by this factor at launch
pub const LAUNCH_MULTIPLIER: f32 = 2.0;

/// Downward acceleration (m/s²), softer than Earth for a floaty arc
pub const PROJECTILE_GRAVITY: f32 = -4.9;

/// Seconds a projectile lives
pub const PROJECTILE_LIFETIME_SECS: f64 = 3.0;

/// Scale lost over the full lifetime (1.0 → 0.2)
pub const PROJECTILE_SHRINK: f64 = 0.8;

/// Scale never drops below this
pub const PROJECTILE_MIN_SCALE: f64 = 0.1;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
