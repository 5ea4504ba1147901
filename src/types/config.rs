//! Tunable thresholds, in one place

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::vector::Vec3;
use crate::error::{GestureError, Result};
use crate::{
    CURL_CURL_THRESHOLD, CURL_EXTEND_THRESHOLD, LAUNCH_MULTIPLIER, MIN_REFERENCE_DISTANCE,
    MIN_WINDOW_DT, PEACE_SPREAD_THRESHOLD, PINCH_DISTANCE, PROJECTILE_GRAVITY,
    PROJECTILE_LIFETIME_SECS, SAMPLE_CAPACITY, THROW_COOLDOWN_SECS, THROW_SPEED_THRESHOLD,
    THROW_WINDOW, THUMB_CURL_THRESHOLD, THUMB_EXTEND_THRESHOLD,
};

/// Every tunable of the engine. Missing JSON fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Finger extended when curl ratio > this
    pub extend_threshold: f32,
    /// Finger curled when curl ratio < this
    pub curl_threshold: f32,
    pub thumb_extend_threshold: f32,
    pub thumb_curl_threshold: f32,
    /// Metres
    pub pinch_distance: f32,
    /// Metres, index-middle tip spread for Peace
    pub spread_threshold: f32,
    /// Metres, reference distances below this are degenerate
    pub min_reference_distance: f32,
    /// m/s
    pub throw_speed_threshold: f32,
    /// Seconds
    pub throw_cooldown: f64,
    /// Samples in the velocity window
    pub throw_window: usize,
    /// Samples buffered per hand
    pub sample_capacity: usize,
    /// Seconds
    pub min_window_dt: f64,
    pub launch_multiplier: f32,
    /// m/s²
    pub gravity: Vec3,
    /// Seconds
    pub projectile_lifetime: f64,
    /// Rendering hint only; never read by classification
    pub show_joint_visuals: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            extend_threshold: CURL_EXTEND_THRESHOLD,
            curl_threshold: CURL_CURL_THRESHOLD,
            thumb_extend_threshold: THUMB_EXTEND_THRESHOLD,
            thumb_curl_threshold: THUMB_CURL_THRESHOLD,
            pinch_distance: PINCH_DISTANCE,
            spread_threshold: PEACE_SPREAD_THRESHOLD,
            min_reference_distance: MIN_REFERENCE_DISTANCE,
            throw_speed_threshold: THROW_SPEED_THRESHOLD,
            throw_cooldown: THROW_COOLDOWN_SECS,
            throw_window: THROW_WINDOW,
            sample_capacity: SAMPLE_CAPACITY,
            min_window_dt: MIN_WINDOW_DT,
            launch_multiplier: LAUNCH_MULTIPLIER,
            gravity: Vec3::new(0.0, PROJECTILE_GRAVITY, 0.0),
            projectile_lifetime: PROJECTILE_LIFETIME_SECS,
            show_joint_visuals: false,
        }
    }
}

impl GestureConfig {
    /// Load a JSON config file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GestureError::io(path, e))?;
        let config: GestureConfig = serde_json::from_str(&content).map_err(|e| GestureError::Json {
            line: e.line(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("extend_threshold", self.extend_threshold),
            ("curl_threshold", self.curl_threshold),
            ("thumb_extend_threshold", self.thumb_extend_threshold),
            ("thumb_curl_threshold", self.thumb_curl_threshold),
            ("pinch_distance", self.pinch_distance),
            ("spread_threshold", self.spread_threshold),
            ("min_reference_distance", self.min_reference_distance),
            ("throw_speed_threshold", self.throw_speed_threshold),
            ("launch_multiplier", self.launch_multiplier),
        ];
        for (name, value) in floats {
            if !value.is_finite() || value < 0.0 {
                return Err(GestureError::InvalidConfig(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !self.gravity.is_finite() {
            return Err(GestureError::InvalidConfig("gravity must be finite".to_string()));
        }
        if self.curl_threshold > self.extend_threshold {
            return Err(GestureError::InvalidConfig(format!(
                "curl_threshold ({}) exceeds extend_threshold ({})",
                self.curl_threshold, self.extend_threshold
            )));
        }
        if self.thumb_curl_threshold > self.thumb_extend_threshold {
            return Err(GestureError::InvalidConfig(format!(
                "thumb_curl_threshold ({}) exceeds thumb_extend_threshold ({})",
                self.thumb_curl_threshold, self.thumb_extend_threshold
            )));
        }
        if self.throw_window < 2 {
            return Err(GestureError::InvalidConfig("throw_window needs at least 2 samples".to_string()));
        }
        if self.throw_window > self.sample_capacity {
            return Err(GestureError::InvalidConfig(format!(
                "throw_window ({}) exceeds sample_capacity ({})",
                self.throw_window, self.sample_capacity
            )));
        }
        if !(self.throw_cooldown.is_finite() && self.throw_cooldown >= 0.0) {
            return Err(GestureError::InvalidConfig("throw_cooldown must be >= 0".to_string()));
        }
        if !(self.min_window_dt.is_finite() && self.min_window_dt >= 0.0) {
            return Err(GestureError::InvalidConfig("min_window_dt must be >= 0".to_string()));
        }
        if !(self.projectile_lifetime.is_finite() && self.projectile_lifetime > 0.0) {
            return Err(GestureError::InvalidConfig("projectile_lifetime must be > 0".to_string()));
        }
        Ok(())
    }
}
