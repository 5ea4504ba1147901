//! Flick-throw detection from wrist motion
//!
//! Keeps a bounded FIFO of wrist samples per hand and estimates velocity as
//! `(newest - oldest) / dt` over the last few samples. A throw fires when the
//! speed crosses the threshold, then the detector cools down so one continuous
//! flick does not fire on consecutive frames.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::types::{GestureConfig, MotionSample, ThrowReason, ThrowResult, Vec3};

/// Per-hand throw detector
#[derive(Debug, Clone)]
pub struct ThrowDetector {
    /// Oldest first
    samples: VecDeque<MotionSample>,
    capacity: usize,
    window: usize,
    min_window_dt: f64,
    speed_threshold: f32,
    cooldown: f64,
    /// Survives `reset`
    last_throw_time: Option<f64>,
}

impl Default for ThrowDetector {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl ThrowDetector {
    pub fn new(config: &GestureConfig) -> Self {
        let capacity = config.sample_capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
            window: config.throw_window.clamp(2, capacity.max(2)),
            min_window_dt: config.min_window_dt,
            speed_threshold: config.throw_speed_threshold,
            cooldown: config.throw_cooldown,
            last_throw_time: None,
        }
    }

    /// Append a sample, evicting the oldest beyond capacity
    pub fn add_sample(&mut self, position: Vec3, time: f64) {
        self.samples.push_back(MotionSample::new(position, time));
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Check for a throw at `now`
    pub fn detect_throw(&mut self, now: f64) -> ThrowResult {
        if let Some(last) = self.last_throw_time {
            if now - last <= self.cooldown {
                return ThrowResult::rejected(ThrowReason::T002_COOLDOWN, 0.0);
            }
        }

        if self.samples.len() < self.window {
            return ThrowResult::rejected(ThrowReason::T003_INSUFFICIENT_SAMPLES, 0.0);
        }

        let newest = self.samples[self.samples.len() - 1];
        let oldest = self.samples[self.samples.len() - self.window];
        let dt = newest.timestamp - oldest.timestamp;
        if !(dt > self.min_window_dt) {
            return ThrowResult::rejected(ThrowReason::T004_DEGENERATE_WINDOW, 0.0);
        }

        let velocity = (newest.position - oldest.position) / dt as f32;
        let speed = velocity.length();
        trace!(speed, dt, "throw window");

        if speed > self.speed_threshold {
            self.last_throw_time = Some(now);
            debug!(speed, "throw detected");
            ThrowResult::thrown(velocity)
        } else {
            ThrowResult::rejected(ThrowReason::T005_BELOW_THRESHOLD, speed)
        }
    }

    /// Drop buffered motion. The cooldown timestamp is kept.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &MotionSample> {
        self.samples.iter()
    }

    /// Newest buffered sample
    pub fn latest(&self) -> Option<&MotionSample> {
        self.samples.back()
    }

    pub fn last_throw_time(&self) -> Option<f64> {
        self.last_throw_time
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Five samples 20ms apart covering `total` metres along X
    fn feed_window(detector: &mut ThrowDetector, start: f64, total: f32) {
        for i in 0..5 {
            let x = total * i as f32 / 4.0;
            detector.add_sample(Vec3::new(x, 0.0, 0.0), start + i as f64 * 0.02);
        }
    }

    #[test]
    fn test_capacity_bound_and_fifo_order() {
        let mut detector = ThrowDetector::default();
        for i in 0..40 {
            detector.add_sample(Vec3::new(i as f32, 0.0, 0.0), i as f64);
            assert!(detector.len() <= 15);
        }
        let xs: Vec<f32> = detector.samples().map(|s| s.position.x).collect();
        let expected: Vec<f32> = (25..40).map(|i| i as f32).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn test_insufficient_samples() {
        let mut detector = ThrowDetector::default();
        for i in 0..4 {
            detector.add_sample(Vec3::new(i as f32, 0.0, 0.0), i as f64 * 0.01);
        }
        let result = detector.detect_throw(0.05);
        assert!(!result.thrown);
        assert_eq!(result.reason, ThrowReason::T003_INSUFFICIENT_SAMPLES);
    }

    #[test]
    fn test_slow_motion_no_throw() {
        // 0.1m over 0.08s = 1.25 m/s
        let mut detector = ThrowDetector::default();
        feed_window(&mut detector, 0.0, 0.1);
        let result = detector.detect_throw(0.08);
        assert!(!result.thrown);
        assert_eq!(result.velocity, Vec3::ZERO);
        assert!((result.speed - 1.25).abs() < 1e-4, "speed {}", result.speed);
        assert_eq!(result.reason, ThrowReason::T005_BELOW_THRESHOLD);
    }

    #[test]
    fn test_fast_motion_throws_then_cools_down() {
        // 0.15m over 0.08s = 1.875 m/s
        let mut detector = ThrowDetector::default();
        feed_window(&mut detector, 0.0, 0.15);
        let result = detector.detect_throw(0.08);
        assert!(result.thrown);
        assert!((result.velocity.x - 1.875).abs() < 1e-4);
        assert!(result.velocity.y.abs() < 1e-6 && result.velocity.z.abs() < 1e-6);

        // Same qualifying window, 0.1s later
        let again = detector.detect_throw(0.18);
        assert!(!again.thrown);
        assert_eq!(again.velocity, Vec3::ZERO);
        assert_eq!(again.reason, ThrowReason::T002_COOLDOWN);
    }

    #[test]
    fn test_cooldown_boundary_inclusive() {
        let mut detector = ThrowDetector::default();
        feed_window(&mut detector, 0.0, 0.15);
        assert!(detector.detect_throw(1.0).thrown);
        assert!(!detector.detect_throw(1.5).thrown);
        assert!(detector.detect_throw(1.51).thrown);
    }

    #[test]
    fn test_degenerate_window() {
        let mut detector = ThrowDetector::default();
        for i in 0..5 {
            detector.add_sample(Vec3::new(i as f32, 0.0, 0.0), 1.0);
        }
        let result = detector.detect_throw(1.0);
        assert!(!result.thrown);
        assert_eq!(result.reason, ThrowReason::T004_DEGENERATE_WINDOW);
    }

    #[test]
    fn test_uses_most_recent_window_only() {
        let mut detector = ThrowDetector::default();
        // Fast motion long ago, then ten stationary samples
        feed_window(&mut detector, 0.0, 1.0);
        for i in 0..10 {
            detector.add_sample(Vec3::new(1.0, 0.0, 0.0), 0.1 + i as f64 * 0.02);
        }
        let result = detector.detect_throw(0.3);
        assert!(!result.thrown);
        assert_eq!(result.speed, 0.0);
    }

    #[test]
    fn test_reset_clears_samples_keeps_cooldown() {
        let mut detector = ThrowDetector::default();
        feed_window(&mut detector, 0.0, 0.15);
        assert!(detector.detect_throw(0.08).thrown);

        detector.reset();
        assert!(detector.is_empty());
        assert_eq!(detector.last_throw_time(), Some(0.08));

        feed_window(&mut detector, 0.1, 0.15);
        assert_eq!(detector.detect_throw(0.2).reason, ThrowReason::T002_COOLDOWN);
    }
}
