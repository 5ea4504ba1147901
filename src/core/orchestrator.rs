//! Frame orchestrator: runs once per tracking tick
//!
//! Per hand: skeleton → features → gestures → edge events → throw detection.
//! Then every live projectile is advanced. Hands never share state.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, trace, warn};

use crate::core::classifier::{detect_activations, detect_pinch_edges, pinch_flags, GestureClassifier};
use crate::core::projectile::ProjectileSimulator;
use crate::core::throw_detector::ThrowDetector;
use crate::types::{
    CueEvent, FingerMetric, GestureConfig, GestureState, GestureSummary, HandJoint, HandReport,
    HandSide, HandsFrame, JointFrame, ProjectileView, TickReport,
};

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Supplies the latest skeleton per hand; `None` when tracking is lost
pub trait SkeletonSource {
    fn latest_skeleton(&self, side: HandSide) -> Option<&JointFrame>;
}

impl SkeletonSource for HandsFrame {
    fn latest_skeleton(&self, side: HandSide) -> Option<&JointFrame> {
        self.hand(side)
    }
}

/// Monotonic seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// `Instant`-backed clock starting at zero
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Receives one-shot cue events (e.g. to play a sound)
pub trait CueSink {
    fn cue(&mut self, event: &CueEvent);
}

impl CueSink for Vec<CueEvent> {
    fn cue(&mut self, event: &CueEvent) {
        self.push(event.clone());
    }
}

// =============================================================================
// PER-HAND STATE
// =============================================================================

/// Everything one hand carries between ticks
#[derive(Debug, Clone)]
pub struct HandState {
    pub side: HandSide,
    pub gestures: GestureState,
    pub fingers: Vec<FingerMetric>,
    pub pinching: [bool; 5],
    pub detector: ThrowDetector,
    pub tracked: bool,
}

impl HandState {
    pub fn new(side: HandSide, config: &GestureConfig) -> Self {
        Self {
            side,
            gestures: GestureState::default(),
            fingers: Vec::new(),
            pinching: [false; 5],
            detector: ThrowDetector::new(config),
            tracked: false,
        }
    }

    /// Tracking lost: no gesture, no visuals, no motion history
    fn lose_tracking(&mut self) {
        if self.tracked {
            debug!(side = %self.side, "tracking lost");
        }
        self.tracked = false;
        self.gestures = GestureState::default();
        self.fingers.clear();
        self.pinching = [false; 5];
        self.detector.reset();
    }

    fn report(&self) -> HandReport {
        HandReport {
            side: self.side,
            tracked: self.tracked,
            fingers: self.fingers.clone(),
            gestures: self.gestures.current(),
            throw_check: None,
        }
    }
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Drives both hands and the projectile simulation, one tick at a time.
///
/// Not re-entrant: callers on several threads must serialize `tick` calls.
#[derive(Debug, Clone)]
pub struct FrameOrchestrator {
    config: GestureConfig,
    classifier: GestureClassifier,
    hands: [HandState; 2],
    projectiles: ProjectileSimulator,
    last_tick: Option<f64>,
    tick_count: u64,
}

impl Default for FrameOrchestrator {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl FrameOrchestrator {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(config.clone()),
            hands: [
                HandState::new(HandSide::Left, &config),
                HandState::new(HandSide::Right, &config),
            ],
            projectiles: ProjectileSimulator::new(&config),
            last_tick: None,
            tick_count: 0,
            config,
        }
    }

    /// Tick using the clock's current time
    pub fn tick(&mut self, source: &dyn SkeletonSource, clock: &dyn Clock) -> TickReport {
        self.tick_at(source, clock.now())
    }

    /// Tick at an explicit time and forward every event to `sink`
    pub fn tick_with_sink(&mut self, source: &dyn SkeletonSource, now: f64, sink: &mut dyn CueSink) -> TickReport {
        let report = self.tick_at(source, now);
        for event in &report.events {
            sink.cue(event);
        }
        report
    }

    /// Run one tick at `now`
    pub fn tick_at(&mut self, source: &dyn SkeletonSource, now: f64) -> TickReport {
        if let Some(last) = self.last_tick {
            if now < last {
                warn!(now, last, "tick time went backwards");
            }
        }
        self.last_tick = Some(now);
        self.tick_count += 1;

        let mut events = Vec::new();
        let mut reports = Vec::with_capacity(2);
        for side in HandSide::BOTH {
            let report = self.process_hand(side, source.latest_skeleton(side), now, &mut events);
            reports.push(report);
        }

        let projectiles = self.projectiles.advance(now);
        trace!(tick = self.tick_count, projectiles = projectiles.len(), events = events.len(), "tick");

        let right = reports.pop().unwrap_or_else(|| HandReport::untracked(HandSide::Right));
        let left = reports.pop().unwrap_or_else(|| HandReport::untracked(HandSide::Left));
        TickReport {
            timestamp: Utc::now(),
            time: now,
            left,
            right,
            events,
            projectiles,
            show_joint_visuals: self.config.show_joint_visuals,
        }
    }

    fn process_hand(
        &mut self,
        side: HandSide,
        skeleton: Option<&JointFrame>,
        now: f64,
        events: &mut Vec<CueEvent>,
    ) -> HandReport {
        let hand = &mut self.hands[side.index()];

        let Some(frame) = skeleton else {
            hand.lose_tracking();
            return hand.report();
        };
        if !hand.tracked {
            debug!(side = %side, "tracking acquired");
        }
        hand.tracked = true;

        // Features → gestures → edges
        let classification = self.classifier.classify(frame);
        hand.gestures.advance(classification.flags);

        for event in detect_activations(side, hand.gestures.previous(), hand.gestures.current()) {
            debug!(side = %side, event = %event.label(), "gesture activated");
            events.push(event);
        }
        for event in detect_pinch_edges(side, &hand.pinching, &classification.metrics) {
            debug!(side = %side, event = %event.label(), "pinch started");
            events.push(event);
        }
        hand.pinching = pinch_flags(&classification.metrics);
        hand.fingers = classification.metrics;

        // Throw detection only while Spider is held
        let mut throw_check = None;
        if hand.gestures.spider_active {
            if let Some(wrist) = frame.world_position(HandJoint::Wrist) {
                hand.detector.add_sample(wrist, now);
            }
            let result = hand.detector.detect_throw(now);
            if result.thrown {
                let origin = hand
                    .detector
                    .latest()
                    .map(|s| s.position)
                    .unwrap_or_default();
                let projectile_id = self.projectiles.launch(side, origin, result.velocity, now);
                info!(side = %side, speed = result.speed, projectile_id, "throw");
                events.push(CueEvent::Thrown {
                    side,
                    velocity: result.velocity,
                    projectile_id,
                });
            }
            throw_check = Some(result);
        } else if !hand.detector.is_empty() {
            debug!(side = %side, "spider released, motion history cleared");
            hand.detector.reset();
        }

        let mut report = hand.report();
        report.throw_check = throw_check;
        report
    }

    // =========================================================================
    // PUBLISHED STATE
    // =========================================================================

    /// Finger metrics from the last tick, thumb first (empty when untracked)
    pub fn finger_metrics(&self, side: HandSide) -> &[FingerMetric] {
        &self.hands[side.index()].fingers
    }

    pub fn gesture_state(&self, side: HandSide) -> GestureState {
        self.hands[side.index()].gestures
    }

    pub fn gestures(&self) -> GestureSummary {
        GestureSummary::new(
            self.hands[HandSide::Left.index()].gestures.current(),
            self.hands[HandSide::Right.index()].gestures.current(),
        )
    }

    pub fn any_spider_active(&self) -> bool {
        self.gestures().any_spider_active
    }

    pub fn any_peace_active(&self) -> bool {
        self.gestures().any_peace_active
    }

    /// Live projectiles as of the last tick
    pub fn active_projectiles(&self) -> Vec<ProjectileView> {
        self.projectiles.views(self.last_tick.unwrap_or(0.0))
    }

    /// Latest report for one hand (no throw check attached)
    pub fn hand_report(&self, side: HandSide) -> HandReport {
        self.hands[side.index()].report()
    }

    pub fn hand_state(&self, side: HandSide) -> &HandState {
        &self.hands[side.index()]
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::poses::PoseBuilder;
    use crate::types::{GestureKind, Vec3};

    fn spider_at(t: f64, x: f32) -> HandsFrame {
        HandsFrame::new(t).with_hand(HandSide::Right, PoseBuilder::spider().at(Vec3::new(x, 1.0, 0.0)).build())
    }

    #[test]
    fn test_monotonic_clock_starts_near_zero() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0 && a < 1.0);
        assert!(b >= a);
    }

    #[test]
    fn test_activation_fires_once() {
        let mut orch = FrameOrchestrator::default();
        let first = orch.tick_at(&spider_at(0.0, 0.0), 0.0);
        assert_eq!(
            first.events,
            vec![CueEvent::GestureActivated { side: HandSide::Right, gesture: GestureKind::Spider }]
        );
        for i in 1..10 {
            let t = i as f64 * 0.011;
            let report = orch.tick_at(&spider_at(t, 0.0), t);
            assert!(report.events.is_empty());
            assert!(report.right.gestures.spider_active);
        }
    }

    #[test]
    fn test_missing_hand_is_untracked() {
        let mut orch = FrameOrchestrator::default();
        orch.tick_at(&spider_at(0.0, 0.0), 0.0);
        let report = orch.tick_at(&HandsFrame::new(0.011), 0.011);
        assert!(!report.right.tracked);
        assert!(report.right.fingers.is_empty());
        assert!(!report.right.gestures.any());
        assert!(!orch.any_spider_active());
        assert!(orch.hand_state(HandSide::Right).detector.is_empty());
    }

    #[test]
    fn test_flick_launches_projectile() {
        let mut orch = FrameOrchestrator::default();
        let mut sink: Vec<CueEvent> = Vec::new();
        // Hold still, then move 3 m/s along X
        for i in 0..20 {
            let t = i as f64 * 0.01;
            let x = if i < 10 { 0.0 } else { (i - 10) as f32 * 0.03 };
            orch.tick_with_sink(&spider_at(t, x), t, &mut sink);
        }
        let throws: Vec<&CueEvent> = sink.iter().filter(|e| matches!(e, CueEvent::Thrown { .. })).collect();
        assert_eq!(throws.len(), 1);
        assert_eq!(orch.active_projectiles().len(), 1);
    }

    #[test]
    fn test_release_clears_motion_history() {
        let mut orch = FrameOrchestrator::default();
        for i in 0..6 {
            let t = i as f64 * 0.01;
            orch.tick_at(&spider_at(t, 0.0), t);
        }
        assert_eq!(orch.hand_state(HandSide::Right).detector.len(), 6);

        let open = HandsFrame::new(0.06).with_hand(HandSide::Right, PoseBuilder::open_hand().build());
        let report = orch.tick_at(&open, 0.06);
        assert!(report.right.throw_check.is_none());
        assert!(orch.hand_state(HandSide::Right).detector.is_empty());
    }

    #[test]
    fn test_show_joint_visuals_is_passthrough() {
        let config = GestureConfig {
            show_joint_visuals: true,
            ..Default::default()
        };
        let mut with = FrameOrchestrator::new(config);
        let mut without = FrameOrchestrator::default();
        let a = with.tick_at(&spider_at(0.0, 0.0), 0.0);
        let b = without.tick_at(&spider_at(0.0, 0.0), 0.0);
        assert!(a.show_joint_visuals);
        assert!(!b.show_joint_visuals);
        assert_eq!(a.right, b.right);
        assert_eq!(a.events, b.events);
    }
}
