//! Gesture classifier: curl ratios → finger postures → named gestures
//!
//! Dead zones:
//! - fingers: extended > 1.15, curled < 1.10, neutral in [1.10, 1.15]
//! - thumb:   extended > 0.95, curled < 0.75, neutral in [0.75, 0.95]
//!
//! Gestures (all in the same tick):
//! - SPIDER: thumb curled, index extended, middle curled, ring curled, little extended
//! - PEACE:  thumb curled, index + middle extended, ring + little curled, spread > 4cm

use crate::core::features::{curl_ratio_with, is_pinching, spread, thumb_curl_ratio_with};
use crate::types::{
    CueEvent, Finger, FingerMetric, FingerPosture, GestureConfig, GestureFlags, GestureKind,
    HandJoint, HandSide, JointFrame,
};

/// Classify a non-thumb curl ratio. Boundaries are exclusive.
pub fn classify_finger(ratio: f32, config: &GestureConfig) -> FingerPosture {
    classify_ratio(ratio, config.extend_threshold, config.curl_threshold)
}

/// Classify a thumb curl ratio. Boundaries are exclusive.
pub fn classify_thumb(ratio: f32, config: &GestureConfig) -> FingerPosture {
    classify_ratio(ratio, config.thumb_extend_threshold, config.thumb_curl_threshold)
}

fn classify_ratio(ratio: f32, extend_above: f32, curl_below: f32) -> FingerPosture {
    if ratio > extend_above {
        FingerPosture::Extended
    } else if ratio < curl_below {
        FingerPosture::Curled
    } else {
        // Dead zone, and NaN
        FingerPosture::Neutral
    }
}

/// Build the five finger metrics (thumb first) for one frame
pub fn finger_metrics(frame: &JointFrame, config: &GestureConfig) -> Vec<FingerMetric> {
    Finger::ALL
        .iter()
        .map(|&finger| {
            let (ratio, posture) = match finger {
                Finger::Thumb => {
                    let r = thumb_curl_ratio_with(frame, config.min_reference_distance);
                    (r, classify_thumb(r, config))
                }
                _ => {
                    let r = curl_ratio_with(
                        frame,
                        finger.tip(),
                        finger.knuckle(),
                        HandJoint::Wrist,
                        config.min_reference_distance,
                    );
                    (r, classify_finger(r, config))
                }
            };
            let is_pinching = finger != Finger::Thumb && is_pinching(frame, finger.tip(), config.pinch_distance);

            FingerMetric {
                finger,
                display_name: finger.display_name().to_string(),
                curl_ratio: ratio,
                is_pinching,
                is_extended: posture == FingerPosture::Extended,
                is_curled: posture == FingerPosture::Curled,
            }
        })
        .collect()
}

fn posture_of(metrics: &[FingerMetric], finger: Finger) -> FingerPosture {
    metrics
        .iter()
        .find(|m| m.finger == finger)
        .map(|m| m.posture())
        .unwrap_or(FingerPosture::Neutral)
}

/// Evaluate the named gestures from finger metrics and the raw frame
pub fn evaluate_gestures(metrics: &[FingerMetric], frame: &JointFrame, config: &GestureConfig) -> GestureFlags {
    use FingerPosture::{Curled, Extended};

    let thumb = posture_of(metrics, Finger::Thumb);
    let index = posture_of(metrics, Finger::Index);
    let middle = posture_of(metrics, Finger::Middle);
    let ring = posture_of(metrics, Finger::Ring);
    let little = posture_of(metrics, Finger::Little);

    let spider_active =
        thumb == Curled && index == Extended && middle == Curled && ring == Curled && little == Extended;

    // Two adjacent extended fingers are not a V; require the fan
    let peace_active = thumb == Curled
        && index == Extended
        && middle == Extended
        && ring == Curled
        && little == Curled
        && spread(frame) > config.spread_threshold;

    GestureFlags {
        spider_active,
        peace_active,
    }
}

/// Activation events for every gesture that went false → true
pub fn detect_activations(side: HandSide, prev: GestureFlags, curr: GestureFlags) -> Vec<CueEvent> {
    GestureKind::ALL
        .iter()
        .filter(|&&gesture| curr.is_active(gesture) && !prev.is_active(gesture))
        .map(|&gesture| CueEvent::GestureActivated { side, gesture })
        .collect()
}

/// Pinch events for every finger whose pinch went false → true.
///
/// `prev` is indexed by [`Finger::index`].
pub fn detect_pinch_edges(side: HandSide, prev: &[bool; 5], metrics: &[FingerMetric]) -> Vec<CueEvent> {
    metrics
        .iter()
        .filter(|m| m.is_pinching && !prev[m.finger.index()])
        .map(|m| CueEvent::PinchStarted { side, finger: m.finger })
        .collect()
}

/// Pinch flags in `[_; 5]` form, for the next tick's edge check
pub fn pinch_flags(metrics: &[FingerMetric]) -> [bool; 5] {
    let mut flags = [false; 5];
    for m in metrics {
        flags[m.finger.index()] = m.is_pinching;
    }
    flags
}

/// Metrics and gesture flags for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub metrics: Vec<FingerMetric>,
    pub flags: GestureFlags,
}

/// Stateless classifier bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: GestureConfig,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classify one skeleton frame
    pub fn classify(&self, frame: &JointFrame) -> Classification {
        let metrics = finger_metrics(frame, &self.config);
        let flags = evaluate_gestures(&metrics, frame, &self.config);
        Classification { metrics, flags }
    }
}

// =============================================================================
// TESTS
// =============================================================================
