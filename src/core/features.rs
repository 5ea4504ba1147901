//! Geometric feature extraction
//!
//! Pure functions from a `JointFrame` to scalar finger metrics.
//! Degenerate or missing input resolves to neutral values, never to errors.

use crate::types::{distance, HandJoint, JointFrame};
use crate::{MIN_REFERENCE_DISTANCE, NEUTRAL_RATIO};

/// Joint used as the palm center (thumb reference)
pub const PALM_CENTER: HandJoint = HandJoint::MiddleFingerKnuckle;

/// `|a - c| / |b - c|`, neutral when `|b - c|` is below `min_reference`.
fn normalized_ratio(frame: &JointFrame, a: HandJoint, b: HandJoint, c: HandJoint, min_reference: f32) -> f32 {
    let (Some(a), Some(b), Some(c)) = (frame.position(a), frame.position(b), frame.position(c)) else {
        return NEUTRAL_RATIO;
    };
    let reference = distance(b, c);
    if !reference.is_finite() || reference < min_reference {
        return NEUTRAL_RATIO;
    }
    let ratio = distance(a, c) / reference;
    if ratio.is_finite() {
        ratio
    } else {
        NEUTRAL_RATIO
    }
}

/// `dist(tip, wrist) / dist(knuckle, wrist)`
///
/// Well above 1 when the finger points away from the wrist, below 1 when the
/// tip folds back toward the palm.
pub fn curl_ratio(frame: &JointFrame, tip: HandJoint, knuckle: HandJoint, wrist: HandJoint) -> f32 {
    curl_ratio_with(frame, tip, knuckle, wrist, MIN_REFERENCE_DISTANCE)
}

/// [`curl_ratio`] with an explicit degenerate-distance guard
pub fn curl_ratio_with(
    frame: &JointFrame,
    tip: HandJoint,
    knuckle: HandJoint,
    wrist: HandJoint,
    min_reference: f32,
) -> f32 {
    normalized_ratio(frame, tip, knuckle, wrist, min_reference)
}

/// `dist(thumbTip, palmCenter) / dist(wrist, palmCenter)`
///
/// The thumb rests far from the wrist even when tucked, so it is measured
/// against the palm center instead.
pub fn thumb_curl_ratio(frame: &JointFrame) -> f32 {
    thumb_curl_ratio_with(frame, MIN_REFERENCE_DISTANCE)
}

pub fn thumb_curl_ratio_with(frame: &JointFrame, min_reference: f32) -> f32 {
    normalized_ratio(frame, HandJoint::ThumbTip, HandJoint::Wrist, PALM_CENTER, min_reference)
}

/// Thumb tip to `finger_tip` distance; infinite if either joint is missing
pub fn pinch_distance(frame: &JointFrame, finger_tip: HandJoint) -> f32 {
    match (frame.position(HandJoint::ThumbTip), frame.position(finger_tip)) {
        (Some(thumb), Some(tip)) => distance(thumb, tip),
        _ => f32::INFINITY,
    }
}

/// Pinch test against an explicit threshold (metres)
pub fn is_pinching(frame: &JointFrame, finger_tip: HandJoint, threshold: f32) -> bool {
    pinch_distance(frame, finger_tip) < threshold
}

/// Index-middle fingertip spread; zero if either joint is missing
pub fn spread(frame: &JointFrame) -> f32 {
    match (
        frame.position(HandJoint::IndexFingerTip),
        frame.position(HandJoint::MiddleFingerTip),
    ) {
        (Some(index), Some(middle)) => distance(index, middle),
        _ => 0.0,
    }
}
