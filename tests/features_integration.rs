//! Integration tests for feature extraction and gesture classification
//!
//! Tests curl ratios, dead zones, and the Spider / Peace gesture rules

use pretty_assertions::assert_eq;
use webshooter::core::classifier::{classify_finger, classify_thumb, finger_metrics};
use webshooter::core::features::{curl_ratio, pinch_distance, spread, thumb_curl_ratio};
use webshooter::core::{Digit, GestureClassifier, PoseBuilder};
use webshooter::types::{Finger, FingerPosture, GestureConfig, GestureFlags, HandJoint, JointFrame, Vec3};

fn classify(builder: PoseBuilder) -> GestureFlags {
    GestureClassifier::default().classify(&builder.build()).flags
}

// =============================================================================
// FEATURES
// =============================================================================

#[test]
fn test_curl_ratio_from_distances() {
    let mut frame = JointFrame::default();
    frame.set(HandJoint::Wrist, Vec3::ZERO);
    frame.set(HandJoint::IndexFingerKnuckle, Vec3::new(0.0, 0.1, 0.0));
    frame.set(HandJoint::IndexFingerTip, Vec3::new(0.0, 0.2, 0.0));

    let r = curl_ratio(&frame, HandJoint::IndexFingerTip, HandJoint::IndexFingerKnuckle, HandJoint::Wrist);
    assert!((r - 2.0).abs() < 1e-6);
}

#[test]
fn test_degenerate_reference_is_neutral() {
    let mut frame = JointFrame::default();
    frame.set(HandJoint::Wrist, Vec3::ZERO);
    frame.set(HandJoint::IndexFingerKnuckle, Vec3::new(0.0, 0.0001, 0.0));
    frame.set(HandJoint::IndexFingerTip, Vec3::new(0.0, 0.2, 0.0));

    let r = curl_ratio(&frame, HandJoint::IndexFingerTip, HandJoint::IndexFingerKnuckle, HandJoint::Wrist);
    assert_eq!(r, 1.0);
    assert_eq!(classify_finger(r, &GestureConfig::default()), FingerPosture::Curled);
}

#[test]
fn test_missing_joints_never_fail() {
    let frame = JointFrame::default();
    assert_eq!(thumb_curl_ratio(&frame), 1.0);
    assert_eq!(spread(&frame), 0.0);
    assert!(pinch_distance(&frame, HandJoint::IndexFingerTip).is_infinite());
}

// =============================================================================
// DEAD ZONES
// =============================================================================

#[test]
fn test_ratio_on_extend_threshold_is_neutral() {
    let config = GestureConfig::default();
    let posture = classify_finger(1.15, &config);
    assert_eq!(posture, FingerPosture::Neutral);
}

#[test]
fn test_dead_zones_from_config() {
    let config = GestureConfig {
        extend_threshold: 1.5,
        curl_threshold: 1.2,
        ..Default::default()
    };
    assert_eq!(classify_finger(1.3, &config), FingerPosture::Neutral);
    assert_eq!(classify_finger(1.6, &config), FingerPosture::Extended);
    assert_eq!(classify_finger(1.1, &config), FingerPosture::Curled);
    assert_eq!(classify_thumb(0.8, &config), FingerPosture::Neutral);
}

#[test]
fn test_metrics_never_extended_and_curled() {
    let config = GestureConfig::default();
    let poses = [
        PoseBuilder::open_hand(),
        PoseBuilder::fist(),
        PoseBuilder::spider(),
        PoseBuilder::peace(),
        PoseBuilder::fist().digit(Finger::Index, Digit::Neutral),
    ];
    for pose in poses {
        for m in finger_metrics(&pose.build(), &config) {
            assert!(!(m.is_extended && m.is_curled), "{:?}", m);
        }
    }
}

// =============================================================================
// GESTURES
// =============================================================================

#[test]
fn test_spider_pose() {
    let flags = classify(PoseBuilder::spider());
    assert!(flags.spider_active);
    assert!(!flags.peace_active);
}

#[test]
fn test_spider_rejected_when_middle_extended() {
    let flags = classify(PoseBuilder::spider().digit(Finger::Middle, Digit::Extended));
    assert!(!flags.spider_active);
}

#[test]
fn test_spider_rejected_when_thumb_out() {
    let flags = classify(PoseBuilder::spider().digit(Finger::Thumb, Digit::Extended));
    assert!(!flags.spider_active);
}

#[test]
fn test_peace_spread_guard() {
    let frame = PoseBuilder::peace().index_middle_gap(0.02).build();
    let result = GestureClassifier::default().classify(&frame);

    // Finger states match, spread does not
    assert!(result.metrics[Finger::Index.index()].is_extended);
    assert!(result.metrics[Finger::Middle.index()].is_extended);
    assert!(result.metrics[Finger::Ring.index()].is_curled);
    assert!(result.metrics[Finger::Little.index()].is_curled);
    assert!(result.metrics[Finger::Thumb.index()].is_curled);
    assert!(!result.flags.peace_active);
}

#[test]
fn test_peace_pose() {
    let flags = classify(PoseBuilder::peace());
    assert!(flags.peace_active);
    assert!(!flags.spider_active);
}

#[test]
fn test_open_hand_and_fist_are_not_gestures() {
    assert_eq!(classify(PoseBuilder::open_hand()), GestureFlags::NONE);
    assert_eq!(classify(PoseBuilder::fist()), GestureFlags::NONE);
}

#[test]
fn test_world_placement_does_not_change_classification() {
    let here = classify(PoseBuilder::spider());
    let there = classify(PoseBuilder::spider().at(Vec3::new(3.0, -1.0, 2.0)));
    assert_eq!(here, there);
}

#[test]
fn test_pinch_detection_per_finger() {
    let config = GestureConfig::default();
    for finger in Finger::PINCHABLE {
        let metrics = finger_metrics(&PoseBuilder::open_hand().pinching(finger).build(), &config);
        let pinching: Vec<Finger> = metrics.iter().filter(|m| m.is_pinching).map(|m| m.finger).collect();
        assert_eq!(pinching, vec![finger]);
    }
}
