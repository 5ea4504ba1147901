//! Finger identities and per-tick finger metrics

use serde::{Deserialize, Serialize};

use super::joint::HandJoint;

/// The five digits, thumb first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    /// Display order
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// Fingers that can pinch against the thumb
    pub const PINCHABLE: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Little];

    pub fn display_name(&self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Little => "Little",
        }
    }

    pub fn tip(&self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbTip,
            Finger::Index => HandJoint::IndexFingerTip,
            Finger::Middle => HandJoint::MiddleFingerTip,
            Finger::Ring => HandJoint::RingFingerTip,
            Finger::Little => HandJoint::LittleFingerTip,
        }
    }

    pub fn knuckle(&self) -> HandJoint {
        match self {
            Finger::Thumb => HandJoint::ThumbKnuckle,
            Finger::Index => HandJoint::IndexFingerKnuckle,
            Finger::Middle => HandJoint::MiddleFingerKnuckle,
            Finger::Ring => HandJoint::RingFingerKnuckle,
            Finger::Little => HandJoint::LittleFingerKnuckle,
        }
    }

    /// Slot in `[_; 5]` arrays
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Three-way classification of a curl ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerPosture {
    Extended,
    Neutral,
    Curled,
}

impl FingerPosture {
    pub fn symbol(&self) -> &'static str {
        match self {
            FingerPosture::Extended => "|",
            FingerPosture::Neutral => "~",
            FingerPosture::Curled => "o",
        }
    }
}

/// Metrics for one finger on one tick. Rebuilt every tick, never patched.
///
/// `is_extended` and `is_curled` are never both true; both false is the dead zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerMetric {
    pub finger: Finger,
    pub display_name: String,
    pub curl_ratio: f32,
    pub is_pinching: bool,
    pub is_extended: bool,
    pub is_curled: bool,
}

impl FingerMetric {
    pub fn posture(&self) -> FingerPosture {
        if self.is_extended {
            FingerPosture::Extended
        } else if self.is_curled {
            FingerPosture::Curled
        } else {
            FingerPosture::Neutral
        }
    }
}
