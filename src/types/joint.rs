//! Hand skeleton landmarks and per-tick joint frames

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::vector::{Mat4, Vec3};

/// Named skeletal landmarks reported by the tracking collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandJoint {
    Wrist,
    ThumbKnuckle,
    ThumbIntermediateBase,
    ThumbIntermediateTip,
    ThumbTip,
    IndexFingerMetacarpal,
    IndexFingerKnuckle,
    IndexFingerIntermediateBase,
    IndexFingerIntermediateTip,
    IndexFingerTip,
    MiddleFingerMetacarpal,
    MiddleFingerKnuckle,
    MiddleFingerIntermediateBase,
    MiddleFingerIntermediateTip,
    MiddleFingerTip,
    RingFingerMetacarpal,
    RingFingerKnuckle,
    RingFingerIntermediateBase,
    RingFingerIntermediateTip,
    RingFingerTip,
    LittleFingerMetacarpal,
    LittleFingerKnuckle,
    LittleFingerIntermediateBase,
    LittleFingerIntermediateTip,
    LittleFingerTip,
    ForearmWrist,
    ForearmArm,
}

/// Total number of joints per hand
pub const JOINT_COUNT: usize = 27;

impl HandJoint {
    /// Every joint, in skeleton order
    pub const ALL: [HandJoint; JOINT_COUNT] = [
        Self::Wrist,
        Self::ThumbKnuckle,
        Self::ThumbIntermediateBase,
        Self::ThumbIntermediateTip,
        Self::ThumbTip,
        Self::IndexFingerMetacarpal,
        Self::IndexFingerKnuckle,
        Self::IndexFingerIntermediateBase,
        Self::IndexFingerIntermediateTip,
        Self::IndexFingerTip,
        Self::MiddleFingerMetacarpal,
        Self::MiddleFingerKnuckle,
        Self::MiddleFingerIntermediateBase,
        Self::MiddleFingerIntermediateTip,
        Self::MiddleFingerTip,
        Self::RingFingerMetacarpal,
        Self::RingFingerKnuckle,
        Self::RingFingerIntermediateBase,
        Self::RingFingerIntermediateTip,
        Self::RingFingerTip,
        Self::LittleFingerMetacarpal,
        Self::LittleFingerKnuckle,
        Self::LittleFingerIntermediateBase,
        Self::LittleFingerIntermediateTip,
        Self::LittleFingerTip,
        Self::ForearmWrist,
        Self::ForearmArm,
    ];

    /// Name used in recordings and the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbKnuckle => "thumbKnuckle",
            Self::ThumbIntermediateBase => "thumbIntermediateBase",
            Self::ThumbIntermediateTip => "thumbIntermediateTip",
            Self::ThumbTip => "thumbTip",
            Self::IndexFingerMetacarpal => "indexFingerMetacarpal",
            Self::IndexFingerKnuckle => "indexFingerKnuckle",
            Self::IndexFingerIntermediateBase => "indexFingerIntermediateBase",
            Self::IndexFingerIntermediateTip => "indexFingerIntermediateTip",
            Self::IndexFingerTip => "indexFingerTip",
            Self::MiddleFingerMetacarpal => "middleFingerMetacarpal",
            Self::MiddleFingerKnuckle => "middleFingerKnuckle",
            Self::MiddleFingerIntermediateBase => "middleFingerIntermediateBase",
            Self::MiddleFingerIntermediateTip => "middleFingerIntermediateTip",
            Self::MiddleFingerTip => "middleFingerTip",
            Self::RingFingerMetacarpal => "ringFingerMetacarpal",
            Self::RingFingerKnuckle => "ringFingerKnuckle",
            Self::RingFingerIntermediateBase => "ringFingerIntermediateBase",
            Self::RingFingerIntermediateTip => "ringFingerIntermediateTip",
            Self::RingFingerTip => "ringFingerTip",
            Self::LittleFingerMetacarpal => "littleFingerMetacarpal",
            Self::LittleFingerKnuckle => "littleFingerKnuckle",
            Self::LittleFingerIntermediateBase => "littleFingerIntermediateBase",
            Self::LittleFingerIntermediateTip => "littleFingerIntermediateTip",
            Self::LittleFingerTip => "littleFingerTip",
            Self::ForearmWrist => "forearmWrist",
            Self::ForearmArm => "forearmArm",
        }
    }
}

impl std::fmt::Display for HandJoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// One tracking snapshot of a single hand.
///
/// Joint positions are in the hand-anchor space; `origin_from_anchor` maps
/// them to world space. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointFrame {
    pub joints: HashMap<HandJoint, Vec3>,
    #[serde(default = "identity")]
    pub origin_from_anchor: Mat4,
}

impl Default for JointFrame {
    fn default() -> Self {
        Self {
            joints: HashMap::new(),
            origin_from_anchor: Mat4::IDENTITY,
        }
    }
}

impl JointFrame {
    /// Frame with identity anchor transform
    pub fn new(joints: HashMap<HandJoint, Vec3>) -> Self {
        Self {
            joints,
            origin_from_anchor: Mat4::IDENTITY,
        }
    }

    /// Replace the anchor-to-world transform
    pub fn with_transform(mut self, origin_from_anchor: Mat4) -> Self {
        self.origin_from_anchor = origin_from_anchor;
        self
    }

    /// Set or overwrite one joint position (anchor space)
    pub fn set(&mut self, joint: HandJoint, position: Vec3) {
        self.joints.insert(joint, position);
    }

    /// Anchor-space position, if the joint was tracked
    pub fn position(&self, joint: HandJoint) -> Option<Vec3> {
        self.joints.get(&joint).copied()
    }

    /// World-space position, if the joint was tracked
    pub fn world_position(&self, joint: HandJoint) -> Option<Vec3> {
        self.position(joint)
            .map(|p| self.origin_from_anchor.transform_point3(p))
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}
