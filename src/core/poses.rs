//! Synthetic hand poses and a scripted demo session
//!
//! Anchor space: wrist at the origin, fingers along +Y, palm facing +Z.
//! Used by the `--demo` CLI mode and by tests.

use crate::core::features::PALM_CENTER;
use crate::types::{Finger, HandJoint, HandSide, HandsFrame, JointFrame, Mat4, Vec3};

/// Requested posture for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    Extended,
    Neutral,
    Curled,
}

/// Knuckle positions for index, middle, ring, little
const KNUCKLES: [(Finger, [f32; 3]); 4] = [
    (Finger::Index, [0.02, 0.09, 0.0]),
    (Finger::Middle, [0.0, 0.095, 0.0]),
    (Finger::Ring, [-0.02, 0.09, 0.0]),
    (Finger::Little, [-0.04, 0.08, 0.0]),
];

const THUMB_KNUCKLE: [f32; 3] = [0.03, 0.03, 0.0];

/// Tip distance / knuckle distance per posture
const FINGER_EXTENDED_SCALE: f32 = 1.8;
const FINGER_NEUTRAL_SCALE: f32 = 1.125;
const FINGER_CURLED_SCALE: f32 = 0.75;
/// Curled tips fold toward the palm
const CURL_DEPTH: f32 = 0.03;

/// Thumb tip distance from the palm center, as a multiple of wrist-palm distance
const THUMB_EXTENDED_RATIO: f32 = 1.1;
const THUMB_NEUTRAL_RATIO: f32 = 0.85;
const THUMB_CURLED_RATIO: f32 = 0.5;

/// Thumb-to-target offset when pinching
const PINCH_OFFSET: [f32; 3] = [0.0, 0.0, 0.01];

/// Builds a `JointFrame` with requested finger postures
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    digits: [Digit; 5],
    index_middle_gap: Option<f32>,
    pinch: Option<Finger>,
    wrist_world: Vec3,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::open_hand()
    }
}

impl PoseBuilder {
    /// Every digit extended
    pub fn open_hand() -> Self {
        Self {
            digits: [Digit::Extended; 5],
            index_middle_gap: None,
            pinch: None,
            wrist_world: Vec3::ZERO,
        }
    }

    /// Every digit curled
    pub fn fist() -> Self {
        Self {
            digits: [Digit::Curled; 5],
            ..Self::open_hand()
        }
    }

    /// Thumb, middle, ring curled; index and little extended
    pub fn spider() -> Self {
        Self {
            digits: [Digit::Curled, Digit::Extended, Digit::Curled, Digit::Curled, Digit::Extended],
            ..Self::open_hand()
        }
    }

    /// V-sign with a 6cm index-middle spread
    pub fn peace() -> Self {
        Self {
            digits: [Digit::Curled, Digit::Extended, Digit::Extended, Digit::Curled, Digit::Curled],
            index_middle_gap: Some(0.06),
            ..Self::open_hand()
        }
    }

    pub fn digit(mut self, finger: Finger, digit: Digit) -> Self {
        self.digits[finger.index()] = digit;
        self
    }

    /// Place the index tip this far (metres) from the middle tip.
    /// Only applies when both are extended.
    pub fn index_middle_gap(mut self, gap: f32) -> Self {
        self.index_middle_gap = Some(gap);
        self
    }

    /// Bring the thumb tip onto `finger`'s tip
    pub fn pinching(mut self, finger: Finger) -> Self {
        self.pinch = Some(finger);
        self
    }

    /// World position of the wrist (anchor translation)
    pub fn at(mut self, wrist_world: Vec3) -> Self {
        self.wrist_world = wrist_world;
        self
    }

    pub fn build(&self) -> JointFrame {
        let mut frame = JointFrame::default().with_transform(Mat4::from_translation(self.wrist_world));
        frame.set(HandJoint::Wrist, Vec3::ZERO);
        frame.set(HandJoint::ForearmWrist, Vec3::new(0.0, -0.02, 0.0));
        frame.set(HandJoint::ForearmArm, Vec3::new(0.0, -0.2, 0.0));

        for (finger, knuckle) in KNUCKLES {
            let knuckle = Vec3::from_array(knuckle);
            let tip = match self.digits[finger.index()] {
                Digit::Extended => knuckle * FINGER_EXTENDED_SCALE,
                Digit::Neutral => knuckle * FINGER_NEUTRAL_SCALE,
                Digit::Curled => knuckle * FINGER_CURLED_SCALE + Vec3::new(0.0, 0.0, CURL_DEPTH),
            };
            frame.set(finger.knuckle(), knuckle);
            frame.set(finger.tip(), tip);
        }

        if let Some(gap) = self.index_middle_gap {
            let both_extended = self.digits[Finger::Index.index()] == Digit::Extended
                && self.digits[Finger::Middle.index()] == Digit::Extended;
            if both_extended {
                if let Some(middle_tip) = frame.position(HandJoint::MiddleFingerTip) {
                    frame.set(HandJoint::IndexFingerTip, middle_tip + Vec3::new(gap, 0.0, 0.0));
                }
            }
        }

        let palm = frame.position(PALM_CENTER).unwrap_or(Vec3::ZERO);
        let reach = palm.length();
        let thumb_ratio = match self.digits[Finger::Thumb.index()] {
            Digit::Extended => THUMB_EXTENDED_RATIO,
            Digit::Neutral => THUMB_NEUTRAL_RATIO,
            Digit::Curled => THUMB_CURLED_RATIO,
        };
        let thumb_dir = Vec3::new(1.0, -0.5, 0.0).normalize();
        frame.set(HandJoint::ThumbKnuckle, Vec3::from_array(THUMB_KNUCKLE));
        frame.set(HandJoint::ThumbTip, palm + thumb_dir * (reach * thumb_ratio));

        if let Some(target) = self.pinch.filter(|f| *f != Finger::Thumb) {
            if let Some(tip) = frame.position(target.tip()) {
                frame.set(HandJoint::ThumbTip, tip + Vec3::from_array(PINCH_OFFSET));
            }
        }

        frame
    }
}

/// Demo tick rate (Hz)
pub const DEMO_RATE_HZ: f64 = 90.0;

/// Scripted session exercising every event kind:
/// - 0.0–0.5s both hands open
/// - right: Spider from 0.5s, flick to +X at 1.5s, tracking lost 2.5–3.0s, Spider again until 3.5s
/// - left: pinch at 0.3s, Peace 1.0–2.0s
/// - runs to 5.0s so the projectile expires
pub fn demo_session() -> Vec<HandsFrame> {
    let dt = 1.0 / DEMO_RATE_HZ;
    let ticks = (5.0 * DEMO_RATE_HZ) as usize;
    let left_home = Vec3::new(-0.25, 1.2, -0.4);
    let right_home = Vec3::new(0.25, 1.2, -0.4);
    let mut right_offset = Vec3::ZERO;

    (0..ticks)
        .map(|i| {
            let t = i as f64 * dt;
            let mut frame = HandsFrame::new(t);

            let left_pose = if (1.0..2.0).contains(&t) {
                PoseBuilder::peace()
            } else if (0.3..0.6).contains(&t) {
                PoseBuilder::open_hand().pinching(Finger::Index)
            } else {
                PoseBuilder::open_hand()
            };
            frame = frame.with_hand(HandSide::Left, left_pose.at(left_home).build());

            // Flick: 3 m/s along +X for 0.15s
            if (1.5..1.65).contains(&t) {
                right_offset.x += (3.0 * dt) as f32;
            }
            let right_tracked = !(2.5..3.0).contains(&t);
            if right_tracked {
                let pose = if (0.5..2.5).contains(&t) || (3.0..3.5).contains(&t) {
                    PoseBuilder::spider()
                } else {
                    PoseBuilder::open_hand()
                };
                frame = frame.with_hand(HandSide::Right, pose.at(right_home + right_offset).build());
            }

            frame
        })
        .collect()
}
