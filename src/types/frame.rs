//! Tracking input for one tick

use serde::{Deserialize, Serialize};

use super::hand::HandSide;
use super::joint::JointFrame;

/// Both hands' skeletons at one tick. `None` means tracking was lost.
///
/// This is the line format of recordings and the body of `POST /tick`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandsFrame {
    /// Monotonic time in seconds
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<JointFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<JointFrame>,
}

impl HandsFrame {
    pub fn new(time: f64) -> Self {
        Self {
            time,
            left: None,
            right: None,
        }
    }

    pub fn with_hand(mut self, side: HandSide, frame: JointFrame) -> Self {
        match side {
            HandSide::Left => self.left = Some(frame),
            HandSide::Right => self.right = Some(frame),
        }
        self
    }

    pub fn hand(&self, side: HandSide) -> Option<&JointFrame> {
        match side {
            HandSide::Left => self.left.as_ref(),
            HandSide::Right => self.right.as_ref(),
        }
    }
}
