//! One-shot events surfaced to the audio-cue collaborator

use serde::{Deserialize, Serialize};

use super::finger::Finger;
use super::gesture::GestureKind;
use super::hand::HandSide;
use super::vector::Vec3;

/// Edge-triggered events. Each fires once per false→true transition,
/// never while held and never on release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CueEvent {
    /// A named gesture just became active
    GestureActivated { side: HandSide, gesture: GestureKind },
    /// A finger just started pinching against the thumb
    PinchStarted { side: HandSide, finger: Finger },
    /// A flick was detected and a projectile launched
    Thrown {
        side: HandSide,
        velocity: Vec3,
        projectile_id: u64,
    },
}

impl CueEvent {
    pub fn side(&self) -> HandSide {
        match self {
            CueEvent::GestureActivated { side, .. }
            | CueEvent::PinchStarted { side, .. }
            | CueEvent::Thrown { side, .. } => *side,
        }
    }

    /// Short label for logs and terminal output
    pub fn label(&self) -> String {
        match self {
            CueEvent::GestureActivated { side, gesture } => format!("{} {} ON", side, gesture),
            CueEvent::PinchStarted { side, finger } => {
                format!("{} PINCH {}", side, finger.display_name().to_uppercase())
            }
            CueEvent::Thrown { side, velocity, projectile_id } => format!(
                "{} THROW #{} ({:.2} m/s)",
                side,
                projectile_id,
                velocity.length()
            ),
        }
    }
}
