//! Core types for Webshooter

mod vector;
mod joint;
mod hand;
mod finger;
mod gesture;
mod events;
mod throw;
mod projectile;
mod frame;
mod output;
mod config;

pub use vector::{Vec3, Mat4, distance};
pub use joint::{HandJoint, JointFrame, JOINT_COUNT};
pub use hand::HandSide;
pub use finger::{Finger, FingerMetric, FingerPosture};
pub use gesture::{GestureKind, GestureFlags, GestureState};
pub use events::CueEvent;
pub use throw::{MotionSample, ThrowResult, ThrowReason};
pub use projectile::{Projectile, ProjectileView};
pub use frame::HandsFrame;
pub use output::{HandReport, TickReport, GestureSummary};
pub use config::GestureConfig;
