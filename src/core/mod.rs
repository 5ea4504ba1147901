//! Core modules for Webshooter

pub mod features;
pub mod classifier;
pub mod throw_detector;
pub mod projectile;
pub mod orchestrator;
pub mod poses;
pub mod recording;
pub mod api;

pub use classifier::{Classification, GestureClassifier};
pub use throw_detector::ThrowDetector;
pub use projectile::ProjectileSimulator;
pub use orchestrator::{Clock, CueSink, FrameOrchestrator, HandState, MonotonicClock, SkeletonSource};
pub use poses::{demo_session, Digit, PoseBuilder};
pub use recording::{load_recording, parse_recording, save_recording};
pub use api::{create_router, router_with_state, run_server, AppState};
