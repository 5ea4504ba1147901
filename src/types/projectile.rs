//! Launched projectiles

use serde::{Deserialize, Serialize};

use super::hand::HandSide;
use super::vector::Vec3;

/// A projectile owned by the simulator from launch until expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub side: HandSide,
    pub initial_position: Vec3,
    pub launch_velocity: Vec3,
    pub start_time: f64,
    pub lifetime: f64,
}

impl Projectile {
    /// Seconds since launch (negative if `now` precedes the launch)
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.elapsed(now) > self.lifetime
    }
}

/// Render-facing view of a live projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub side: HandSide,
    pub position: Vec3,
    pub scale: f32,
}
