//! Closed-form projectile simulation
//!
//! position(t) = p0 + v·t + ½·g·t²
//! scale(t)    = max(0.1, 1 − 0.8·t/lifetime)
//!
//! Projectiles are removed once `t > lifetime`.

use tracing::{debug, info};

use crate::types::{GestureConfig, HandSide, Projectile, ProjectileView, Vec3};
use crate::{PROJECTILE_MIN_SCALE, PROJECTILE_SHRINK};

/// Position at `t` seconds after launch
pub fn position_at(projectile: &Projectile, gravity: Vec3, t: f64) -> Vec3 {
    let t = t as f32;
    projectile.initial_position + projectile.launch_velocity * t + gravity * (0.5 * t * t)
}

/// Visual scale at `t` seconds after launch. Computed in f64 so the
/// end-of-life value lands on 0.2 exactly.
pub fn scale_at(projectile: &Projectile, t: f64) -> f32 {
    let progress = t / projectile.lifetime;
    (1.0 - progress * PROJECTILE_SHRINK).max(PROJECTILE_MIN_SCALE) as f32
}

/// Owns every live projectile
#[derive(Debug, Clone)]
pub struct ProjectileSimulator {
    projectiles: Vec<Projectile>,
    next_id: u64,
    gravity: Vec3,
    lifetime: f64,
    launch_multiplier: f32,
}

impl Default for ProjectileSimulator {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl ProjectileSimulator {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            projectiles: Vec::new(),
            next_id: 1,
            gravity: config.gravity,
            lifetime: config.projectile_lifetime,
            launch_multiplier: config.launch_multiplier,
        }
    }

    /// Launch a projectile from a detector velocity. Returns its id.
    pub fn launch(&mut self, side: HandSide, position: Vec3, detector_velocity: Vec3, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let launch_velocity = detector_velocity * self.launch_multiplier;
        info!(id, side = %side, speed = launch_velocity.length(), "projectile launched");

        self.projectiles.push(Projectile {
            id,
            side,
            initial_position: position,
            launch_velocity,
            start_time: now,
            lifetime: self.lifetime,
        });
        id
    }

    /// Drop expired projectiles and return views of the rest
    pub fn advance(&mut self, now: f64) -> Vec<ProjectileView> {
        self.projectiles.retain(|p| {
            let alive = !p.is_expired(now);
            if !alive {
                debug!(id = p.id, "projectile expired");
            }
            alive
        });
        self.views(now)
    }

    /// Views at `now` without removing anything.
    ///
    /// A tick earlier than the launch shows the projectile at its spawn state.
    pub fn views(&self, now: f64) -> Vec<ProjectileView> {
        self.projectiles
            .iter()
            .map(|p| {
                let t = p.elapsed(now).max(0.0);
                ProjectileView {
                    id: p.id,
                    side: p.side,
                    position: position_at(p, self.gravity, t),
                    scale: scale_at(p, t),
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }
}

// =============================================================================
// TESTS
// =============================================================================
