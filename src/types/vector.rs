//! Vector types shared by the whole crate

pub use glam::{Mat4, Vec3};

/// Euclidean distance in metres
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}
