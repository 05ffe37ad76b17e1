//! Math types for the prism path tracer.
//!
//! Vectors come straight from glam; this crate adds the ray, interval and
//! slab types the renderer is built on.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;

/// Component magnitude below which a vector counts as zero.
const NEAR_ZERO_EPSILON: f32 = 1e-6;

/// Returns true if every component of `v` is close to zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}
