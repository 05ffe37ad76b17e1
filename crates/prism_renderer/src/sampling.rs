//! Random sampling helpers.
//!
//! Every function draws from the generator it is handed, so a render is
//! reproducible for a given seed and tests can inject fixed sequences.

use prism_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Generate a random f32 in [0.0, 1.0).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// Generate a random f32 in [min, max).
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Generate a Vec3 with each component uniform in [min, max).
pub fn random_vec3(rng: &mut dyn RngCore, min: f32, max: f32) -> Vec3 {
    Vec3::new(
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
        gen_range_f32(rng, min, max),
    )
}

/// Generate a random unit vector uniformly distributed on the unit sphere.
///
/// Uses the cylindrical projection rather than rejection, so it always
/// terminates after two draws.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let theta = 2.0 * PI * gen_f32(rng);
    let cos_phi = 2.0 * gen_f32(rng) - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

    Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Generate a random point strictly inside the unit sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random point strictly inside the unit disk on the z = 0 plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
