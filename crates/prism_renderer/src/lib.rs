//! Prism renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres and axis-aligned boxes with
//! diffuse, metal and glass materials, writing plain PPM images.

mod sampling;
mod hittable;
mod material;
mod sphere;
mod cuboid;
mod camera;
mod renderer;
mod output;

pub use sampling::{
    gen_f32, gen_range_f32, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
    random_vec3,
};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use sphere::Sphere;
pub use cuboid::Cuboid;
pub use camera::{Camera, CameraConfig};
pub use renderer::{
    color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, sky_gradient, ImageBuffer,
};
pub use output::{render_to_file, render_to_stream, write_ppm, RenderError, RenderResult};

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Aabb, Interval, Ray, Vec3};
