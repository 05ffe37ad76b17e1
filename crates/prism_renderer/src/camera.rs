//! Camera configuration and ray generation.
//!
//! [`CameraConfig`] is the persistent, user-facing description of the shot.
//! [`Camera`] is derived from it once per render and only read afterwards.

use crate::sampling::{gen_f32, random_in_unit_disk};
use prism_math::{Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// User-facing camera settings.
///
/// Deserializes from partial documents; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    // Image settings
    /// Ratio of image width over height
    pub aspect_ratio: f32,
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Random samples taken per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per camera ray
    pub max_depth: u32,

    // Camera positioning
    /// Vertical field of view in degrees
    pub vfov: f32,
    pub look_from: Vec3,
    pub look_at: Vec3,
    /// Camera-relative "up" direction
    pub vup: Vec3,

    // Lens settings
    /// Variation angle of rays through each pixel, in degrees (0 = pinhole)
    pub defocus_angle: f32,
    /// Distance from `look_from` to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

impl CameraConfig {
    /// Set image width and aspect ratio; the height follows from both.
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f32) -> Self {
        self.image_width = image_width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Image height implied by the width and aspect ratio, at least 1.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }
}

/// Camera with all projection geometry resolved.
#[derive(Debug, Clone)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    samples_per_pixel: u32,
    max_depth: u32,
    defocus_angle: f32,

    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    samples_scale: f32,
}

impl Camera {
    /// Derive the camera frame, viewport and defocus disk from `config`.
    pub fn new(config: &CameraConfig) -> Self {
        let image_width = config.image_width;
        let image_height = config.image_height();
        // A zero sample count would make the average undefined
        let samples_per_pixel = config.samples_per_pixel.max(1);
        let center = config.look_from;

        // Calculate viewport dimensions
        let theta = config.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width = viewport_height * (image_width as f32 / image_height as f32);

        // Calculate camera basis vectors
        let w = (config.look_from - config.look_at).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        // Vectors across the horizontal and down the vertical viewport edges
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        let pixel_delta_u = viewport_u / image_width as f32;
        let pixel_delta_v = viewport_v / image_height as f32;

        let viewport_upper_left =
            center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();

        Self {
            image_width,
            image_height,
            samples_per_pixel,
            max_depth: config.max_depth,
            defocus_angle: config.defocus_angle,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            samples_scale: 1.0 / samples_per_pixel as f32,
        }
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The target is jittered within the pixel square; with a non-zero
    /// defocus angle the origin is jittered across the defocus disk.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + offset.x) * self.pixel_delta_u
            + ((j as f32) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }

    /// Camera position in world space.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Orthonormal camera frame: right, up, and backwards.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

impl From<&CameraConfig> for Camera {
    fn from(config: &CameraConfig) -> Self {
        Self::new(config)
    }
}

/// Sample a random point in the unit square [-0.5, 0.5] x [-0.5, 0.5].
fn sample_square(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f32(rng) - 0.5, gen_f32(rng) - 0.5, 0.0)
}
