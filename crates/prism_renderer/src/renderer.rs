//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Bounded bounce depth, traced iteratively
//! - Gamma correction
//! - Anti-aliasing via multi-sampling

use crate::{Camera, Color, HitRecord, Hittable};
use prism_math::{Interval, Ray};
use rand::RngCore;

/// Smallest ray parameter accepted for a hit, to skip self-intersection.
const SHADOW_ACNE_EPSILON: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// The path is followed bounce by bounce, multiplying the attenuation of
/// every scatter into a running throughput. A path that runs out of depth
/// or is absorbed contributes black; a path that escapes picks up the sky.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    let mut current = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..depth {
        let mut rec = HitRecord::default();

        if !world.hit(&current, Interval::new(SHADOW_ACNE_EPSILON, f32::INFINITY), &mut rec) {
            return throughput * sky_gradient(&current);
        }

        match rec.material.scatter(&current, &rec, rng) {
            Some(result) => {
                throughput *= result.attenuation;
                current = result.scattered;
            }
            None => return Color::ZERO,
        }
    }

    // Exceeded max depth, no light gathered
    Color::ZERO
}

/// Compute sky gradient background.
///
/// Blends white at the bottom into light blue at the top, by the height of
/// the unit direction.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Intensity range written out, kept below 1 so 256 * c never reaches 256.
const INTENSITY: Interval = Interval { min: 0.0, max: 0.999 };

/// Quantize one linear channel to a byte.
#[inline]
fn channel_to_byte(linear: f32) -> u8 {
    (256.0 * INTENSITY.clamp(linear_to_gamma(linear))) as u8
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        channel_to_byte(color.x),
        channel_to_byte(color.y),
        channel_to_byte(color.z),
    ]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel() {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, camera.max_depth(), world, rng);
    }

    // Average the samples
    pixel_color * camera.samples_scale()
}

/// Linear colors of a rendered frame, row-major with the top row first.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to gamma-corrected RGB bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Pixels are visited one scanline at a time from the top, left to right,
/// all drawing from the same generator.
pub fn render(camera: &Camera, world: &dyn Hittable, rng: &mut dyn RngCore) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());

    for y in 0..camera.image_height() {
        log::debug!("Scanlines remaining: {}", camera.image_height() - y);
        for x in 0..camera.image_width() {
            let color = render_pixel(camera, world, x, y, rng);
            image.set(x, y, color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CameraConfig, Cuboid, Dielectric, HittableList, Lambertian, Metal, Sphere, Vec3};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn halves() -> StepRng {
        StepRng::new(1 << 31, 0)
    }

    fn assert_close(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).length() < eps, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_sky_gradient() {
        let up = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0)));
        let down = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0)));
        let level = sky_gradient(&Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)));

        assert_close(up, Color::new(0.5, 0.7, 1.0), 1e-6);
        assert_close(down, Color::ONE, 1e-6);
        assert_close(level, Color::new(0.75, 0.85, 1.0), 1e-6);
    }

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-0.5), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        // Bright values clamp to 0.999 before scaling
        assert_eq!(color_to_rgb(Color::new(1.0, 4.0, 1e9)), [255, 255, 255]);
        // sqrt(0.25) = 0.5, 256 * 0.5 = 128
        assert_eq!(color_to_rgb(Color::splat(0.25)), [128, 128, 128]);
        assert_eq!(color_to_rgb(Color::new(-1.0, f32::NEG_INFINITY, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn test_empty_world_is_sky() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        let color = ray_color(&ray, 10, &world, &mut halves());
        assert_close(color, Color::new(0.5, 0.7, 1.0), 1e-6);
    }

    #[test]
    fn test_zero_depth_is_black() {
        let world = HittableList::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(ray_color(&ray, 0, &world, &mut halves()), Color::ZERO);
    }

    #[test]
    fn test_attenuation_multiplies_into_sky() {
        // A mirror facing the camera sends the ray straight back into the sky
        let mut world = HittableList::new();
        world.add(Box::new(Cuboid::new(
            Vec3::new(-1.0, -1.0, -3.0),
            Vec3::new(1.0, 1.0, -2.0),
            Arc::new(Metal::new(Color::new(0.5, 0.25, 1.0), 0.0)),
        )));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let color = ray_color(&ray, 5, &world, &mut halves());
        let sky = Color::new(0.75, 0.85, 1.0);
        assert_close(color, Color::new(0.5, 0.25, 1.0) * sky, 1e-5);

        // One bounce is not enough to reach the sky
        assert_eq!(ray_color(&ray, 1, &world, &mut halves()), Color::ZERO);
    }

    #[test]
    fn test_absorbed_ray_is_black() {
        // Fully fuzzed metal at grazing incidence under a generator that
        // always pushes the scatter below the surface
        let mut world = HittableList::new();
        world.add(Box::new(Cuboid::new(
            Vec3::new(-10.0, -1.0, -10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Arc::new(Metal::new(Color::ONE, 1.0)),
        )));
        let ray = Ray::new(Vec3::new(-5.0, 0.005, 0.0), Vec3::new(1.0, -0.001, 0.0));

        let color = ray_color(&ray, 10, &world, &mut StepRng::new(1 << 30, 0));
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_glass_passes_straight_through() {
        // Head-on through a glass ball; a draw of 0.5 never picks reflection
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -3.0),
            1.0,
            Arc::new(Dielectric::new(1.5)),
        )));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let color = ray_color(&ray, 10, &world, &mut halves());
        assert_close(color, Color::new(0.75, 0.85, 1.0), 1e-5);
    }

    #[test]
    fn test_diffuse_color_stays_bounded() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )));
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
        )));
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.1, -1.0));
            let c = ray_color(&ray, 10, &world, &mut rng);
            assert!(c.min_element() >= 0.0);
            // Attenuation never exceeds 0.5 on the first hit
            assert!(c.max_element() <= 0.5 + 1e-6);
        }
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        let world = HittableList::new();
        let config = CameraConfig::default().with_resolution(3, 1.0).with_quality(4, 5);
        let camera = Camera::new(&config);

        // Fixed offsets make every sample identical
        let color = render_pixel(&camera, &world, 1, 1, &mut halves());
        let ray = camera.get_ray(1, 1, &mut halves());
        assert_close(color, sky_gradient(&ray), 1e-5);
    }

    #[test]
    fn test_render_dimensions_and_order() {
        let world = HittableList::new();
        let config = CameraConfig::default().with_resolution(4, 2.0).with_quality(1, 3);
        let camera = Camera::new(&config);

        let image = render(&camera, &world, &mut halves());
        assert_eq!(image.width, 4);
        assert_eq!(image.height, 2);
        assert_eq!(image.pixels.len(), 8);

        // Top row looks further up, so it is bluer than the bottom row
        assert!(image.get(0, 0).x < image.get(0, 1).x);
        assert_eq!(image.to_rgb().len(), 24);
    }

    #[test]
    fn test_render_hits_sphere() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.5,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )));
        let config = CameraConfig::default().with_resolution(10, 1.0).with_quality(4, 5);
        let camera = Camera::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&camera, &world, 5, 5, &mut rng);
        let miss = sky_gradient(&camera.get_ray(5, 5, &mut halves()));

        // A gray diffuse sphere can at most return half of the sky
        assert!(color.length() > 0.0);
        assert!(color.x < miss.x);
    }

    #[test]
    fn test_point_sphere_stays_finite() {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            0.0,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let color = ray_color(&ray, 5, &world, &mut halves());
        assert!(color.is_finite());
        assert_close(color, Color::new(0.75, 0.85, 1.0), 1e-6);
    }
}
