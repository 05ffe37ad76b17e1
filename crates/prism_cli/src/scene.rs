//! Built-in scenes, each paired with the camera that frames it.

use crate::cli::SceneKind;
use prism_math::Vec3;
use prism_renderer::{
    CameraConfig, Color, Cuboid, Dielectric, HittableList, Lambertian, Metal, Sphere,
};
use std::sync::Arc;

/// Build the world and its default camera for `kind`.
pub fn build(kind: SceneKind) -> (HittableList, CameraConfig) {
    match kind {
        SceneKind::Cube => cube_scene(),
        SceneKind::Spheres => sphere_scene(false),
        SceneKind::Glass => sphere_scene(true),
    }
}

/// A solid box on a wide, thin box floor.
fn cube_scene() -> (HittableList, CameraConfig) {
    let mut world = HittableList::new();

    let floor = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let cube = Arc::new(Lambertian::new(Color::new(0.7, 0.3, 0.3)));

    world.add(Box::new(Cuboid::new(
        Vec3::new(-1.0, -1.0, -2.2),
        Vec3::new(1.0, 1.0, 0.2),
        cube,
    )));
    world.add(Box::new(Cuboid::new(
        Vec3::new(-100.0, -100.5, -100.0),
        Vec3::new(100.0, -100.0, 100.0),
        floor,
    )));

    let camera = CameraConfig::default()
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(100, 50)
        .with_position(Vec3::new(-3.0, 2.0, 4.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(60.0, 0.0, 10.0);

    (world, camera)
}

/// Diffuse, glass and metal spheres side by side on a ground sphere.
///
/// With `hollow` the glass sphere gets an inner air bubble.
fn sphere_scene(hollow: bool) -> (HittableList, CameraConfig) {
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let left = Arc::new(Dielectric::new(1.5));
    let right = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3));

    world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.2), 0.5, center)));
    world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, left)));
    world.add(Box::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, right)));

    if hollow {
        // Air inside glass: the relative index is the reciprocal
        let bubble = Arc::new(Dielectric::new(1.0 / 1.5));
        world.add(Box::new(Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.4, bubble)));
    }

    let camera = CameraConfig::default()
        .with_resolution(400, 16.0 / 9.0)
        .with_quality(100, 50)
        .with_position(Vec3::new(-2.0, 2.0, 1.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(20.0, if hollow { 10.0 } else { 0.0 }, 3.4);

    (world, camera)
}
