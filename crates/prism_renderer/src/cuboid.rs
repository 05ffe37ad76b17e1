//! Axis-aligned solid box primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use prism_math::{Aabb, Interval, Ray, Vec3};
use std::sync::Arc;

/// A solid box whose faces are aligned with the world axes.
pub struct Cuboid {
    bounds: Aabb,
    material: Arc<dyn Material>,
}

impl Cuboid {
    /// Create a box spanning two opposite corners, given in any order.
    pub fn new(a: Vec3, b: Vec3, material: Arc<dyn Material>) -> Self {
        Self {
            bounds: Aabb::from_points(a, b),
            material,
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Outward normal of the face plane closest to `p`.
    ///
    /// Faces are scanned as -X, +X, -Y, +Y, -Z, +Z and the first strictly
    /// closer one wins. On an edge or corner the distances tie, so the
    /// reported face is whichever comes first in that order, which is not
    /// necessarily the face the ray actually crossed.
    fn face_normal(&self, p: Vec3) -> Vec3 {
        let box_min = self.bounds.min();
        let box_max = self.bounds.max();

        let mut outward_normal = Vec3::ZERO;
        let mut min_dist = f32::INFINITY;

        for axis in 0..3 {
            let dist = (p[axis] - box_min[axis]).abs();
            if dist < min_dist {
                min_dist = dist;
                outward_normal = Vec3::ZERO;
                outward_normal[axis] = -1.0;
            }

            let dist = (p[axis] - box_max[axis]).abs();
            if dist < min_dist {
                min_dist = dist;
                outward_normal = Vec3::ZERO;
                outward_normal[axis] = 1.0;
            }
        }

        outward_normal
    }
}

impl Hittable for Cuboid {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        let Some(span) = self.bounds.hit(ray, ray_t) else {
            return false;
        };

        rec.t = span.min;
        rec.p = ray.at(rec.t);
        let outward_normal = self.face_normal(rec.p);
        rec.set_face_normal(ray, outward_normal);
        rec.material = self.material.as_ref();

        true
    }
}
