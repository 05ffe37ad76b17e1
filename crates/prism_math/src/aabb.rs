use crate::{Interval, Ray, Vec3};

/// Axis-aligned box given by one interval per axis.
///
/// Used directly as the geometry of solid boxes, so unlike a BVH bound it is
/// never padded: a zero-thickness slab stays zero-thickness.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            x: Interval::new(a.x.min(b.x), a.x.max(b.x)),
            y: Interval::new(a.y.min(b.y), a.y.max(b.y)),
            z: Interval::new(a.z.min(b.z), a.z.max(b.z)),
        }
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Corner with the smallest coordinate on every axis.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Corner with the largest coordinate on every axis.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Slab test against the ray, restricted to `ray_t`.
    ///
    /// Returns the parameter range `[entry, exit]` over which the ray is
    /// inside all three slabs, or `None` if that range is empty. A zero
    /// direction component gives an infinite reciprocal, which leaves that
    /// axis unconstrained when the origin lies between its planes.
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> Option<Interval> {
        let ray_orig = r.origin;
        let ray_dir = r.direction;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let adinv = 1.0 / ray_dir[axis];

            let mut t0 = (slab.min - ray_orig[axis]) * adinv;
            let mut t1 = (slab.max - ray_orig[axis]) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.max <= ray_t.min {
                return None;
            }
        }

        Some(ray_t)
    }
}
