// Copyright @yucwang 2026

use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;

/// Spherical geometry, the only primitive the renderer knows about.
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    /// `radius` must be positive.
    pub fn new(center: Vector3f, radius: Float) -> Self {
        debug_assert!(radius > 0.0);
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Smallest intersection parameter beyond the self-intersection
    /// epsilon, or `None` if the ray misses.
    ///
    /// Solves A t^2 + B t + C = 0 with A = |d|^2, B = 2 (o - c) . d and
    /// C = |o - c|^2 - r^2. A negative discriminant is a miss; otherwise
    /// the near root is preferred and the far root is the fallback when
    /// the near one fails the epsilon test.
    pub fn intersect(&self, ray: &Ray3f) -> Option<Float> {
        let op = ray.origin() - self.center;
        let a = ray.dir().norm_squared();
        let b = 2.0 * op.dot(&ray.dir());
        let c = op.norm_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = (-b - sqrt_d) / (2.0 * a);
        let t_far = (-b + sqrt_d) / (2.0 * a);

        if t_near > EPSILON {
            Some(t_near)
        } else if t_far > EPSILON {
            Some(t_far)
        } else {
            None
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: &Vector3f) -> Vector3f {
        (point - self.center).normalize()
    }
}

/* Tests for Sphere */
