// Copyright @yucwang 2026

use crate::core::scene::Actor;
use crate::math::constants::{Float, Vector3f};

/// Everything the integrator needs from a ray/actor intersection. The
/// actor reference borrows from the scene, so a hit never outlives the
/// trace call that produced it.
pub struct HitResult<'a> {
    t: Float,
    point: Vector3f,
    normal: Vector3f,
    actor: &'a Actor,
}

impl<'a> HitResult<'a> {
    pub fn new(t: Float, point: Vector3f, normal: Vector3f, actor: &'a Actor) -> Self {
        Self { t, point, normal, actor }
    }

    /// Intersection parameter along the ray, always above the
    /// self-intersection epsilon.
    pub fn t(&self) -> Float {
        self.t
    }

    pub fn point(&self) -> Vector3f {
        self.point
    }

    /// Outward unit surface normal at the hit point.
    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn actor(&self) -> &'a Actor {
        self.actor
    }
}
