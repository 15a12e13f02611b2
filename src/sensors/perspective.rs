// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector3f, PI};
use crate::math::ray::Ray3f;

/// Look-at perspective camera. The basis is derived once at construction
/// from the position, the look-at point, the half field-of-view and the
/// image aspect ratio; world Y is the up reference.
pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    tan_half_fov: Float,
    aspect: Float,
}

impl PerspectiveCamera {
    /// `half_fov_deg` is the half field-of-view in degrees, measured
    /// vertically. `look_at` must not coincide with `position`.
    pub fn new(position: Vector3f, look_at: Vector3f, half_fov_deg: Float, aspect: Float) -> Self {
        let forward = (look_at - position).normalize();
        let right = forward.cross(&Vector3f::new(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(&forward).normalize();

        Self {
            origin: position,
            forward,
            right,
            up,
            tan_half_fov: (half_fov_deg * PI / 180.0).tan(),
            aspect,
        }
    }
}

impl Sensor for PerspectiveCamera {
    fn get_ray(&self, x: Float, y: Float) -> Ray3f {
        let dir = self.forward
            + self.right * (x * self.tan_half_fov * self.aspect)
            + self.up * (y * self.tan_half_fov);
        Ray3f::new(self.origin, dir)
    }
}

/* Tests for PerspectiveCamera */
