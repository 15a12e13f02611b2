// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// Camera contract. `x` and `y` are normalized device coordinates in
/// [-1, 1]; (-1, -1) maps to one image corner and (1, 1) to the other.
pub trait Sensor: Sync {
    fn get_ray(&self, x: Float, y: Float) -> Ray3f;
}
