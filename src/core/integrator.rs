// Copyright @yucwang 2026

use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::UInt;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Radiance estimator along a single ray. Generators are passed in
/// explicitly so the recursion stays deterministic under a fixed seed.
pub trait Integrator: Sync {
    fn trace_ray(&self, scene: &Scene, ray: &Ray3f, depth: UInt, rng: &mut LcgRng) -> RGBSpectrum;
}
