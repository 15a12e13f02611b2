// Copyright @yucwang 2026

use crate::core::interaction::HitResult;
use crate::core::rng::LcgRng;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

// NOTE: `incoming` is the view ray arriving from the camera side, so its
// direction points towards the surface.

/// Surface scattering behavior. `sample` draws a continuation ray from the
/// hit point; `eval` is the reflectance coefficient applied to the
/// radiance traced along that continuation.
///
/// Implementations importance-sample their own lobe, so `eval` returns a
/// fully cancelled transport weight and the integrator never divides by a
/// probability density.
pub trait Brdf: Send + Sync {
    fn sample(&self, incoming: &Ray3f, hit: &HitResult, rng: &mut LcgRng) -> Ray3f;

    fn eval(&self, incoming: &Ray3f, hit: &HitResult, outgoing: &Ray3f) -> RGBSpectrum;
}
