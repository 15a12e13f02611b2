// Copyright @yucwang 2026

use crate::core::brdf::Brdf;
use crate::core::interaction::HitResult;
use crate::core::rng::LcgRng;
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::warp::sample_cosine_hemisphere;

/// Lambertian surface with cosine-weighted hemisphere sampling. Since the
/// sampling density matches the cosine lobe, the cosine and 1/pi factors
/// cancel and `eval` is the bare albedo.
pub struct DiffuseBrdf;

impl DiffuseBrdf {
    pub fn new() -> Self {
        Self
    }
}

impl Brdf for DiffuseBrdf {
    fn sample(&self, _incoming: &Ray3f, hit: &HitResult, rng: &mut LcgRng) -> Ray3f {
        let local = sample_cosine_hemisphere(&rng.next_2d());
        let frame = Frame::from_normal(&hit.normal());
        Ray3f::new(hit.point(), frame.to_world(&local))
    }

    fn eval(&self, _incoming: &Ray3f, hit: &HitResult, _outgoing: &Ray3f) -> RGBSpectrum {
        hit.actor().material().albedo()
    }
}

/* Tests for DiffuseBrdf */
