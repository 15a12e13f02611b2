// Copyright @yucwang 2026

use crate::core::brdf::Brdf;
use crate::core::interaction::HitResult;
use crate::core::rng::LcgRng;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::vector::reflect;

/// Perfect mirror. The continuation direction is deterministic and the
/// reflectance is full white, so no energy is lost at the bounce.
pub struct SpecularBrdf;

impl SpecularBrdf {
    pub fn new() -> Self {
        Self
    }
}

impl Brdf for SpecularBrdf {
    fn sample(&self, incoming: &Ray3f, hit: &HitResult, _rng: &mut LcgRng) -> Ray3f {
        let dir = reflect(&incoming.dir(), &hit.normal());
        Ray3f::new(hit.point(), dir)
    }

    fn eval(&self, _incoming: &Ray3f, _hit: &HitResult, _outgoing: &Ray3f) -> RGBSpectrum {
        RGBSpectrum::white()
    }
}

/* Tests for SpecularBrdf */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{Actor, Material};
    use crate::math::constants::Vector3f;
    use crate::shapes::sphere::Sphere;

    fn mirror_actor() -> Actor {
        let material = Material::new(
            RGBSpectrum::white(),
            RGBSpectrum::black(),
            Box::new(SpecularBrdf::new()),
        );
        Actor::new(material, Sphere::new(Vector3f::zeros(), 1.0))
    }

    #[test]
    fn test_sample_is_mirror_reflection() {
        let actor = mirror_actor();
        let incoming = Ray3f::new(Vector3f::new(-3.0, 3.0, 0.0), Vector3f::new(1.0, -1.0, 0.0));
        let hit = actor.intersect(&incoming).unwrap();

        let brdf = SpecularBrdf::new();
        let mut rng = LcgRng::new(0);
        let outgoing = brdf.sample(&incoming, &hit, &mut rng);

        let expected = reflect(&incoming.dir(), &hit.normal()).normalize();
        assert!((outgoing.dir() - expected).norm() < 1e-9);
        assert!((outgoing.origin() - hit.point()).norm() < 1e-12);
    }

    #[test]
    fn test_eval_is_constant_white() {
        let actor = mirror_actor();
        let incoming = Ray3f::new(Vector3f::new(0.0, 0.0, 3.0), Vector3f::new(0.0, 0.0, -1.0));
        let hit = actor.intersect(&incoming).unwrap();

        let brdf = SpecularBrdf::new();
        let mut rng = LcgRng::new(0);
        let outgoing = brdf.sample(&incoming, &hit, &mut rng);
        assert_eq!(brdf.eval(&incoming, &hit, &outgoing), RGBSpectrum::white());
    }
}
