// Copyright @yucwang 2026

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::constants::UInt;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;

/// Recursive path-tracing estimator of the rendering equation
/// L = Le + f * Li, truncated at a fixed recursion depth. Paths that
/// reach the depth bound return a flat cutoff radiance instead of being
/// continued by Russian roulette; the truncation bias is accepted.
pub struct PathIntegrator {
    max_depth: UInt,
    cutoff: RGBSpectrum,
}

impl PathIntegrator {
    pub fn new(max_depth: UInt) -> Self {
        Self {
            max_depth,
            cutoff: RGBSpectrum::white(),
        }
    }

    pub fn with_cutoff(max_depth: UInt, cutoff: RGBSpectrum) -> Self {
        Self { max_depth, cutoff }
    }

    pub fn max_depth(&self) -> UInt {
        self.max_depth
    }
}

impl Integrator for PathIntegrator {
    fn trace_ray(&self, scene: &Scene, ray: &Ray3f, depth: UInt, rng: &mut LcgRng) -> RGBSpectrum {
        if depth >= self.max_depth {
            return self.cutoff;
        }

        match scene.ray_intersection(ray) {
            Some(hit) => {
                let material = hit.actor().material();
                let brdf = material.brdf();
                let outgoing = brdf.sample(ray, &hit, rng);
                let coeff = brdf.eval(ray, &hit, &outgoing);
                material.emission() + coeff * self.trace_ray(scene, &outgoing, depth + 1, rng)
            }
            None => scene.background(),
        }
    }
}

/* Tests for PathIntegrator */
