// Copyright @yucwang 2026

use crate::core::brdf::Brdf;
use crate::core::interaction::HitResult;
use crate::core::rng::LcgRng;
use crate::math::constants::{EPSILON, Float};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::math::vector::clamp;
use crate::math::warp::sample_cosine_hemisphere;

/// Oren-Nayar rough diffuse surface. Sampling is the same cosine-weighted
/// hemisphere as the Lambertian case; `eval` scales the albedo by the
/// roughness term
///
///   A + B * max(0, cos(phi_i - phi_o)) * sin(alpha) * tan(beta)
///
/// with alpha = max(theta_i, theta_o), beta = min(theta_i, theta_o).
/// Reduces to the plain diffuse model at sigma = 0.
pub struct RoughDiffuseBrdf {
    a: Float,
    b: Float,
}

impl RoughDiffuseBrdf {
    /// `sigma` is the surface roughness (standard deviation of the facet
    /// slope distribution, in radians).
    pub fn new(sigma: Float) -> Self {
        let sigma2 = sigma * sigma;
        Self {
            a: 1.0 - 0.5 * sigma2 / (sigma2 + 0.33),
            b: 0.45 * sigma2 / (sigma2 + 0.09),
        }
    }
}

impl Brdf for RoughDiffuseBrdf {
    fn sample(&self, _incoming: &Ray3f, hit: &HitResult, rng: &mut LcgRng) -> Ray3f {
        let local = sample_cosine_hemisphere(&rng.next_2d());
        let frame = Frame::from_normal(&hit.normal());
        Ray3f::new(hit.point(), frame.to_world(&local))
    }

    fn eval(&self, incoming: &Ray3f, hit: &HitResult, outgoing: &Ray3f) -> RGBSpectrum {
        let n = hit.normal();
        let wi = -incoming.dir();
        let wo = outgoing.dir();

        let cos_theta_i = clamp(wi.dot(&n), -1.0, 1.0);
        let cos_theta_o = clamp(wo.dot(&n), -1.0, 1.0);
        let theta_i = cos_theta_i.acos();
        let theta_o = cos_theta_o.acos();

        let alpha = theta_i.max(theta_o);
        let beta = theta_i.min(theta_o);

        // Azimuthal difference from the tangent-plane projections. When
        // either direction is aligned with the normal the projection
        // vanishes and so does the whole roughness term.
        let proj_i = wi - n * cos_theta_i;
        let proj_o = wo - n * cos_theta_o;
        let cos_delta_phi = if proj_i.norm() < EPSILON || proj_o.norm() < EPSILON {
            0.0
        } else {
            proj_i.normalize().dot(&proj_o.normalize())
        };

        let factor = self.a + self.b * cos_delta_phi.max(0.0) * alpha.sin() * beta.tan();
        hit.actor().material().albedo() * factor
    }
}

/* Tests for RoughDiffuseBrdf */
