// Copyright @yucwang 2026

use crate::core::brdf::Brdf;
use crate::core::interaction::HitResult;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::sphere::Sphere;

/// Surface description. `emission` is non-zero only for light sources;
/// `albedo` is the surface reflectance color read by the BRDF.
pub struct Material {
    albedo: RGBSpectrum,
    emission: RGBSpectrum,
    brdf: Box<dyn Brdf>,
}

impl Material {
    pub fn new(albedo: RGBSpectrum, emission: RGBSpectrum, brdf: Box<dyn Brdf>) -> Self {
        Self { albedo, emission, brdf }
    }

    pub fn albedo(&self) -> RGBSpectrum {
        self.albedo
    }

    pub fn emission(&self) -> RGBSpectrum {
        self.emission
    }

    pub fn brdf(&self) -> &dyn Brdf {
        self.brdf.as_ref()
    }
}

/// Unit of placement in a scene: one material on one piece of geometry.
pub struct Actor {
    material: Material,
    geometry: Sphere,
}

impl Actor {
    pub fn new(material: Material, geometry: Sphere) -> Self {
        Self { material, geometry }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn geometry(&self) -> &Sphere {
        &self.geometry
    }

    pub fn intersect(&self, ray: &Ray3f) -> Option<HitResult> {
        let t = self.geometry.intersect(ray)?;
        let point = ray.at(t);
        let normal = self.geometry.normal_at(&point);
        Some(HitResult::new(t, point, normal, self))
    }
}

/// Ordered list of actors plus the background radiance returned for rays
/// that escape the scene. Scenes are immutable while rendering.
pub struct Scene {
    actors: Vec<Actor>,
    background: RGBSpectrum,
}

impl Scene {
    pub fn new(actors: Vec<Actor>, background: RGBSpectrum) -> Self {
        Self { actors, background }
    }

    pub fn background(&self) -> RGBSpectrum {
        self.background
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Nearest hit over all actors, linear scan. Ties at identical `t`
    /// resolve to the actor declared first.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<HitResult> {
        let mut closest: Option<HitResult> = None;
        for actor in &self.actors {
            if let Some(hit) = actor.intersect(ray) {
                match &closest {
                    Some(best) if hit.t() >= best.t() => {}
                    _ => closest = Some(hit),
                }
            }
        }
        closest
    }
}

/* Tests for Scene */
