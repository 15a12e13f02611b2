// Copyright @yucwang 2026

use crate::core::scene::{Actor, Material, Scene};
use crate::materials::diffuse::DiffuseBrdf;
use crate::materials::rough_diffuse::RoughDiffuseBrdf;
use crate::materials::specular::SpecularBrdf;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::sphere::Sphere;

// Built-in scene tables. Conventions are right-handed with Y up:
// X right, Y up, Z back.

pub fn by_name(name: &str) -> Option<Scene> {
    match name {
        "rtweekend" => Some(rtweekend()),
        "rough" => Some(rough()),
        _ => None,
    }
}

fn diffuse(albedo: RGBSpectrum, center: Vector3f, radius: Float) -> Actor {
    Actor::new(
        Material::new(albedo, RGBSpectrum::black(), Box::new(DiffuseBrdf::new())),
        Sphere::new(center, radius),
    )
}

fn emitter(emission: RGBSpectrum, center: Vector3f, radius: Float) -> Actor {
    Actor::new(
        Material::new(RGBSpectrum::black(), emission, Box::new(DiffuseBrdf::new())),
        Sphere::new(center, radius),
    )
}

fn mirror(center: Vector3f, radius: Float) -> Actor {
    Actor::new(
        Material::new(
            RGBSpectrum::white(),
            RGBSpectrum::black(),
            Box::new(SpecularBrdf::new()),
        ),
        Sphere::new(center, radius),
    )
}

/// Two lit balls over a huge floor sphere, one diffuse and one mirror.
pub fn rtweekend() -> Scene {
    let actors = vec![
        diffuse(
            RGBSpectrum::new(1.0, 0.1, 0.1),
            Vector3f::new(1.5, 1.0, 0.0),
            1.0,
        ),
        emitter(
            RGBSpectrum::new(8.0, 8.0, 8.0),
            Vector3f::new(6.0, 4.5, -4.0),
            3.0,
        ),
        emitter(
            RGBSpectrum::new(8.0, 8.0, 8.0),
            Vector3f::new(-6.0, 4.5, -4.0),
            3.0,
        ),
        mirror(Vector3f::new(-1.5, 1.0, 0.0), 1.0),
        diffuse(
            RGBSpectrum::new(0.1, 1.0, 0.1),
            Vector3f::new(0.0, -1e5, 0.0),
            1e5,
        ),
    ];
    Scene::new(actors, RGBSpectrum::black())
}

/// The rtweekend layout with Oren-Nayar surfaces instead of Lambertian.
pub fn rough() -> Scene {
    let sigma = 0.3;
    let rough_ball = Actor::new(
        Material::new(
            RGBSpectrum::new(1.0, 0.1, 0.1),
            RGBSpectrum::black(),
            Box::new(RoughDiffuseBrdf::new(sigma)),
        ),
        Sphere::new(Vector3f::new(1.5, 1.0, 0.0), 1.0),
    );
    let rough_floor = Actor::new(
        Material::new(
            RGBSpectrum::new(0.1, 1.0, 0.1),
            RGBSpectrum::black(),
            Box::new(RoughDiffuseBrdf::new(sigma)),
        ),
        Sphere::new(Vector3f::new(0.0, -1e5, 0.0), 1e5),
    );
    let actors = vec![
        rough_ball,
        emitter(
            RGBSpectrum::new(8.0, 8.0, 8.0),
            Vector3f::new(6.0, 4.5, -4.0),
            3.0,
        ),
        emitter(
            RGBSpectrum::new(8.0, 8.0, 8.0),
            Vector3f::new(-6.0, 4.5, -4.0),
            3.0,
        ),
        mirror(Vector3f::new(-1.5, 1.0, 0.0), 1.0),
        rough_floor,
    ];
    Scene::new(actors, RGBSpectrum::black())
}

/* Tests for scenes */
