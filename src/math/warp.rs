// Copyright @yucwang 2026

use super::constants::{Float, PI, Vector2f, Vector3f};

/// Map two uniform numbers onto the unit disk with the polar transform.
/// The distribution is uniform over the disk area.
pub fn sample_polar_disk(u: &Vector2f) -> Vector2f {
    let r = u.x.sqrt();
    let phi = 2.0 * PI * u.y;

    Vector2f::new(r * phi.cos(), r * phi.sin())
}

/// Cosine-weighted hemisphere sample in the local frame (+Z is the normal).
/// With this density the cosine and 1/pi factors of a Lambertian surface
/// cancel exactly, so a diffuse eval reduces to the bare albedo.
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let theta = (1.0 - 2.0 * u.x).acos() / 2.0;
    let phi = 2.0 * PI * u.y;

    Vector3f::new(
        theta.sin() * phi.cos(),
        theta.sin() * phi.sin(),
        theta.cos(),
    )
}

/// Uniform hemisphere sample in the local frame (+Z is the normal).
pub fn sample_uniform_hemisphere(u: &Vector2f) -> Vector3f {
    let r = (1.0 - u.x * u.x).sqrt();
    let phi = 2.0 * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), u.x)
}

/* Tests for warp */
