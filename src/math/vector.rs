// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// Cosine of the angle between two vectors, neither of which needs to be
/// unit length.
pub fn cosv(a: &Vector3f, b: &Vector3f) -> Float {
    a.normalize().dot(&b.normalize())
}

/// Reflect `v` about the normal `n`. The result has the same magnitude as
/// `v`; callers that need a unit direction must normalize it.
pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    v - n * 2.0 * cosv(v, n) * v.norm()
}

pub fn clamp(x: Float, min: Float, max: Float) -> Float {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

pub fn clamp01(x: Float) -> Float {
    clamp(x, 0.0, 1.0)
}

/* Tests for vector helpers */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosv_ignores_length() {
        let a = Vector3f::new(0.0, 3.0, 0.0);
        let b = Vector3f::new(5.0, 5.0, 0.0);
        let expected = (0.5 as Float).sqrt();
        assert!((cosv(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_reflect_unit_incoming() {
        let v = Vector3f::new(1.0, -1.0, 0.0).normalize();
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let r = reflect(&v, &n);
        let expected = Vector3f::new(1.0, 1.0, 0.0).normalize();
        assert!((r - expected).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_preserves_magnitude() {
        let v = Vector3f::new(2.0, -2.0, 1.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let r = reflect(&v, &n);
        assert!((r.norm() - v.norm()).abs() < 1e-12);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-0.2, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.7, 0.0, 1.0), 1.0);
    }
}
