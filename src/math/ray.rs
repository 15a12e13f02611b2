// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// A ray in world space. The direction is normalized at construction, so
/// every stored ray carries a unit-length direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f) -> Self {
        Self { origin: o, dir: d.normalize() }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::{Ray3f, Vector3f};

    #[test]
    fn test_ray3f_direction_is_unit() {
        let o = Vector3f::new(0.0, 0.0, 0.0);
        let d = Vector3f::new(3.0, 0.0, 4.0);
        let ray = Ray3f::new(o, d);
        assert_eq!(o, ray.origin());
        assert!((ray.dir().norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray3f_at() {
        let o = Vector3f::new(1.0, 2.0, 3.0);
        let d = Vector3f::new(0.0, 0.0, -1.0);
        let ray = Ray3f::new(o, d);
        let p = ray.at(2.5);
        assert!((p - Vector3f::new(1.0, 2.0, 0.5)).norm() < 1e-12);
    }
}
