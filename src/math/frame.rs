// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};

/// Local orthonormal frame around a surface normal. `w` is the normal,
/// `u` and `v` span the tangent plane.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    u: Vector3f,
    v: Vector3f,
    w: Vector3f,
}

impl Frame {
    /// Build a frame from a unit normal. The reference axis is world Y,
    /// with a fallback to world X when the normal is nearly parallel to Y.
    pub fn from_normal(n: &Vector3f) -> Self {
        let axis = if n.y.abs() < 0.999 {
            Vector3f::new(0.0, 1.0, 0.0)
        } else {
            Vector3f::new(1.0, 0.0, 0.0)
        };
        let u = n.cross(&axis).normalize();
        let v = u.cross(n).normalize();
        Self { u, v, w: *n }
    }

    pub fn to_world(&self, local: &Vector3f) -> Vector3f {
        self.u * local.x + self.v * local.y + self.w * local.z
    }

    pub fn to_local(&self, world: &Vector3f) -> Vector3f {
        Vector3f::new(world.dot(&self.u), world.dot(&self.v), world.dot(&self.w))
    }

    pub fn normal(&self) -> Vector3f {
        self.w
    }
}

/* Tests for Frame */

#[cfg(test)]
mod tests {
    use super::{Frame, Vector3f};

    fn assert_orthonormal(frame: &Frame) {
        assert!((frame.u.norm() - 1.0).abs() < 1e-12);
        assert!((frame.v.norm() - 1.0).abs() < 1e-12);
        assert!((frame.w.norm() - 1.0).abs() < 1e-12);
        assert!(frame.u.dot(&frame.v).abs() < 1e-12);
        assert!(frame.u.dot(&frame.w).abs() < 1e-12);
        assert!(frame.v.dot(&frame.w).abs() < 1e-12);
    }

    #[test]
    fn test_frame_orthonormal() {
        let n = Vector3f::new(1.0, 2.0, -0.5).normalize();
        let frame = Frame::from_normal(&n);
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_frame_survives_axis_aligned_normal() {
        // The floor sphere's normal is exactly +Y, which would make the
        // default reference axis degenerate.
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let frame = Frame::from_normal(&n);
        assert_orthonormal(&frame);
        assert_eq!(frame.normal(), n);
    }

    #[test]
    fn test_to_world_z_maps_to_normal() {
        let n = Vector3f::new(0.3, -0.4, 0.6).normalize();
        let frame = Frame::from_normal(&n);
        let mapped = frame.to_world(&Vector3f::new(0.0, 0.0, 1.0));
        assert!((mapped - n).norm() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let n = Vector3f::new(-0.2, 0.9, 0.4).normalize();
        let frame = Frame::from_normal(&n);
        let d = Vector3f::new(0.1, -0.7, 0.7).normalize();
        let back = frame.to_world(&frame.to_local(&d));
        assert!((back - d).norm() < 1e-12);
    }
}
