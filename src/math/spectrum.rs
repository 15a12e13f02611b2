// Copyright @yucwang 2026

use super::constants::{Float, Vector3f};
use super::vector::clamp01;

use std::ops;

/// Linear RGB radiance. Channels are nominally in [0, 1] but are only
/// clamped when the spectrum is packed for output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self::black()
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn splat(v: Float) -> Self {
        Self::new(v, v, v)
    }

    pub fn black() -> Self {
        Self::splat(0.0)
    }

    pub fn white() -> Self {
        Self::splat(1.0)
    }

    pub fn grey() -> Self {
        Self::splat(0.2)
    }

    pub fn sky_blue() -> Self {
        Self::new(0.572, 0.886, 0.992)
    }

    pub fn is_black(&self) -> bool {
        self.rgb == Vector3f::new(0.0, 0.0, 0.0)
    }

    /// Gamma-correct and pack into an RGBA8 pixel, alpha fixed at 255.
    /// Channels are clamped to [0, 1] before the 1/2.2 gamma is applied.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let gamma = 1.0 / 2.2;
        let mut pixel = [0u8; 4];
        for c in 0..3 {
            let corrected = clamp01(self.rgb[c]).powf(gamma);
            pixel[c] = (corrected * 255.0).floor() as u8;
        }
        pixel[3] = 255;
        pixel
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = RGBSpectrum;

    fn add(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: RGBSpectrum) {
        self.rgb += rhs.rgb;
    }
}

// Elementwise product, used to attenuate radiance by a reflectance
// coefficient.
impl ops::Mul for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb.component_mul(&rhs.rgb) }
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb * rhs }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn div(self, rhs: Float) -> RGBSpectrum {
        RGBSpectrum { rgb: self.rgb / rhs }
    }
}

/* Tests for RGBSpectrum */

#[cfg(test)]
mod tests {
    use super::RGBSpectrum;

    #[test]
    fn test_spectrum_arithmetic() {
        let a = RGBSpectrum::new(0.25, 0.5, 1.0);
        let b = RGBSpectrum::new(1.0, 0.5, 0.5);
        let sum = a + b;
        assert_eq!(sum, RGBSpectrum::new(1.25, 1.0, 1.5));
        let product = a * b;
        assert_eq!(product, RGBSpectrum::new(0.25, 0.25, 0.5));
        assert_eq!(a * 2.0, RGBSpectrum::new(0.5, 1.0, 2.0));
        assert_eq!(a / 2.0, RGBSpectrum::new(0.125, 0.25, 0.5));
    }

    #[test]
    fn test_is_black() {
        assert!(RGBSpectrum::black().is_black());
        assert!(!RGBSpectrum::new(0.0, 0.0, 1e-9).is_black());
    }

    #[test]
    fn test_white_packs_to_full_bytes() {
        assert_eq!(RGBSpectrum::white().to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_black_packs_to_zero_bytes() {
        assert_eq!(RGBSpectrum::black().to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        let hot = RGBSpectrum::new(4.0, -1.0, 1.0);
        assert_eq!(hot.to_rgba8(), [255, 0, 255, 255]);
    }

    #[test]
    fn test_gamma_brightens_midtones() {
        let grey = RGBSpectrum::splat(0.5);
        let packed = grey.to_rgba8();
        // 0.5^(1/2.2) ~ 0.7297
        assert_eq!(packed[0], 186);
        assert_eq!(packed[0], packed[1]);
        assert_eq!(packed[1], packed[2]);
    }
}
