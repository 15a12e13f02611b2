// Copyright @yucwang 2026

use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

/// Row-major image of linear radiance values. Pixel (0, 0) is the first
/// element; conversion to display space happens in `to_rgba8`.
#[derive(Clone, Debug)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self {
            data: vec![RGBSpectrum::black(); pixel_number],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [RGBSpectrum] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn set_row(&mut self, y: usize, row: &[RGBSpectrum]) {
        self.row_mut(y).copy_from_slice(row);
    }

    /// Pack the whole image into a row-major RGBA8 byte buffer with gamma
    /// correction applied per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for pixel in &self.data {
            bytes.extend_from_slice(&pixel.to_rgba8());
        }
        bytes
    }
}

/* Tests for Bitmap */

#[cfg(test)]
mod tests {
    use super::Bitmap;
    use super::RGBSpectrum;

    #[test]
    fn test_bitmap_basic_functions() {
        let mut bitmap = Bitmap::new(256usize, 128usize);
        assert_eq!(bitmap.width(), 256);
        assert_eq!(bitmap.height(), 128);

        bitmap[(5, 6)] = RGBSpectrum::new(1.0, 0.5, 0.6);
        assert!((bitmap[(5, 6)][0] - 1.0).abs() < 1e-12);
        assert!((bitmap[(2, 6)][0] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_set_row() {
        let mut bitmap = Bitmap::new(4, 2);
        let row = vec![RGBSpectrum::white(); 4];
        bitmap.set_row(1, &row);
        assert_eq!(bitmap[(0, 1)], RGBSpectrum::white());
        assert_eq!(bitmap[(3, 1)], RGBSpectrum::white());
        assert_eq!(bitmap[(0, 0)], RGBSpectrum::black());
    }

    #[test]
    fn test_to_rgba8_layout() {
        let mut bitmap = Bitmap::new(2, 1);
        bitmap[(1, 0)] = RGBSpectrum::white();
        let bytes = bitmap.to_rgba8();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], &[0, 0, 0, 255]);
        assert_eq!(&bytes[4..8], &[255, 255, 255, 255]);
    }
}
