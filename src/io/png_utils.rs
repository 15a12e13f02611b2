// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use image::{ImageBuffer, Rgba};

/// Write a bitmap to a PNG file as RGBA8. Row 0 of the bitmap corresponds
/// to the bottom of the camera's y-range, so the image is flipped
/// vertically while packing.
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) -> image::ImageResult<()> {
    log::info!("Starting writing PNG image: {}.", file_path);

    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    let image = ImageBuffer::from_fn(width, height, |x, y| {
        let flipped_y = (height - 1 - y) as usize;
        Rgba(bitmap[(x as usize, flipped_y)].to_rgba8())
    });
    image.save(file_path)?;

    log::info!("PNG written, width = {}, height = {}.", width, height);
    Ok(())
}

/* Tests for png_utils */
