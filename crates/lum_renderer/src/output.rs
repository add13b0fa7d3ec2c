//! Radiance output buffer and PNG export.

use std::path::Path;

use lum_math::Color;

use crate::error::RenderResult;

/// Flat `width * height * 3` radiance array, row-major, RGB per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct RadianceBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl RadianceBuffer {
    /// Create a buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Take the raw channel values.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Channel triples, one per pixel.
    pub fn pixels(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.data)
    }

    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_array(self.pixels()[linear_index(self.width, x, y)])
    }

    /// Write the pixel with linear index `index`.
    pub(crate) fn set_index(&mut self, index: usize, color: Color) {
        self.data[3 * index..3 * index + 3].copy_from_slice(&color.to_array());
    }

    /// Count of NaN or infinite channels.
    pub fn non_finite_count(&self) -> usize {
        self.data.iter().filter(|v| !v.is_finite()).count()
    }

    /// Convert to 8-bit RGB. Values are scaled by 255 and truncated; NaN
    /// becomes 0.
    pub fn to_rgb8(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b] = self.pixels()[linear_index(self.width, x, y)];
            image::Rgb([to_u8(r), to_u8(g), to_u8(b)])
        })
    }

    /// Encode as PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb8()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0
    (value * 255.0) as u8
}

/// Row-major index of (x, y), computed in `usize`.
#[inline]
fn linear_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}
