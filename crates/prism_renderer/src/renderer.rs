//! Frame rendering and the output image buffer.
//!
//! Rendering is a single-threaded loop over rows, columns and, when
//! anti-aliasing is enabled, jittered sub-samples. Each pixel is written
//! exactly once.

use std::time::Instant;

use crate::{Color, ImagePlane, Scene};

/// Clamp a value to [0, 1] range.
#[inline]
fn clamp_01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Number of sub-samples taken per pixel for an anti-aliasing multiplier.
#[inline]
fn sample_count(multiplier: u32) -> f64 {
    f64::from(multiplier).powi(2)
}

/// Convert a color to 8-bit RGBA. Channels are clamped, no gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Row-major image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Convert to an 8-bit RGB image that callers can encode with `image`.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, _] = color_to_rgba(self.get(x, y));
            image::Rgb([r, g, b])
        })
    }
}

impl Scene {
    /// Render the scene into `image`, overwriting every pixel.
    pub fn render(&self, image: &mut ImageBuffer) {
        let multiplier = self.options().aa_multiplier;
        log::info!(
            "Rendering {}x{} ({}x{} samples/pixel) with {} entities and {} lights",
            image.width,
            image.height,
            multiplier,
            multiplier,
            self.entity_count(),
            self.light_count()
        );

        let start = Instant::now();
        let plane = ImagePlane::new(image.width, image.height);

        for y in 0..image.height {
            for x in 0..image.width {
                let color = self.render_pixel(&plane, x, y);
                image.set(x, y, color);
            }
        }

        log::info!("Rendered in {:?}", start.elapsed());
    }

    /// Color of pixel (x, y): one centered sample, or the mean of the
    /// multiplier² jittered sub-samples when anti-aliasing.
    pub fn render_pixel(&self, plane: &ImagePlane, x: u32, y: u32) -> Color {
        let primary = plane.pixel_ray(x, y);
        let multiplier = self.options().aa_multiplier;

        if multiplier <= 1 {
            return self.shade(&primary, 0);
        }

        let mut pixel_color = Color::ZERO;
        for sub_x in 1..=multiplier {
            for sub_y in 1..=multiplier {
                let ray = plane.jittered_ray(&primary, sub_x, sub_y, multiplier);
                pixel_color += self.shade(&ray, 0);
            }
        }

        // Average the samples
        pixel_color / sample_count(multiplier)
    }
}
