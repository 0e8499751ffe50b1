//! Pinhole camera and image-plane sampling.
//!
//! The camera sits at the world origin looking down +Z with +Y up. The image
//! plane lies at z = 1 and its extent follows from a fixed vertical field of
//! view and the output aspect ratio.

use crate::Ray;
use prism_math::DVec3;

/// Vertical field of view in degrees.
pub const FIELD_OF_VIEW_DEGREES: f64 = 60.0;

/// World-space extent of the image plane for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    image_width: u32,
    image_height: u32,
    plane_width: f64,
    plane_height: f64,
}

impl ImagePlane {
    /// Compute the plane for an image of the given resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let aspect_ratio = image_width as f64 / image_height as f64;
        let plane_height = 2.0 * (FIELD_OF_VIEW_DEGREES.to_radians() / 2.0).tan();
        let plane_width = plane_height * aspect_ratio;

        Self {
            image_width,
            image_height,
            plane_width,
            plane_height,
        }
    }

    /// Camera position. Fixed at the world origin.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        DVec3::ZERO
    }

    pub fn plane_width(&self) -> f64 {
        self.plane_width
    }

    pub fn plane_height(&self) -> f64 {
        self.plane_height
    }

    /// Map normalized image coordinates (`[0, 1]²`, y down) onto the plane at z = 1.
    pub fn normalized_to_world(&self, nx: f64, ny: f64) -> DVec3 {
        DVec3::new(
            self.plane_width * (nx - 0.5),
            self.plane_height * (0.5 - ny),
            1.0,
        )
    }

    /// Primary ray through the center of pixel (x, y).
    pub fn pixel_ray(&self, x: u32, y: u32) -> Ray {
        let nx = (x as f64 + 0.5) / self.image_width as f64;
        let ny = (y as f64 + 0.5) / self.image_height as f64;

        Ray::new(self.origin(), self.normalized_to_world(nx, ny).normalize())
    }

    /// Anti-aliasing sub-ray `(sub_x, sub_y)` of `primary`, both in `1..=multiplier`.
    ///
    /// Odd sub-sample indices push the direction negative and even ones
    /// positive, by `index / (2 * multiplier * dimension)`. The jittered
    /// direction keeps z = 1 and is not renormalized.
    pub fn jittered_ray(&self, primary: &Ray, sub_x: u32, sub_y: u32, multiplier: u32) -> Ray {
        let jitter_x = jitter_offset(sub_x, multiplier, self.image_width);
        let jitter_y = jitter_offset(sub_y, multiplier, self.image_height);
        let dir = primary.direction();

        Ray::new(
            self.origin(),
            DVec3::new(dir.x + jitter_x, dir.y + jitter_y, 1.0),
        )
    }
}

#[inline]
fn jitter_offset(index: u32, multiplier: u32, dimension: u32) -> f64 {
    let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
    (index as f64 * sign) / (2.0 * multiplier as f64 * dimension as f64)
}
