//! Rotation and uniform scaling of one PGM image about its center.
//!
//! The output canvas is grown to the bounding box of the transformed
//! source, so no part of the image is clipped. Pixels are resampled
//! bilinearly; canvas areas the source does not cover are black.

mod error;

pub use error::Error;

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage, Luma};
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};

use crate::convert::{Capabilities, Operation};
use crate::io::{self, Format};

/// Rotation applied when none is given, in degrees.
pub const DEFAULT_ROTATION: f64 = 45.0;

/// Scale factor applied when none is given.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Appended to the input stem to name the default output file.
pub const TRANSFORMED_SUFFIX: &str = "_transformed";

/// Format transformed images are read and written as.
pub const TRANSFORM_FORMAT: Format = Format::Pgm;

const MAX_CANVAS_PIXELS: f64 = (1u64 << 30) as f64;

// Absorbs float error so a 90° turn of a 4x2 image stays 2x4 rather
// than 3x5.
const EXTENT_EPSILON: f64 = 1e-6;

/// A rotation about the image center combined with a uniform scale.
///
/// Positive angles turn the image clockwise on screen, since the y axis
/// points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    rotation: f64,
    scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: DEFAULT_ROTATION,
            scale: DEFAULT_SCALE,
        }
    }
}

impl Transform {
    /// # Errors
    ///
    /// [`Error::InvalidRotation`] for a non-finite angle and
    /// [`Error::InvalidScale`] unless `scale` is finite and positive.
    pub fn new(rotation: f64, scale: f64) -> Result<Self, Error> {
        if !rotation.is_finite() {
            return Err(Error::InvalidRotation(rotation));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidScale(scale));
        }
        Ok(Self { rotation, scale })
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Output size and source-to-output mapping for a `width`x`height`
    /// source.
    pub fn canvas(&self, width: u32, height: u32) -> Result<Canvas, Error> {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let s = self.scale;
        let (cx, cy) = (f64::from(width) / 2.0, f64::from(height) / 2.0);

        let corners = [(-cx, -cy), (cx, -cy), (cx, cy), (-cx, cy)];
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in corners {
            let nx = s * (x * cos - y * sin);
            let ny = s * (x * sin + y * cos);
            min_x = min_x.min(nx);
            max_x = max_x.max(nx);
            min_y = min_y.min(ny);
            max_y = max_y.max(ny);
        }

        let extent_x = ((max_x - min_x) - EXTENT_EPSILON).ceil().max(1.0);
        let extent_y = ((max_y - min_y) - EXTENT_EPSILON).ceil().max(1.0);
        if extent_x > f64::from(u32::MAX)
            || extent_y > f64::from(u32::MAX)
            || extent_x * extent_y > MAX_CANVAS_PIXELS
        {
            return Err(Error::CanvasTooLarge {
                width: extent_x,
                height: extent_y,
            });
        }

        let (out_w, out_h) = (extent_x as u32, extent_y as u32);
        let tx = f64::from(out_w) / 2.0 - s * (cx * cos - cy * sin);
        let ty = f64::from(out_h) / 2.0 - s * (cx * sin + cy * cos);

        Ok(Canvas {
            width: out_w,
            height: out_h,
            matrix: [s * cos, -s * sin, tx, s * sin, s * cos, ty],
        })
    }

    /// Resamples `image` onto its transformed canvas.
    pub fn apply(&self, image: &GrayImage) -> Result<GrayImage, Error> {
        let canvas = self.canvas(image.width(), image.height())?;
        let projection = canvas
            .projection()
            .ok_or(Error::InvalidScale(self.scale))?;

        let mut out = GrayImage::new(canvas.width, canvas.height);
        warp_into(
            image,
            &projection,
            Interpolation::Bilinear,
            Luma([0]),
            &mut out,
        );
        Ok(out)
    }
}

/// Where a transformed image lands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    /// Row-major `[a b tx; c d ty]`, mapping source pixels to output
    /// pixels.
    pub matrix: [f64; 6],
}

impl Canvas {
    /// Maps a source pixel coordinate onto this canvas.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, tx, c, d, ty] = self.matrix;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    // `None` when the matrix degenerates in f32, e.g. a vanishing scale.
    fn projection(&self) -> Option<Projection> {
        let [a, b, tx, c, d, ty] = self.matrix.map(|v| v as f32);
        Projection::from_matrix([a, b, tx, c, d, ty, 0.0, 0.0, 1.0])
    }
}

/// Result of [`transform_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub output: PathBuf,
    pub source_size: (u32, u32),
    pub output_size: (u32, u32),
}

/// Output path used when none is given: `<stem>_transformed.pgm` next to
/// the input.
pub fn default_output(input: &Path) -> PathBuf {
    io::suffixed_path(input, TRANSFORMED_SUFFIX, TRANSFORM_FORMAT)
}

/// Reads `input` as 8-bit grayscale, applies `transform` and writes the
/// result to `output` as binary PGM.
///
/// `caps` is checked before the input is opened.
pub fn transform_file(
    input: &Path,
    output: &Path,
    transform: &Transform,
    caps: &Capabilities,
) -> Result<Transformed, Error> {
    caps.require(TRANSFORM_FORMAT, Operation::Decode)?;
    caps.require(TRANSFORM_FORMAT, Operation::Encode)?;

    let source = io::read_image(input, TRANSFORM_FORMAT)?.to_luma8();
    let result = transform.apply(&source)?;

    tracing::info!(
        input = %input.display(),
        rotation = transform.rotation(),
        scale = transform.scale(),
        width = result.width(),
        height = result.height(),
        "transformed image"
    );

    let transformed = Transformed {
        output: output.to_path_buf(),
        source_size: source.dimensions(),
        output_size: result.dimensions(),
    };
    io::write_image(&DynamicImage::ImageLuma8(result), output, TRANSFORM_FORMAT)?;
    Ok(transformed)
}
