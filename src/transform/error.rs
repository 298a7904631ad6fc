use thiserror::Error;

use crate::convert::Error as ConvertError;
use crate::io;

/// Errors from rotating and scaling a single image.
#[derive(Debug, Error)]
pub enum Error {
    #[error("scale factor must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("rotation must be a finite number of degrees, got {0}")]
    InvalidRotation(f64),

    /// The rotated and scaled bounds exceed what one image may hold.
    #[error("transformed image would be {width:.0}x{height:.0} pixels, which is too large")]
    CanvasTooLarge { width: f64, height: f64 },

    /// The image backend cannot read or write PGM.
    #[error(transparent)]
    Unsupported(#[from] ConvertError),

    /// Reading the source or writing the result failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
