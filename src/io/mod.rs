//! Filesystem side of a conversion: locating inputs, naming outputs,
//! and moving image bytes between disk and the `image` backend.

use std::ffi::OsStr;
use std::fmt;

pub mod error;

mod codec;
mod discover;
mod path;

pub use codec::{read_image, write_image};
pub use discover::discover;
pub use error::Error;
pub use path::{output_path, prepare_output_dir, suffixed_path};

/// Raster formats handled by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Portable GrayMap (`P2`/`P5`).
    Pgm,
    /// Portable Network Graphics.
    Png,
}

impl Format {
    /// Canonical lowercase file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Pgm => "pgm",
            Format::Png => "png",
        }
    }

    /// Returns `true` if `ext` names this format, ignoring ASCII case.
    pub fn matches_extension(self, ext: &OsStr) -> bool {
        ext.eq_ignore_ascii_case(self.extension())
    }

    pub(crate) fn image_format(self) -> image::ImageFormat {
        match self {
            Format::Pgm => image::ImageFormat::Pnm,
            Format::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pgm => write!(f, "PGM"),
            Format::Png => write!(f, "PNG"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_ignores_case() {
        let matches = |ext: &str| Format::Pgm.matches_extension(OsStr::new(ext));
        assert!(matches("pgm"));
        assert!(matches("PGM"));
        assert!(matches("Pgm"));
        assert!(!matches("png"));
        assert!(!matches("pgm2"));
    }

    #[test]
    fn display_uses_uppercase_names() {
        assert_eq!(Format::Pgm.to_string(), "PGM");
        assert_eq!(Format::Png.to_string(), "PNG");
    }
}
