use std::path::{Path, PathBuf};

/// Name of the subdirectory that receives converted files by default.
pub const DEFAULT_OUTPUT_DIR: &str = "png_outputs";

/// Where a batch reads from and writes to.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pgm2png::ConvertConfig;
///
/// let config = ConvertConfig::new("/scans");
/// assert_eq!(config.output_dir(), Path::new("/scans/png_outputs"));
///
/// // An absolute output directory is used as-is.
/// let config = ConvertConfig::new("/scans").with_output_dir("/tmp/png");
/// assert_eq!(config.output_dir(), Path::new("/tmp/png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Directory scanned (non-recursively) for source files.
    pub input_dir: PathBuf,

    /// Output directory, resolved against [`input_dir`](Self::input_dir)
    /// when relative.
    pub output_dir: PathBuf,
}

impl ConvertConfig {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// The directory outputs are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.input_dir.join(&self.output_dir)
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
