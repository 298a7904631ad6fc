//! Batch conversion of PGM files to PNG.
//!
//! A run is split into the same phases the command line reports:
//!
//! 1. [`Capabilities::ensure`] checks the image backend before any I/O.
//! 2. [`Batch::discover`] lists the source files.
//! 3. [`Batch::run`] creates the output directory and converts each file,
//!    recording one [`Outcome`] per input in a [`Summary`].
//!
//! [`convert_batch`] chains all three for callers that only want the
//! summary.

mod capability;
mod config;
mod error;
mod report;

pub use capability::Capabilities;
pub use config::{ConvertConfig, DEFAULT_OUTPUT_DIR};
pub use error::{Error, Operation};
pub use report::{Outcome, Summary};

use std::path::{Path, PathBuf};

use crate::io::{self, Format};

/// Format files are read as.
pub const SOURCE_FORMAT: Format = Format::Pgm;

/// Format files are written as.
pub const TARGET_FORMAT: Format = Format::Png;

/// Converts a single file into `output_dir`, returning the written path.
///
/// The output keeps the input's stem. An existing file at that path is
/// replaced.
pub fn convert_file(input: &Path, output_dir: &Path) -> Result<PathBuf, io::Error> {
    let output = io::output_path(input, output_dir, TARGET_FORMAT);

    let image = io::read_image(input, SOURCE_FORMAT)?;
    tracing::debug!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );

    io::write_image(&image, &output, TARGET_FORMAT)?;
    Ok(output)
}

/// Source files found for one run, ready to convert.
#[derive(Debug)]
pub struct Batch {
    inputs: Vec<PathBuf>,
    output_dir: PathBuf,
}

impl Batch {
    /// Checks `caps` and lists the source files under `config`.
    ///
    /// Nothing is written. A missing capability fails before the input
    /// directory is even read.
    pub fn discover(config: &ConvertConfig, caps: &Capabilities) -> Result<Self, Error> {
        caps.ensure()?;

        let inputs =
            io::discover(config.input_dir(), SOURCE_FORMAT).map_err(|source| Error::ReadDir {
                path: config.input_dir().to_path_buf(),
                source,
            })?;

        tracing::info!(
            dir = %config.input_dir().display(),
            count = inputs.len(),
            "discovered {} files",
            SOURCE_FORMAT
        );

        Ok(Self {
            inputs,
            output_dir: config.output_dir(),
        })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Converts every input in order, calling `on_outcome` after each.
    ///
    /// Per-file failures are recorded and the loop moves on; only failing
    /// to create the output directory aborts. An empty batch returns an
    /// empty summary without touching the filesystem.
    pub fn run(self, mut on_outcome: impl FnMut(&Outcome)) -> Result<Summary, Error> {
        let mut summary = Summary::new(self.output_dir.clone());

        if self.inputs.is_empty() {
            return Ok(summary);
        }

        io::prepare_output_dir(&self.output_dir).map_err(|source| Error::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        for input in self.inputs {
            let result = convert_file(&input, &self.output_dir);

            if let Err(err) = &result {
                tracing::debug!(input = %input.display(), error = %err, "conversion failed");
            }

            let outcome = Outcome { input, result };
            on_outcome(&outcome);
            summary.push(outcome);
        }

        tracing::info!(
            converted = summary.converted(),
            total = summary.total(),
            "batch finished"
        );

        Ok(summary)
    }
}

/// Discovers and converts everything described by `config`.
///
/// # Errors
///
/// Returns an [`Error`] for failures that stop the whole run. Failures of
/// individual files are reported through [`Summary::failures`].
pub fn convert_batch(config: &ConvertConfig, caps: &Capabilities) -> Result<Summary, Error> {
    Batch::discover(config, caps)?.run(|_| {})
}
