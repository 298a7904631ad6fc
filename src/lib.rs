//! Batch conversion of PGM (Portable GrayMap) images to PNG, plus a
//! single-image rotate-and-scale transform.
//!
//! The crate scans one directory for `.pgm` files, decodes each with the
//! [`image`] backend, and writes a PNG with the same stem into an output
//! subdirectory (`png_outputs` by default). A file that fails to convert is
//! reported and skipped; it never stops the rest of the batch.
//!
//! # Features
//!
//! - **Capability probe** — [`Capabilities`] checks that the linked image
//!   backend can read PGM and write PNG before any file is touched
//! - **Discovery** — non-recursive, case-insensitive extension match,
//!   hidden files skipped, deterministic ordering
//! - **Per-file results** — every input yields an [`Outcome`] holding
//!   either the written path or the [`io::Error`] explaining the failure
//! - **Summary** — [`Summary`] folds the outcomes into counts for reporting
//! - **Transform** — [`Transform`] rotates and scales one grayscale image
//!   about its center onto a canvas that fits the result
//!
//! # Quick Start
//!
//! ```no_run
//! use pgm2png::{Capabilities, ConvertConfig, ConvertError, convert_batch};
//!
//! let config = ConvertConfig::new("scans");
//! let summary = convert_batch(&config, &Capabilities::detect())?;
//!
//! println!(
//!     "converted {} of {} into {}",
//!     summary.converted(),
//!     summary.total(),
//!     summary.output_dir().display()
//! );
//! for failure in summary.failures() {
//!     if let Err(err) = &failure.result {
//!         eprintln!("{}: {err}", failure.input_name());
//!     }
//! }
//! # Ok::<(), ConvertError>(())
//! ```
//!
//! For progress reporting while the batch runs, use [`Batch`] directly and
//! pass a callback to [`Batch::run`].
//!
//! # Module Organization
//!
//! - [`io`] — Discovery, output naming, image read/write, per-file errors
//! - [`convert_batch`] / [`Batch`] — The conversion run
//! - [`transform`] — Rotation and scaling of a single PGM file

mod convert;

pub mod io;
pub mod transform;

pub use convert::{
    Batch, Capabilities, ConvertConfig, DEFAULT_OUTPUT_DIR, Operation, Outcome, SOURCE_FORMAT,
    Summary, TARGET_FORMAT, convert_batch, convert_file,
};

pub use convert::Error as ConvertError;
pub use io::Format;
pub use transform::Error as TransformError;
pub use transform::{Transform, transform_file};
