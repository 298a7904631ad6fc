//! Error types for batch conversion.
//!
//! Everything here is fatal for a run. Failures tied to a single input
//! file are [`io::Error`](crate::io::Error) values carried in that file's
//! [`Outcome`](super::Outcome) instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::io::Format;

/// What a missing backend capability would have been used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Decode,
    Encode,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Decode => write!(f, "decode"),
            Operation::Encode => write!(f, "encode"),
        }
    }
}

/// Errors that stop a conversion run before or between files.
#[derive(Debug, Error)]
pub enum Error {
    /// The image backend was built without support for a required format.
    ///
    /// Raised by [`Capabilities::ensure`](super::Capabilities::ensure)
    /// before any file is read or written.
    #[error("image backend cannot {operation} {format} images")]
    MissingCapability {
        /// The format lacking support.
        format: Format,
        /// Whether reading or writing was unavailable.
        operation: Operation,
    },

    /// The input directory could not be listed.
    #[error("failed to read input directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory '{}'", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn missing_capability(format: Format, operation: Operation) -> Self {
        Self::MissingCapability { format, operation }
    }
}
