use std::path::{Path, PathBuf};

use super::Format;
use thiserror::Error;

/// Failure to convert a single file.
///
/// These never abort a batch: each one is captured in the
/// [`Outcome`](crate::Outcome) of the file that produced it.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation on '{}' failed", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {format} image")]
    Decode {
        path: PathBuf,
        format: Format,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {format} image")]
    Encode {
        path: PathBuf,
        format: Format,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, format: Format, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            format,
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, format: Format, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            format,
            source,
        }
    }

    /// The file the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            Error::Io { path, .. } | Error::Decode { path, .. } | Error::Encode { path, .. } => {
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn message_leaves_the_cause_to_source() {
        let err = Error::io(
            "a.pgm",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "I/O operation on 'a.pgm' failed");
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }
}
