use super::error::{Error, Operation};
use super::{SOURCE_FORMAT, TARGET_FORMAT};
use crate::io::Format;

/// What the linked image backend can do.
///
/// [`detect`](Self::detect) asks the backend; tests and embedders may
/// construct the value directly to model a reduced build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub decode_pgm: bool,
    pub decode_png: bool,
    pub encode_pgm: bool,
    pub encode_png: bool,
}

impl Capabilities {
    /// Asks the `image` crate which codecs are compiled into this build.
    pub fn detect() -> Self {
        let pnm = Format::Pgm.image_format();
        let png = Format::Png.image_format();
        Self {
            decode_pgm: pnm.reading_enabled(),
            decode_png: png.reading_enabled(),
            encode_pgm: pnm.writing_enabled(),
            encode_png: png.writing_enabled(),
        }
    }

    pub fn supports(&self, format: Format, operation: Operation) -> bool {
        match (format, operation) {
            (Format::Pgm, Operation::Decode) => self.decode_pgm,
            (Format::Png, Operation::Decode) => self.decode_png,
            (Format::Pgm, Operation::Encode) => self.encode_pgm,
            (Format::Png, Operation::Encode) => self.encode_png,
        }
    }

    /// Fails with [`Error::MissingCapability`] unless `format` can be
    /// handled for `operation`.
    pub fn require(&self, format: Format, operation: Operation) -> Result<(), Error> {
        if self.supports(format, operation) {
            Ok(())
        } else {
            Err(Error::missing_capability(format, operation))
        }
    }

    /// Checks the codecs a batch conversion needs, decoder first.
    pub fn ensure(&self) -> Result<(), Error> {
        self.require(SOURCE_FORMAT, Operation::Decode)?;
        self.require(TARGET_FORMAT, Operation::Encode)
    }
}
