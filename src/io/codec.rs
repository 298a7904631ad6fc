use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, ImageReader};

use super::{Error, Format};

/// Decodes the file at `path` as `format`, regardless of its extension.
///
/// The file handle lives only for the duration of this call.
pub fn read_image(path: &Path, format: Format) -> Result<DynamicImage, Error> {
    let mut reader = ImageReader::open(path).map_err(|e| Error::io(path, e))?;
    reader.set_format(format.image_format());
    reader.decode().map_err(|e| Error::decode(path, format, e))
}

/// Encodes `image` as `format` and writes it to `path`, replacing any
/// existing file.
///
/// PGM output is always 8-bit binary (`P5`); other color types are
/// reduced to grayscale first. Encoding happens in memory, so an encoder
/// failure never leaves a truncated file behind.
pub fn write_image(image: &DynamicImage, path: &Path, format: Format) -> Result<(), Error> {
    let bytes = match format {
        Format::Pgm => encode_pgm(image),
        Format::Png => encode_with_backend(image, format),
    }
    .map_err(|e| Error::encode(path, format, e))?;

    fs::write(path, bytes).map_err(|e| Error::io(path, e))
}

fn encode_pgm(image: &DynamicImage) -> Result<Vec<u8>, ImageError> {
    let gray = image.to_luma8();
    let mut buf = Vec::new();
    PnmEncoder::new(&mut buf)
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
        .write_image(gray.as_raw(), gray.width(), gray.height(), ExtendedColorType::L8)?;
    Ok(buf)
}

fn encode_with_backend(image: &DynamicImage, format: Format) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format.image_format())?;
    Ok(buf.into_inner())
}
