use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Format;

/// Destination for `input` inside `output_dir`: same stem, `format`'s
/// extension. Only the last extension is replaced, so `a.b.pgm` becomes
/// `a.b.png`.
pub fn output_path(input: &Path, output_dir: &Path, format: Format) -> PathBuf {
    output_dir.join(file_name_with(input, "", format))
}

/// Sibling of `input` with `suffix` appended to the stem and `format`'s
/// extension, e.g. `scans/lena.pgm` → `scans/lena_transformed.pgm`.
pub fn suffixed_path(input: &Path, suffix: &str, format: Format) -> PathBuf {
    input.with_file_name(file_name_with(input, suffix, format))
}

// Works on the raw OsStr so non-UTF-8 stems survive unchanged.
fn file_name_with(input: &Path, suffix: &str, format: Format) -> OsString {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    name.push(".");
    name.push(format.extension());
    name
}

/// Creates `dir` and any missing parents. An existing directory is fine.
pub fn prepare_output_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}
