use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Format;

/// Lists the files directly inside `dir` whose extension names `format`.
///
/// Only regular files are returned (symlinks are followed). Hidden
/// entries are skipped, as a shell `*.pgm` glob would skip them. The
/// result is sorted by path.
pub fn discover(dir: &Path, format: Format) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !is_candidate(&path, format) {
            continue;
        }

        if path.is_file() {
            found.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
        }
    }

    found.sort();
    Ok(found)
}

// Names are compared as raw OsStr bytes so non-UTF-8 file names still match.
fn is_candidate(path: &Path, format: Format) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    if name.as_encoded_bytes().starts_with(b".") {
        return false;
    }

    path.extension()
        .is_some_and(|ext| format.matches_extension(ext))
}
