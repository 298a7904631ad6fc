use std::fs;
use std::io::{self, Write};
use std::path::Path;

use pgm2png::{Outcome, SOURCE_FORMAT, Summary, TARGET_FORMAT};

pub fn print_no_files(dir: &Path) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "No .{} files found in {}",
        SOURCE_FORMAT.extension(),
        dir.display()
    );
}

pub fn print_found(count: usize) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "Found {} .{} file(s) to convert:",
        count,
        SOURCE_FORMAT.extension()
    );
}

/// One status line for `outcome`. `output_label` is how the output
/// directory is shown in front of the file name.
pub fn render_outcome(outcome: &Outcome, output_label: &Path) -> String {
    match &outcome.result {
        Ok(output) => {
            let name = output
                .file_name()
                .map(Path::new)
                .unwrap_or(output.as_path());
            format!(
                "  ✓ Converted: {} → {}",
                outcome.input_name(),
                output_label.join(name).display()
            )
        }
        Err(err) => format!(
            "  ✗ Error converting {}: {}",
            outcome.input_name(),
            chain_line(err)
        ),
    }
}

// `outer: cause: root cause`, so one line still says why a file failed.
fn chain_line(err: &dyn std::error::Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

pub fn print_summary(summary: &Summary) {
    let saved_in = fs::canonicalize(summary.output_dir())
        .unwrap_or_else(|_| summary.output_dir().to_path_buf());

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout);
    let _ = writeln!(
        stdout,
        "Conversion complete! Successfully converted {} out of {} files.",
        summary.converted(),
        summary.total()
    );
    let _ = writeln!(
        stdout,
        "{} files saved in: {}",
        TARGET_FORMAT,
        saved_in.display()
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn converted_line_names_source_and_destination() {
        let outcome = Outcome {
            input: PathBuf::from("/data/scan-01.pgm"),
            result: Ok(PathBuf::from("/data/png_outputs/scan-01.png")),
        };

        assert_eq!(
            render_outcome(&outcome, Path::new("png_outputs")),
            "  ✓ Converted: scan-01.pgm → png_outputs/scan-01.png"
        );
    }

    #[test]
    fn failed_line_names_file_and_reason() {
        let outcome = Outcome {
            input: PathBuf::from("/data/bad.pgm"),
            result: Err(pgm2png::io::Error::io(
                "/data/bad.pgm",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            )),
        };

        let line = render_outcome(&outcome, Path::new("png_outputs"));
        assert_eq!(
            line,
            "  ✗ Error converting bad.pgm: I/O operation on '/data/bad.pgm' failed: denied"
        );
    }
}
