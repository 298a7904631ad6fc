use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

const WIDTH: usize = 72;

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    for line in render_error(err) {
        let _ = writeln!(stderr, "{line}");
    }
    let _ = writeln!(stderr);
}

/// Lays out `err` as a gutter block: the headline, then each cause
/// numbered once in chain order, then any hints.
fn render_error(err: &Error) -> Vec<String> {
    let mut lines = Vec::new();

    let mut headline = wrap(&err.to_string(), WIDTH).into_iter();
    if let Some(first) = headline.next() {
        lines.push(format!(" ✗ {first}"));
    }
    lines.extend(headline.map(|l| format!(" │ {l}")));

    let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
    if !causes.is_empty() {
        lines.push(" │".to_string());
        lines.push(" │ caused by:".to_string());
        for (i, cause) in causes.iter().enumerate() {
            push_item(&mut lines, &format!("{}.", i + 1), cause);
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        lines.push(" │".to_string());
        lines.push(" │ try:".to_string());
        for hint in &hints {
            push_item(&mut lines, "-", hint);
        }
    }

    lines.push(" └─".to_string());
    lines
}

fn push_item(lines: &mut Vec<String>, marker: &str, text: &str) {
    let indent = " ".repeat(marker.chars().count());
    for (i, line) in wrap(text, WIDTH - 4 - marker.len()).into_iter().enumerate() {
        let lead = if i == 0 { marker } else { indent.as_str() };
        lines.push(format!(" │   {lead} {line}"));
    }
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_convert_hints(err);
        collector.collect_transform_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_convert_hints(&mut self, err: &Error) {
        use pgm2png::ConvertError;

        let Some(convert_err) = err.downcast_ref::<ConvertError>() else {
            return;
        };

        self.mark_typed();
        self.add_convert_hints(convert_err);
    }

    fn add_convert_hints(&mut self, convert_err: &pgm2png::ConvertError) {
        use pgm2png::ConvertError;

        match convert_err {
            ConvertError::MissingCapability { format, operation } => {
                self.add(format!(
                    "This build of pgm2png cannot {} {} images",
                    operation, format
                ));
                self.add(format!(
                    "Rebuild with the `{}` feature of the `image` crate enabled",
                    image_feature(*format)
                ));
                self.add("e.g. image = { version = \"0.25\", features = [\"pnm\", \"png\"] }");
            }

            ConvertError::ReadDir { source, .. } => {
                self.add("Could not list the input directory");
                self.collect_std_io_hints(source);
            }

            ConvertError::CreateOutputDir { source, .. } => {
                self.add("Could not create the output directory");
                self.collect_std_io_hints(source);
                self.add("Choose another location with -o/--output-dir");
            }
        }
    }

    fn collect_transform_hints(&mut self, err: &Error) {
        use pgm2png::TransformError;
        use pgm2png::io::Error as FileError;

        let Some(transform_err) = err.downcast_ref::<TransformError>() else {
            return;
        };

        self.mark_typed();

        match transform_err {
            TransformError::InvalidScale(_) => {
                self.add("The scale factor must be greater than zero");
                self.add("e.g. --scale 0.5 halves the image, --scale 2 doubles it");
            }

            TransformError::InvalidRotation(_) => {
                self.add("Give the rotation in degrees, e.g. --rotation 90");
            }

            TransformError::CanvasTooLarge { .. } => {
                self.add("The scaled image would not fit in memory");
                self.add("Use a smaller --scale");
            }

            TransformError::Unsupported(convert_err) => self.add_convert_hints(convert_err),

            TransformError::Io(FileError::Io { source, .. }) => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    self.add("File not found");
                    self.add("Check the --input path, or the directory of --output");
                }
                std::io::ErrorKind::PermissionDenied => {
                    self.add("Permission denied accessing the file");
                    self.add("Check permissions with `ls -la`");
                }
                _ => self.add("Check the path, permissions, and disk space"),
            },

            TransformError::Io(FileError::Decode { .. }) => {
                self.add("The input is not a readable PGM image");
                self.add("Only P2 (ASCII) and P5 (binary) graymaps are supported");
            }

            TransformError::Io(FileError::Encode { .. }) => {
                self.add("The result could not be encoded as PGM");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("Directory not found");
                self.add("Check the path spelling and ensure the directory exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the directory");
                self.add("Check permissions with `ls -la`");
            }

            ErrorKind::AlreadyExists => {
                self.add("A file with the same name is in the way");
                self.add("Remove or rename it, or pick a different output directory");
            }

            ErrorKind::NotADirectory => {
                self.add("The path names a file, not a directory");
            }

            ErrorKind::StorageFull => {
                self.add("No space left on device");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check the path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the path is correct");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn image_feature(format: pgm2png::Format) -> &'static str {
    match format {
        pgm2png::Format::Pgm => "pnm",
        pgm2png::Format::Png => "png",
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
