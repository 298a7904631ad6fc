use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::io;

/// Result of converting one input file.
#[derive(Debug)]
pub struct Outcome {
    /// The source file.
    pub input: PathBuf,
    /// The written output path, or why nothing was written.
    pub result: Result<PathBuf, io::Error>,
}

impl Outcome {
    pub fn is_converted(&self) -> bool {
        self.result.is_ok()
    }

    /// File name of the input, for display.
    pub fn input_name(&self) -> Cow<'_, str> {
        file_name(&self.input)
    }

    /// File name of the output, if one was written.
    pub fn output_name(&self) -> Option<Cow<'_, str>> {
        self.result.as_ref().ok().map(|p| file_name(p))
    }
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}

/// Aggregate of a finished run, in discovery order.
#[derive(Debug)]
pub struct Summary {
    output_dir: PathBuf,
    outcomes: Vec<Outcome>,
}

impl Summary {
    pub(crate) fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of files discovered.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files written successfully.
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_converted())
    }

    pub fn is_complete(&self) -> bool {
        self.converted() == self.total()
    }
}
