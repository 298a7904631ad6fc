use std::io::{self, Write};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

fn print_line(line: &str) {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{line}");
}

pub struct FileBar {
    bar: ProgressBar,
    start: Instant,
}

impl FileBar {
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:32.cyan/blue}] {pos}/{len}")
                .expect("invalid template")
                .progress_chars("━╸ ")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            start: Instant::now(),
        }
    }

    /// Prints `line` to stdout without tearing the bar, then advances it.
    pub fn report(&mut self, line: &str) {
        self.bar.suspend(|| print_line(line));
        self.bar.inc(1);
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();

        let mut stderr = io::stderr().lock();
        let _ = writeln!(
            stderr,
            "  \x1b[2m·\x1b[0m {} file(s) in {:.2}s",
            self.bar.position(),
            self.start.elapsed().as_secs_f64()
        );
    }
}

pub struct PlainProgress {}

impl PlainProgress {
    pub fn new() -> Self {
        Self {}
    }

    pub fn report(&mut self, line: &str) {
        print_line(line);
    }
}

impl Default for PlainProgress {
    fn default() -> Self {
        Self::new()
    }
}

pub enum Progress {
    Interactive(FileBar),
    Plain(PlainProgress),
}

impl Progress {
    pub fn new(interactive: bool, total: usize) -> Self {
        if interactive {
            Self::Interactive(FileBar::new(total))
        } else {
            Self::Plain(PlainProgress::new())
        }
    }

    pub fn report(&mut self, line: &str) {
        match self {
            Self::Interactive(b) => b.report(line),
            Self::Plain(p) => p.report(line),
        }
    }

    pub fn finish(self) {
        match self {
            Self::Interactive(b) => b.finish(),
            Self::Plain(_) => {}
        }
    }
}
