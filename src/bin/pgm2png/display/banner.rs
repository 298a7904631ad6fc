use std::io::{self, Write};
use std::sync::LazyLock;

use pgm2png::{SOURCE_FORMAT, TARGET_FORMAT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

static TITLE: LazyLock<String> =
    LazyLock::new(|| format!("=== {SOURCE_FORMAT} to {TARGET_FORMAT} Converter ==="));

static BANNER_FOR_HELP: LazyLock<String> = LazyLock::new(|| format!("{} v{VERSION}", *TITLE));

pub fn banner_for_help() -> &'static str {
    &BANNER_FOR_HELP
}

pub fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", *TITLE);
    let _ = writeln!(
        stdout,
        "Converting .{} files to .{} format...",
        SOURCE_FORMAT.extension(),
        TARGET_FORMAT.extension()
    );
    let _ = writeln!(stdout);
}

pub fn print_transform_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "=== {SOURCE_FORMAT} Rotate and Scale ===");
    let _ = writeln!(stdout);
}
