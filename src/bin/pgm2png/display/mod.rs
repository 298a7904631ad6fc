mod banner;
mod error;
mod progress;
mod report;
mod transform;

use std::io::{self, IsTerminal};

pub use banner::{banner_for_help, print_banner, print_transform_banner};
pub use error::print_error;
pub use progress::Progress;
pub use report::{print_found, print_no_files, print_summary, render_outcome};
pub use transform::{print_parameters, print_transformed};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Progress bar on stderr.
    pub interactive: bool,
    /// Banner on stdout.
    pub banner: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
            banner: true,
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                interactive: false,
                banner: false,
            }
        } else {
            self
        }
    }
}
