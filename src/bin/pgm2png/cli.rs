use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use pgm2png::DEFAULT_OUTPUT_DIR;
use pgm2png::transform::{DEFAULT_ROTATION, DEFAULT_SCALE};

#[derive(Parser)]
#[command(
    name = "pgm2png",
    about = "Batch-convert PGM images to PNG",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    // No command converts every .pgm file in DIR to PNG.
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub log: LogOptions,
}

#[derive(Subcommand)]
pub enum Command {
    /// Rotate and scale a single PGM image about its center
    Transform(TransformArgs),
}

/// Input and output locations.
#[derive(Args)]
pub struct IoOptions {
    /// Directory to scan for .pgm files
    #[arg(value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Output directory, relative to DIR unless absolute
    #[arg(
        short,
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR
    )]
    pub output_dir: PathBuf,

    /// Suppress the banner and progress bar (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments of `pgm2png transform`.
#[derive(Args)]
pub struct TransformArgs {
    /// PGM image to transform
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output PGM file [default: <stem>_transformed.pgm next to the input]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rotation angle in degrees
    #[arg(
        long,
        value_name = "DEG",
        default_value_t = DEFAULT_ROTATION,
        allow_hyphen_values = true
    )]
    pub rotation: f64,

    /// Scaling factor
    #[arg(long, value_name = "FACTOR", default_value_t = DEFAULT_SCALE)]
    pub scale: f64,
}

/// Diagnostic logging.
#[derive(Args)]
#[command(next_help_heading = "Logging")]
pub struct LogOptions {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["pgm2png"]).unwrap();
        assert_eq!(cli.io.input_dir, PathBuf::from("."));
        assert_eq!(cli.io.output_dir, PathBuf::from("png_outputs"));
        assert!(!cli.io.quiet);
        assert_eq!(cli.log.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn accepts_directory_and_flags() {
        let cli =
            Cli::try_parse_from(["pgm2png", "scans", "-o", "/tmp/png", "-q", "-vv"]).unwrap();
        assert_eq!(cli.io.input_dir, PathBuf::from("scans"));
        assert_eq!(cli.io.output_dir, PathBuf::from("/tmp/png"));
        assert!(cli.io.quiet);
        assert_eq!(cli.log.verbose, 2);
    }

    #[test]
    fn transform_uses_default_parameters() {
        let cli = Cli::try_parse_from(["pgm2png", "transform", "-i", "lena.pgm"]).unwrap();
        let Some(Command::Transform(args)) = cli.command else {
            panic!("expected transform command");
        };
        assert_eq!(args.input, PathBuf::from("lena.pgm"));
        assert_eq!(args.output, None);
        assert_eq!(args.rotation, 45.0);
        assert_eq!(args.scale, 1.0);
    }

    #[test]
    fn transform_accepts_negative_rotation_and_global_flags() {
        let cli = Cli::try_parse_from([
            "pgm2png",
            "transform",
            "--input",
            "lena.pgm",
            "-o",
            "out.pgm",
            "--rotation",
            "-30",
            "--scale",
            "0.5",
            "-q",
            "-v",
        ])
        .unwrap();
        assert!(cli.io.quiet);
        assert_eq!(cli.log.verbose, 1);

        let Some(Command::Transform(args)) = cli.command else {
            panic!("expected transform command");
        };
        assert_eq!(args.output, Some(PathBuf::from("out.pgm")));
        assert_eq!(args.rotation, -30.0);
        assert_eq!(args.scale, 0.5);
    }

    #[test]
    fn transform_requires_an_input() {
        assert!(Cli::try_parse_from(["pgm2png", "transform"]).is_err());
    }
}
