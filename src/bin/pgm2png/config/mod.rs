use std::path::PathBuf;

use pgm2png::{ConvertConfig, Transform, TransformError, transform};

use crate::cli::{IoOptions, TransformArgs};

pub fn build_convert_config(opts: &IoOptions) -> ConvertConfig {
    ConvertConfig::new(&opts.input_dir).with_output_dir(&opts.output_dir)
}

/// A validated `transform` invocation.
pub struct TransformJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub transform: Transform,
}

pub fn build_transform_job(args: &TransformArgs) -> Result<TransformJob, TransformError> {
    let transform = Transform::new(args.rotation, args.scale)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| transform::default_output(&args.input));

    Ok(TransformJob {
        input: args.input.clone(),
        output,
        transform,
    })
}
