use anyhow::{Context, Result};

use pgm2png::{Capabilities, transform_file};

use crate::cli::TransformArgs;
use crate::config::build_transform_job;
use crate::display::{
    Context as DisplayContext, print_parameters, print_transform_banner, print_transformed,
};

pub fn run_transform(args: &TransformArgs, ctx: DisplayContext) -> Result<()> {
    if ctx.banner {
        print_transform_banner();
    }

    let job = build_transform_job(args).context("Invalid transform parameters")?;
    print_parameters(&job.input, &job.transform);

    let done = transform_file(
        &job.input,
        &job.output,
        &job.transform,
        &Capabilities::detect(),
    )
    .with_context(|| format!("Cannot transform '{}'", job.input.display()))?;

    print_transformed(&done, &job.transform);
    Ok(())
}
