use anyhow::{Context, Result};

use pgm2png::{Batch, Capabilities};

use crate::cli::IoOptions;
use crate::config::build_convert_config;
use crate::display::{
    Context as DisplayContext, Progress, print_banner, print_found, print_no_files, print_summary,
    render_outcome,
};

pub fn run_convert(opts: &IoOptions, ctx: DisplayContext) -> Result<()> {
    if ctx.banner {
        print_banner();
    }

    let config = build_convert_config(opts);

    let batch = Batch::discover(&config, &Capabilities::detect())
        .context("Cannot start conversion")?;

    if batch.is_empty() {
        print_no_files(config.input_dir());
        return Ok(());
    }

    print_found(batch.len());

    let mut progress = Progress::new(ctx.interactive, batch.len());
    let result = batch.run(|outcome| progress.report(&render_outcome(outcome, &opts.output_dir)));
    progress.finish();
    let summary = result.context("Conversion aborted")?;

    print_summary(&summary);
    Ok(())
}
