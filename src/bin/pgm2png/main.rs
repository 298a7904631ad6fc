use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod logging;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    logging::init(cli.log.verbose);

    let ctx = display::Context::detect().with_quiet(cli.io.quiet);

    match commands::dispatch(cli.command, &cli.io, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
