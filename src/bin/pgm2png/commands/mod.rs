mod convert;
mod transform;

use convert::run_convert;
use transform::run_transform;

use anyhow::Result;

use crate::cli::{Command, IoOptions};
use crate::display::Context;

pub fn dispatch(command: Option<Command>, io: &IoOptions, ctx: Context) -> Result<()> {
    match command {
        None => run_convert(io, ctx),
        Some(Command::Transform(args)) => run_transform(&args, ctx),
    }
}
