//! Main entry point for `plot-xy`.

use clap::Parser;
use sleplot::{finish, setup_logging, xy, XyArgs};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = XyArgs::parse();
    let result = args.resolve_config().and_then(|config| {
        setup_logging(&config);
        debug!(?args, "starting plot-xy");
        xy::run(&args.files, &config)
    });
    finish(result)
}
