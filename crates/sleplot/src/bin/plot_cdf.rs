//! Main entry point for `plot-cdf`.

use clap::Parser;
use sleplot::{cdf, finish, setup_logging, CdfArgs};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = CdfArgs::parse();
    let result = args.resolve_config().and_then(|config| {
        setup_logging(&config);
        debug!(?args, "starting plot-cdf");
        cdf::run(&args.file, &config)
    });
    finish(result)
}
