//! `dotlink` binary: parse flags, set up logging, run the linker.
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dotlink::cli::Cli;
use dotlink::config::Settings;
use dotlink::linker::Linker;
use dotlink::logging::{self, Logger};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "dotlink aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let settings = Settings::resolve(&args.dotfiles, args.dry_run)?;
    Linker::from_settings(&settings).run(&Logger::new())?;
    Ok(())
}
