use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use letter_stats::{args::Args, config::Config, logging};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.sink);

    let config = Config::try_from(args)?;
    letter_stats::app::run(&config)?;
    Ok(())
}
