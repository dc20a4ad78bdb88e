// src/bin/cli.rs
use clap::Parser;
use job_tracker::cli::{self, Cli};
use job_tracker::logging::{self, Sink};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init(Sink::Stderr);

    let args = Cli::parse();
    cli::run(args)?;
    Ok(())
}
