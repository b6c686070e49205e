mod app;
mod cli;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    logging::initialize(cli.log, cli.verbose);
    app::run(cli)
}
