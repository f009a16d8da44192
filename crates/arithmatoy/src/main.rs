use std::{env, io};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arithmatoy::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter(directives.as_deref())?)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}
