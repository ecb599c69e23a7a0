use std::path::PathBuf;

use clap::Parser;

/// Stardust: the animated spiral-galaxy backdrop of the under-construction page.
#[derive(Parser, Debug)]
#[command(name = "stardust", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `stardust=debug` or `debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Seed the galaxy generator for a reproducible layout.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    Args::parse()
}
