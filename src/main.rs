//! Dashdex - index generated html dashboards into a json manifest.

mod cli;
mod config;
mod index;
mod logger;
mod manifest;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::IndexerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IndexerConfig::load(&cli)?;
    match &config.config_path {
        Some(path) => debug!("config"; "using {}", path.display()),
        None => debug!("config"; "base directory {}", config.get_root().display()),
    }

    cli::index::run_index(&config, &cli.index_args(), &mut std::io::stdout()).map(|_| ())
}
