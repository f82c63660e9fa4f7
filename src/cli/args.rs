//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Index generated html dashboards into a json manifest
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: dashdex.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands (default: index)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scan the assets root and write the manifest
    #[command(visible_alias = "i")]
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },
}

/// Index command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Print the manifest to stdout instead of writing the file
    #[arg(long)]
    pub dry: bool,

    /// Skip unreadable directories instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,
}

impl Cli {
    /// Arguments of the index run; a bare invocation uses the defaults.
    pub fn index_args(&self) -> IndexArgs {
        match &self.command {
            Some(Commands::Index { args }) => args.clone(),
            None => IndexArgs::default(),
        }
    }
}
