//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Organization chart from flat employee records
#[derive(Parser, Debug)]
#[command(name = "orgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Local config file (default: ./.orgtree.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show department hierarchy as tree
    Tree {
        /// JSON record file (array of objects)
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List departments with member counts
    Departments {
        /// JSON record file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show one department's staff and contractors in rank order
    Members {
        /// JSON record file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Department name
        dept: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a config template
    Init,

    /// Show config paths
    Path,
}
