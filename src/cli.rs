use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// archlab - validate domain models and generate their source
#[derive(Parser, Debug)]
#[command(name = "archlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events (for CI and tooling)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the user and project files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a snapshot and report findings
    Check {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Generate source files for every node
    Generate {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Output directory (default from config: `generated`)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,

        /// Write nothing when findings reach the configured `fail_on` severity
        #[arg(long)]
        strict: bool,
    },

    /// Show differences between generated code and the output directory
    Diff {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Output directory (default from config: `generated`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print one generated file
    Show {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Generated path, e.g. /Domain/ValueObjects/Money.cs
        path: String,
    },

    /// Summarize nodes and relationships
    Inspect {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Regenerate whenever the snapshot changes
    Watch {
        /// Graph snapshot (JSON)
        snapshot: PathBuf,

        /// Output directory (default from config: `generated`)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the starter ride-sharing snapshot
    Starter {
        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Manage named projects in the local store
    Project {
        #[command(subcommand)]
        action: ProjectCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// Save a snapshot under a name
    Save {
        name: String,
        /// Graph snapshot (JSON)
        snapshot: PathBuf,
    },

    /// Load a stored project
    Load {
        name: String,
        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List stored projects
    List,

    /// Delete a stored project
    Delete {
        name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
