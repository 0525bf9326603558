//! archlab CLI - domain-model compiler
//!
//! Usage: archlab [--json] [--color WHEN] [-v...] [--config PATH] <COMMAND>
//!
//! Commands:
//!   check     Validate a snapshot and report findings
//!   generate  Write generated source files
//!   diff      Compare generated files with the output directory
//!   show      Print one generated file
//!   inspect   Summarize nodes and relationships
//!   watch     Regenerate whenever the snapshot changes
//!   starter   Write the starter snapshot
//!   project   Manage named projects

mod cli;
mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let session = Session::load(&cli)?;

    match cli.command {
        Commands::Check { snapshot } => commands::check::cmd_check(&session, &snapshot),
        Commands::Generate {
            snapshot,
            out,
            dry_run,
            strict,
        } => commands::generate::cmd_generate(&session, &snapshot, out, dry_run, strict),
        Commands::Diff { snapshot, out } => commands::diff::cmd_diff(&session, &snapshot, out),
        Commands::Show { snapshot, path } => commands::show::cmd_show(&session, &snapshot, &path),
        Commands::Inspect { snapshot } => commands::inspect::cmd_inspect(&session, &snapshot),
        Commands::Watch { snapshot, out } => commands::watch::cmd_watch(&session, &snapshot, out),
        Commands::Starter { out } => commands::starter::cmd_starter(&session, out),
        Commands::Project { action } => commands::project::cmd_project(&session, action),
    }
}
