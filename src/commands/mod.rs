//! Command handlers
//!
//! Each handler returns the process exit code; errors bubble up to `main`
//! as `anyhow::Error` and are rendered there.

pub mod check;
pub mod diff;
pub mod generate;
pub mod inspect;
pub mod project;
pub mod show;
pub mod starter;
pub mod watch;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};

use archlab::config::Config;
use archlab::infrastructure::{all_emitters, get_emitter, ConsoleEventSink, JsonEventSink};
use archlab::{CompileEventSink, CompileService};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::output::render_config_warnings;

/// Resolved configuration and presentation settings for one invocation
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

impl Session {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, warnings) = Config::load_layered(&cwd, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

        if !ui.json && !warnings.is_empty() {
            eprint!("{}", render_config_warnings(&warnings, ui.unicode));
        }

        Ok(Self { config, ui })
    }

    /// Compile service for the configured language
    pub fn compiler(&self) -> Result<CompileService> {
        let language = &self.config.generate.language;
        match get_emitter(language) {
            Some(emitter) => Ok(CompileService::new(emitter)),
            None => {
                let known: Vec<&'static str> =
                    all_emitters().iter().map(|e| e.language()).collect();
                bail!(
                    "unknown language '{}' in [generate] config (available: {})",
                    language,
                    known.join(", ")
                )
            }
        }
    }

    /// `--out` flag, else the configured output directory
    pub fn out_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.config.generate.out_dir.clone())
    }

    /// NDJSON on stdout in `--json` mode, verbosity-gated lines on stderr otherwise
    pub fn compile_events(&self, command: &'static str) -> Arc<dyn CompileEventSink> {
        if self.ui.json {
            Arc::new(JsonEventSink::stdout(command))
        } else {
            Arc::new(ConsoleEventSink::stderr(self.ui.verbose))
        }
    }
}
