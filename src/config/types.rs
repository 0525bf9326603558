//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Severity;
use crate::error::ArchlabResult;

use super::loader::{self, ConfigWarning};

/// `[generate]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Where `generate`, `diff` and `watch` put files
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Lowest finding severity that fails `check` (and `generate --strict`)
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,

    /// Leave files whose content is already current untouched
    #[serde(default = "default_true")]
    pub skip_unchanged: bool,

    /// Emitter to use, by language or file extension
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            fail_on: default_fail_on(),
            skip_unchanged: true,
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "csharp".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_fail_on() -> Severity {
    Severity::Error
}

fn default_true() -> bool {
    true
}

/// `[store]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Project store directory (default `~/.archlab/projects`)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Detail level for progress sinks: 0 shows failures only
    pub fn level(&self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 3,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArchlabResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArchlabResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Layer user config, project config (or `explicit`) and env overrides
    pub fn load_layered(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> ArchlabResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(project_root, explicit)
    }

    /// Apply environment variable overrides (ARCHLAB_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
