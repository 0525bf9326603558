//! Configuration loading
//!
//! Each file is parsed on its own (so unknown keys are attributed to the file
//! they came from), then the tables are merged key by key with the project
//! file over the user file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Severity;
use crate::error::{ArchlabError, ArchlabResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "archlab.toml";

pub const ENV_OUT_DIR: &str = "ARCHLAB_OUT_DIR";
pub const ENV_STORE_DIR: &str = "ARCHLAB_STORE_DIR";
pub const ENV_FAIL_ON: &str = "ARCHLAB_FAIL_ON";
pub const ENV_VERBOSITY: &str = "ARCHLAB_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArchlabResult<(Config, Vec<ConfigWarning>)> {
    let (table, warnings) = read_layer(path)?;
    let config = from_table(table, path)?;
    Ok((config, warnings))
}

/// Load user + project (or explicit) config, then apply env overrides
pub fn load_layered(
    project_root: &Path,
    explicit: Option<&Path>,
) -> ArchlabResult<(Config, Vec<ConfigWarning>)> {
    let mut layers = Vec::new();
    match explicit {
        Some(path) => layers.push(path.to_path_buf()),
        None => {
            if let Some(user) = user_config_path() {
                layers.push(user);
            }
            layers.push(project_root.join(PROJECT_CONFIG_FILE));
        }
    }

    let mut merged = toml::Table::new();
    let mut warnings = Vec::new();
    let mut last_file = PathBuf::from(PROJECT_CONFIG_FILE);
    for path in layers {
        // An explicit --config must exist; discovered files are optional
        if explicit.is_none() && !path.exists() {
            continue;
        }
        let (table, layer_warnings) = read_layer(&path)?;
        merge_tables(&mut merged, table);
        warnings.extend(layer_warnings);
        last_file = path;
    }

    let config = from_table(merged, &last_file)?;
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ARCHLAB_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Env overrides with an injectable lookup, so tests need not touch the
/// process environment
pub fn apply_env_overrides<L, W>(mut config: Config, lookup: L, warnings: &mut W) -> Config
where
    L: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(dir) = lookup(ENV_OUT_DIR).filter(|v| !v.trim().is_empty()) {
        config.generate.out_dir = PathBuf::from(dir);
    }

    if let Some(dir) = lookup(ENV_STORE_DIR).filter(|v| !v.trim().is_empty()) {
        config.store.dir = Some(PathBuf::from(dir));
    }

    if let Some(value) = lookup(ENV_FAIL_ON) {
        config.generate.fail_on = EnvVarValidator::new(ENV_FAIL_ON, &["error", "warning"])
            .parse_with_writer(
                &value,
                |v| v.parse::<Severity>().ok(),
                config.generate.fail_on,
                warnings,
            );
    }

    if let Some(value) = lookup(ENV_VERBOSITY) {
        config.output.verbosity = EnvVarValidator::new(
            ENV_VERBOSITY,
            &["quiet", "normal", "verbose", "debug"],
        )
        .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, warnings);
    }

    config
}

/// `~/.config/archlab/config.toml` (honoring `XDG_CONFIG_HOME`)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("archlab/config.toml"))
}

/// Parse one file into a table, checking it against `Config` for unknown keys
fn read_layer(path: &Path) -> ArchlabResult<(toml::Table, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let _: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| config_error(path, e))?;

    let table: toml::Table = toml::from_str(&content).map_err(|e| config_error(path, e))?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((table, warnings))
}

fn from_table(table: toml::Table, path: &Path) -> ArchlabResult<Config> {
    toml::Value::Table(table)
        .try_into::<Config>()
        .map_err(|e| config_error(path, e))
}

fn config_error(path: &Path, err: impl std::fmt::Display) -> ArchlabError {
    ArchlabError::Config {
        file: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Merge `overlay` into `base`; nested tables merge, everything else replaces
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, incoming);
                } else {
                    base.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                base.insert(key, other);
            }
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generate",
        "out_dir",
        "fail_on",
        "skip_unchanged",
        "language",
        "store",
        "dir",
        "output",
        "verbosity",
        "color",
        "unicode",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
