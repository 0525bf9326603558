//! Configuration module for archlab
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARCHLAB_*)
//! 3. Project config (`archlab.toml` in the working directory)
//! 4. User config (`~/.config/archlab/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{
    apply_env_overrides, user_config_path, ConfigWarning, ENV_FAIL_ON, ENV_OUT_DIR, ENV_STORE_DIR,
    ENV_VERBOSITY, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, GenerateConfig, OutputConfig, StoreConfig, Verbosity};
