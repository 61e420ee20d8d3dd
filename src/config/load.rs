use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;
use crate::error::{Error, Result};

const ENV_PREFIX: &str = "AUDIOBOOK_GENERATOR";
const CONFIG_PATH_VAR: &str = "AUDIOBOOK_GENERATOR_CONFIG";

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `AUDIOBOOK_GENERATOR__`)
/// over an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from the resolved default location and the environment.
    pub fn load() -> Result<Self> {
        let path = resolve_config_path();
        Self::load_from(path.as_deref(), false)
    }

    /// Load settings from `path`. With `required`, a missing file is an error.
    pub fn load_from(path: Option<&Path>, required: bool) -> Result<Self> {
        if required {
            if let Some(p) = path {
                if !p.is_file() {
                    return Err(Error::Configuration(format!(
                        "config file \"{}\" not found",
                        p.display()
                    )));
                }
            }
        }

        let mut builder = ::config::Config::builder();

        if let Some(p) = path {
            builder = builder.add_source(::config::File::from(p).required(required));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject settings the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(1..=9).contains(&self.naming.index_width) {
            return Err(Error::Configuration(format!(
                "naming.index_width must be between 1 and 9, got {}",
                self.naming.index_width
            )));
        }
        if self.tagging.cover_file_name.trim().is_empty() {
            return Err(Error::Configuration(
                "tagging.cover_file_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `AUDIOBOOK_GENERATOR_CONFIG` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/audiobook-generator/config.toml`, or
/// `~/.config/audiobook-generator/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("audiobook-generator").join("config.toml"))
}
