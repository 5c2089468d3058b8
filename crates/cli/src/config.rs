// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Renderer configuration.
//!
//! Settings are read from a TOML file, located in this order:
//! - the `--config` argument
//! - the `IBMD_CONFIG` environment variable
//! - `.ibmd.toml` in the working directory
//! - `ibmd/config.toml` in the user config directory
//!
//! Every file is optional; missing keys fall back to the defaults below.
//! Command-line flags override whatever the file says.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::env;
use crate::error::{Error, Result};

const PROJECT_CONFIG_NAME: &str = ".ibmd.toml";
const USER_CONFIG_DIR: &str = "ibmd";
const USER_CONFIG_NAME: &str = "config.toml";

/// Contents of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Append the bundle as a fenced JSON block (default: true).
    pub embed_json: bool,
    /// Run the validator before rendering (default: false).
    pub validate: bool,
    /// Use strict validation when validating (default: false).
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            embed_json: true,
            validate: false,
            strict: false,
        }
    }
}

/// Where the active config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by the user; must exist.
    Explicit(PathBuf),
    /// Found on the search path.
    Discovered(PathBuf),
    /// No file; built-in defaults.
    Default,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Discovered(p) => Some(p),
            ConfigSource::Default => None,
        }
    }
}

/// Pick the config file to load.
pub fn locate(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    cwd: &Path,
    user_config_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(path) = env_path {
        return ConfigSource::Explicit(path);
    }

    let project = cwd.join(PROJECT_CONFIG_NAME);
    if project.is_file() {
        return ConfigSource::Discovered(project);
    }

    if let Some(dir) = user_config_dir {
        let user = dir.join(USER_CONFIG_DIR).join(USER_CONFIG_NAME);
        if user.is_file() {
            return ConfigSource::Discovered(user);
        }
    }

    ConfigSource::Default
}

impl Config {
    /// Parse config from TOML text.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&text, path)
    }

    /// Load config from the given source.
    pub fn load(source: &ConfigSource) -> Result<Self> {
        match source.path() {
            Some(path) => Self::load_from(path),
            None => Ok(Config::default()),
        }
    }

    /// Locate and load config using the process environment.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir();
        let source = locate(explicit, env::config_path(), &cwd, user_dir.as_deref());
        let config = Self::load(&source)?;
        Ok((config, source))
    }
}

/// Effective settings for one run, after command-line overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub embed_json: bool,
    pub validate: bool,
    pub strict: bool,
}

impl Settings {
    /// Merge command-line flags over the config file.
    pub fn resolve(config: &Config, cli: &Cli) -> Self {
        Settings {
            embed_json: cli.embed_override().unwrap_or(config.embed_json),
            validate: cli.validate || cli.strict || config.validate,
            strict: cli.strict || config.strict,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
