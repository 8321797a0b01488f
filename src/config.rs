//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml`
//! 3. Explicit config file given with `--config`
//! 4. Environment variables: `TAGTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cli::error::{CliError, CliResult};
use crate::domain::INDENT_WIDTH;

/// How a tree is written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented open/close tags
    #[default]
    Markup,
    /// Box-drawing tree view
    Tree,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markup => write!(f, "markup"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}

/// Unified configuration for tagtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per nesting level in markup output (default: 2)
    pub indent_width: usize,
    /// Output format (default: markup)
    pub format: OutputFormat,
    /// Colored status output (default: true)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: INDENT_WIDTH,
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub indent_width: Option<usize>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for tagtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tagtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tagtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> CliResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| CliError::Config {
        message: format!("parse {}: {}", path.display(), e.message()),
    })
}

impl Settings {
    /// Overlay wins for every value it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            format: overlay.format.unwrap_or(self.format),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/tagtree/tagtree.toml` (skipped if absent)
    /// 3. Explicit config file
    /// 4. Environment variables: `TAGTREE_*` prefix
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(CliError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current, Environment::with_prefix("TAGTREE"))?;
        current.validate()?;

        debug!("settings: {:?}", current);
        Ok(current)
    }

    /// Apply `TAGTREE_*` environment variables as explicit overrides.
    ///
    /// A variable that is set but cannot be parsed is an error, never ignored.
    pub fn apply_env_overrides(mut settings: Self, env: Environment) -> CliResult<Self> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent_width") {
            settings.indent_width = val.trim().parse::<usize>().map_err(|_| CliError::Config {
                message: format!("indent_width must be a non-negative integer: {}", val),
            })?;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = OutputFormat::from_str(&val, true).map_err(|_| CliError::Config {
                message: format!("unknown format: {}", val),
            })?;
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = parse_bool(&val).ok_or_else(|| CliError::Config {
                message: format!("color must be a boolean: {}", val),
            })?;
        }

        Ok(settings)
    }

    fn validate(&self) -> CliResult<()> {
        if self.indent_width == 0 {
            return Err(CliError::Config {
                message: "indent_width must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Render settings as TOML for display.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: e.to_string(),
        })
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn config_err(e: config::ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
