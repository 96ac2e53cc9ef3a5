//! Settings for the formsmith toolkit.
//!
//! This module provides the [`Settings`] struct holding all runtime
//! configuration, with sensible defaults and a TOML file loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FormsmithError, FormsmithResult};

/// The complete set of toolkit settings.
///
/// # Examples
///
/// ```
/// use formsmith_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.port, 8000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs, verbose errors).
    pub debug: bool,
    /// The log level filter (e.g. "debug", "info", "warn", "error").
    pub log_level: String,
    /// Host the development server binds to.
    pub host: String,
    /// Port the development server binds to.
    pub port: u16,
    /// Directory holding the field-renderer component sources served by
    /// the view-source endpoint.
    pub components_dir: PathBuf,
    /// Component file stems that are never served (internal building
    /// blocks rather than field renderers).
    pub ignored_component_files: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            components_dir: PathBuf::from("components/ui"),
            ignored_component_files: vec![
                "form".to_string(),
                "button".to_string(),
                "command".to_string(),
                "popover".to_string(),
                "calendar".to_string(),
            ],
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> FormsmithResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| {
            FormsmithError::ConfigurationError(format!(
                "Invalid settings file {}: {e}",
                path.as_ref().display()
            ))
        })
    }

    /// Returns the `host:port` address the server binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns `true` if the given component file stem is on the ignore list.
    pub fn is_ignored_component(&self, stem: &str) -> bool {
        self.ignored_component_files.iter().any(|f| f == stem)
    }
}
