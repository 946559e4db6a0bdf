//! Settings file for the calculator shell.
//!
//! Settings come from an optional TOML file. When no path is given,
//! `margin.toml` in the working directory is used if present; otherwise all
//! defaults apply.
//!
//! ```toml
//! log_level = "info"
//! log_file = "margin.log"
//! export_dir = "reports"
//! export_format = "csv"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::export::ExportFormat;

pub const DEFAULT_CONFIG_FILE: &str = "margin.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log filter, a bare level or a full `EnvFilter` directive.
    pub log_level: String,
    /// Append log output to this file when set.
    pub log_file: Option<PathBuf>,
    /// Directory exported reports are written to.
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse settings")
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when `path`
    /// is `None` and that file exists.
    ///
    /// An explicitly given path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("no settings file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("Invalid settings file: {}", path.display()))?;

        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_all_keys() {
        let settings = Settings::from_toml(
            r#"
            log_level = "debug"
            log_file = "margin.log"
            export_dir = "reports"
            export_format = "csv"
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_file, Some(PathBuf::from("margin.log")));
        assert_eq!(settings.export_dir, PathBuf::from("reports"));
        assert_eq!(settings.export_format, ExportFormat::Csv);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(r#"export_format = "markdown""#).unwrap();

        assert_eq!(settings.export_format, ExportFormat::Markdown);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.export_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Settings::from_toml(r#"currency = "USD""#).is_err());
    }

    #[test]
    fn rejects_unknown_export_format() {
        assert!(Settings::from_toml(r#"export_format = "pdf""#).is_err());
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = Settings::load(Some(Path::new("does/not/exist/margin.toml")));

        assert!(result.is_err());
    }
}
