//! Locating and reading `config.toml` for the `dxl` binary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use dxl::{DxlError, config::AppConfig};

/// Why a formatter configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for DxlError {
    fn from(err: ConfigError) -> Self {
        DxlError::Config(err.to_string())
    }
}

/// Resolves the formatter settings for this run.
///
/// A `--config` path wins and must exist. Otherwise `dxl/config.toml` under
/// the working directory is used, then `config.toml` in the platform config
/// directory for `dxl`. With none of these present the two-space default
/// applies.
///
/// # Errors
///
/// Fails when the chosen file is missing or cannot be read as a valid
/// formatter configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, DxlError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading formatter configuration given on the command line");
        return read_config_file(path);
    }

    let working_config = Path::new("dxl/config.toml");
    if working_config.exists() {
        info!(path = working_config.display().to_string(); "Reading formatter configuration from the working directory");
        return read_config_file(working_config);
    }

    if let Some(dirs) = ProjectDirs::from("org", "dxl", "dxl") {
        let user_config = dirs.config_dir().join("config.toml");

        if user_config.exists() {
            info!(path = user_config.display().to_string(); "Reading formatter configuration from the user config directory");
            return read_config_file(user_config);
        }

        debug!(path = user_config.display().to_string(); "No user formatter configuration");
    } else {
        debug!("No home directory, skipping user formatter configuration");
    }

    debug!("Formatting with default indentation");
    Ok(AppConfig::default())
}

fn read_config_file(path: impl AsRef<Path>) -> Result<AppConfig, DxlError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

/// Indentation wider than a tab stop is almost certainly a typo.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let width = config.format().indent_width();
    if !config.format().use_tabs() && !(1..=8).contains(&width) {
        return Err(ConfigError::Validation(format!(
            "indent_width must be between 1 and 8, got {width}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[format]\nindent_width = 4\n").expect("Failed to write config");

        let config = load_config(Some(&path)).expect("Failed to load config");

        assert_eq!(config.format().indent_width(), 4);
        assert!(!config.format().use_tabs());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "").expect("Failed to write config");

        let config = load_config(Some(&path)).expect("Failed to load config");

        assert_eq!(config.format().indent_unit(), "  ");
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, DxlError::Config(msg) if msg.starts_with("Missing configuration file")));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[format]\nindent_width = \"wide\"\n").expect("Failed to write config");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, DxlError::Config(msg) if msg.starts_with("Failed to parse TOML")));
    }

    #[test]
    fn test_indent_width_is_validated() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[format]\nindent_width = 0\n").expect("Failed to write config");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, DxlError::Config(msg) if msg.contains("indent_width")));

        fs::write(&path, "[format]\nindent_width = 0\nuse_tabs = true\n")
            .expect("Failed to write config");
        assert!(load_config(Some(&path)).is_ok());
    }
}
