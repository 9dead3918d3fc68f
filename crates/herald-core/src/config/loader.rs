//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::{config_file_names, VERSIONRC};
use super::types::Config;
use super::validation::validate_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn detect(path: &Path) -> Self {
        let is_bare_versionrc = path.file_name().is_some_and(|n| n == VERSIONRC);
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ if is_bare_versionrc => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse configuration text in the given file's format
fn parse_config(path: &Path, content: &str) -> Result<Config> {
    let config = match Format::detect(path) {
        Format::Toml => toml::from_str(content).map_err(ConfigError::TomlError)?,
        Format::Json => serde_json::from_str(content).map_err(ConfigError::JsonError)?,
        Format::Yaml => serde_yaml::from_str(content).map_err(ConfigError::YamlError)?,
    };
    Ok(config)
}

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = Format::detect(path);
    info!(path = %path.display(), format = ?format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(path, &content)?;

    validate_config(&config)?;
    debug!(
        path = %path.display(),
        type_count = config.types.len(),
        "config loaded and validated"
    );
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// Names are checked in `config_file_names()` order at each level; the first
/// match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "no usable config found, using defaults");
            (Config::default(), None)
        }
    }
}
