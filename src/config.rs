// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::HarpError;
use crate::generate::NameOptions;

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Defaults for name generation read from a YAML file. Every key is optional.
///
/// ```yaml
/// components: 4
/// maxElementLength: 6
/// separator: "_"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
pub struct HarpConfig {
  #[serde(default)]
  pub components: Option<u8>,
  #[serde(default)]
  pub max_element_length: Option<usize>,
  #[serde(default)]
  pub separator: Option<String>,
}

impl HarpConfig {
  /// Fills unset fields with the built-in defaults.
  pub fn to_name_options(&self) -> NameOptions {
    let defaults = NameOptions::default();
    NameOptions {
      components: self.components.unwrap_or(defaults.components),
      max_element_length: self.max_element_length.or(defaults.max_element_length),
      separator: self.separator.clone().unwrap_or(defaults.separator),
    }
  }
}

/// Platform config location, e.g. `~/.config/harp/config.yaml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
  ProjectDirs::from("", "", "harp").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loads the config.
/// Order of preference:
/// 1. --config argument or HARP_CONFIG environment variable (must exist)
/// 2. config.yaml in the platform config directory, if present
/// 3. built-in defaults
pub fn load_config(explicit: Option<&Path>) -> Result<HarpConfig, HarpError> {
  if let Some(path) = explicit {
    if !path.is_file() {
      return Err(HarpError::ConfigNotFound(path.to_path_buf()));
    }
    return read_and_parse_config(path);
  }

  match default_config_path() {
    Some(path) if path.is_file() => read_and_parse_config(&path),
    Some(path) => {
      debug!("No config file at {}, using defaults", path.display());
      Ok(HarpConfig::default())
    }
    None => {
      debug!("Could not determine config directory, using defaults");
      Ok(HarpConfig::default())
    }
  }
}

pub(crate) fn read_and_parse_config(path: &Path) -> Result<HarpConfig, HarpError> {
  info!("Reading config from {}", path.display());
  let content = fs::read_to_string(path).map_err(|e| HarpError::ConfigRead {
    path: path.to_path_buf(),
    source: e,
  })?;
  if content.trim().is_empty() {
    return Ok(HarpConfig::default());
  }
  serde_yaml::from_str(&content).map_err(|e| HarpError::ConfigParse {
    path: path.to_path_buf(),
    source: e,
  })
}
