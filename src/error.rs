// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarpError {
  #[error("IO Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Config file not found: {0}")]
  ConfigNotFound(PathBuf),

  #[error("Could not read config file '{path}': {source}")]
  ConfigRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Could not parse config file '{path}': {source}")]
  ConfigParse {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },

  #[error("No words of at most {max_length} characters are available")]
  NoWordsFit { max_length: usize },
}
