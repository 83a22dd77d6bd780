// src/cli.rs
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::HarpConfig;
use crate::generate::NameOptions;

#[derive(Parser, Debug)]
#[command(
    name = "harp",
    author,
    about = "Generate random names",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Number of names to generate
  #[arg(
    short = 'n',
    long,
    global = true,
    default_value_t = 1,
    allow_negative_numbers = true
  )]
  pub count: i64,

  /// Show version and exit
  #[arg(short = 'v', long, global = true)]
  pub version: bool,

  /// Words per name, adjectives plus a final noun (clamped to 2-16)
  #[arg(short, long, global = true)]
  pub components: Option<u8>,

  /// Maximum length of each word
  #[arg(short = 'l', long = "max-length", global = true)]
  pub max_length: Option<usize>,

  /// Separator placed between words
  #[arg(short, long, global = true, allow_hyphen_values = true)]
  pub separator: Option<String>,

  /// YAML file with default generator options
  #[arg(long, global = true)]
  #[clap(env = "HARP_CONFIG")]
  pub config: Option<PathBuf>,

  /// Increase log verbosity (e.g., --verbose --verbose)
  #[arg(long, global = true, action = ArgAction::Count)]
  pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
  /// Generate random names (default if no command given)
  Generate,
}

impl Cli {
  /// Merges command-line overrides on top of the config file values.
  pub fn name_options(&self, config: &HarpConfig) -> NameOptions {
    let base = config.to_name_options();
    NameOptions {
      components: self.components.unwrap_or(base.components),
      max_element_length: self.max_length.or(base.max_element_length),
      separator: self.separator.clone().unwrap_or(base.separator),
    }
  }
}
