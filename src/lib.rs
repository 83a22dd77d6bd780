//! Random name generation: adjectives followed by a noun, e.g. `brave-misty-otter`.
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod run;
pub mod words;

pub use error::HarpError;
pub use generate::{
  generate_name, generate_name_with_options, generate_name_with_rng, version, NameOptions,
  WordNameSource,
};
pub use run::{run, Action, NameSource};
