// src/run.rs
use std::io::Write;

use log::{debug, info};

use crate::error::HarpError;

/// Something that can report a version and produce names.
pub trait NameSource {
  fn version(&self) -> String;
  fn generate_name(&mut self) -> Result<String, HarpError>;
}

/// What a single invocation should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  /// Print `harp <version>` and stop.
  Version,
  /// Print this many names. Zero or negative prints nothing.
  Generate { count: i64 },
}

impl Action {
  pub fn from_flags(version_requested: bool, count: i64) -> Self {
    if version_requested {
      Action::Version
    } else {
      Action::Generate { count }
    }
  }
}

/// Runs `action` against `source`, writing one line per result to `out`.
pub fn run<S, W>(action: Action, source: &mut S, out: &mut W) -> Result<(), HarpError>
where
  S: NameSource + ?Sized,
  W: Write + ?Sized,
{
  match action {
    Action::Version => {
      writeln!(out, "harp {}", source.version())?;
    }
    Action::Generate { count } => {
      info!("Generating {} name(s)", count.max(0));
      for i in 0..count {
        let name = source.generate_name()?;
        debug!("Name {}: {}", i + 1, name);
        writeln!(out, "{}", name)?;
      }
    }
  }
  out.flush()?;
  Ok(())
}
