// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use harp::cli::{Cli, Commands};
use harp::config;
use harp::{Action, HarpError, WordNameSource};
use log::LevelFilter;

fn main() -> ExitCode {
  let cli = Cli::parse();

  // Stdout carries the names, so logging stays quiet unless asked for.
  let log_level = match cli.verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(log_level).init();

  log::debug!("CLI args: {:?}", cli);

  match execute(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      log::error!("{err}");
      ExitCode::FAILURE
    }
  }
}

fn execute(cli: &Cli) -> Result<(), HarpError> {
  let action = match cli.command {
    Some(Commands::Generate) | None => Action::from_flags(cli.version, cli.count),
  };

  let options = match action {
    // The version path never touches the generator options.
    Action::Version => Default::default(),
    Action::Generate { .. } => {
      let config = config::load_config(cli.config.as_deref())?;
      cli.name_options(&config)
    }
  };
  let mut source = WordNameSource::new(options)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  harp::run(action, &mut source, &mut out)
}
