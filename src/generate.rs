// src/generate.rs
use log::{debug, trace};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::HarpError;
use crate::run::NameSource;
use crate::words::{self, ADJECTIVES, NOUNS};

pub const MIN_COMPONENTS: u8 = 2;
pub const MAX_COMPONENTS: u8 = 16;
pub const DEFAULT_COMPONENTS: u8 = 3;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Options for generating names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOptions {
  /// Number of words per name, clamped to 2..=16. The last word is a noun.
  pub components: u8,
  /// Maximum length per word. None means no limit.
  pub max_element_length: Option<usize>,
  /// Joiner between words.
  pub separator: String,
}

impl Default for NameOptions {
  fn default() -> Self {
    Self {
      components: DEFAULT_COMPONENTS,
      max_element_length: None,
      separator: DEFAULT_SEPARATOR.to_string(),
    }
  }
}

impl NameOptions {
  pub fn clamped_components(&self) -> u8 {
    self.components.clamp(MIN_COMPONENTS, MAX_COMPONENTS)
  }
}

/// Version of the generator, reported by `harp --version`.
pub fn version() -> &'static str {
  env!("CARGO_PKG_VERSION")
}

/// Generates a name from two adjectives and a noun, separated by dashes.
///
/// ```
/// let name = harp::generate_name();
/// assert_eq!(name.matches('-').count(), 2);
/// ```
pub fn generate_name() -> String {
  let opts = NameOptions::default();
  compose(
    &ADJECTIVES,
    &NOUNS,
    opts.clamped_components(),
    &opts.separator,
    &mut rand::thread_rng(),
  )
}

/// Generates a name with custom options using the thread-local RNG.
///
/// ```
/// use harp::{generate_name_with_options, NameOptions};
///
/// let opts = NameOptions {
///   components: 2,
///   max_element_length: Some(5),
///   separator: "_".to_string(),
/// };
/// let name = generate_name_with_options(&opts).unwrap();
/// assert_eq!(name.matches('_').count(), 1);
/// ```
pub fn generate_name_with_options(opts: &NameOptions) -> Result<String, HarpError> {
  generate_name_with_rng(opts, &mut rand::thread_rng())
}

/// Generates a name drawing from `rng`. A seeded RNG gives a reproducible name.
pub fn generate_name_with_rng<R: Rng + ?Sized>(
  opts: &NameOptions,
  rng: &mut R,
) -> Result<String, HarpError> {
  let (adjectives, nouns) = word_pools(opts.max_element_length)?;
  Ok(compose(
    &adjectives,
    &nouns,
    opts.clamped_components(),
    &opts.separator,
    rng,
  ))
}

fn word_pools(
  max_len: Option<usize>,
) -> Result<(Vec<&'static str>, Vec<&'static str>), HarpError> {
  let adjectives = words::filter_by_length(&ADJECTIVES, max_len);
  let nouns = words::filter_by_length(&NOUNS, max_len);

  if adjectives.is_empty() || nouns.is_empty() {
    // An empty pool only happens when a length limit is set.
    return Err(HarpError::NoWordsFit {
      max_length: max_len.unwrap_or_default(),
    });
  }
  trace!(
    "Word pools: {} adjectives, {} nouns (max length {:?})",
    adjectives.len(),
    nouns.len(),
    max_len
  );
  Ok((adjectives, nouns))
}

fn compose<R: Rng + ?Sized>(
  adjectives: &[&'static str],
  nouns: &[&'static str],
  components: u8,
  separator: &str,
  rng: &mut R,
) -> String {
  let mut parts: Vec<&str> = Vec::with_capacity(components as usize);

  for _ in 0..components.saturating_sub(1) {
    if let Some(adj) = adjectives.choose(rng) {
      parts.push(adj);
    }
  }
  if let Some(noun) = nouns.choose(rng) {
    parts.push(noun);
  }

  parts.join(separator)
}

/// Name source backed by the embedded word lists.
///
/// The word pools are filtered once on construction, so a length limit that
/// excludes every word is reported before any name is printed.
pub struct WordNameSource<R = ThreadRng> {
  options: NameOptions,
  adjectives: Vec<&'static str>,
  nouns: Vec<&'static str>,
  rng: R,
}

impl WordNameSource<ThreadRng> {
  pub fn new(options: NameOptions) -> Result<Self, HarpError> {
    Self::with_rng(options, rand::thread_rng())
  }
}

impl<R: Rng> WordNameSource<R> {
  pub fn with_rng(options: NameOptions, rng: R) -> Result<Self, HarpError> {
    let (adjectives, nouns) = word_pools(options.max_element_length)?;
    debug!("Name source ready with options {:?}", options);
    Ok(Self {
      options,
      adjectives,
      nouns,
      rng,
    })
  }

  pub fn options(&self) -> &NameOptions {
    &self.options
  }
}

impl<R: Rng> NameSource for WordNameSource<R> {
  fn version(&self) -> String {
    version().to_string()
  }

  fn generate_name(&mut self) -> Result<String, HarpError> {
    Ok(compose(
      &self.adjectives,
      &self.nouns,
      self.options.clamped_components(),
      &self.options.separator,
      &mut self.rng,
    ))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use std::collections::HashSet;

  fn opts(components: u8) -> NameOptions {
    NameOptions {
      components,
      ..Default::default()
    }
  }

  #[test]
  fn default_name_has_two_adjectives_and_a_noun() {
    let name = generate_name();
    let parts: Vec<&str> = name.split('-').collect();
    assert_eq!(parts.len(), 3, "unexpected name: {name}");
    assert!(ADJECTIVES.contains(&parts[0]));
    assert!(ADJECTIVES.contains(&parts[1]));
    assert!(NOUNS.contains(&parts[2]));
  }

  #[test]
  fn names_vary_between_calls() {
    let names: HashSet<String> = (0..20).map(|_| generate_name()).collect();
    assert!(names.len() > 1, "expected varied names");
  }

  #[test]
  fn component_count_is_honored() {
    for n in [2u8, 4, 16] {
      let name = generate_name_with_options(&opts(n)).unwrap();
      assert_eq!(name.matches('-').count(), n as usize - 1, "{name}");
    }
  }

  #[test]
  fn component_count_is_clamped() {
    let too_many = generate_name_with_options(&opts(20)).unwrap();
    assert_eq!(too_many.matches('-').count(), 15);

    let too_few = generate_name_with_options(&opts(0)).unwrap();
    assert_eq!(too_few.matches('-').count(), 1);
  }

  #[test]
  fn max_element_length_limits_every_word() {
    let opts = NameOptions {
      max_element_length: Some(4),
      ..Default::default()
    };
    for _ in 0..20 {
      let name = generate_name_with_options(&opts).unwrap();
      for part in name.split('-') {
        assert!(part.len() <= 4, "part too long: {part}");
      }
    }
  }

  #[test]
  fn impossible_length_is_an_error() {
    let opts = NameOptions {
      max_element_length: Some(2),
      ..Default::default()
    };
    let err = generate_name_with_options(&opts).unwrap_err();
    assert!(matches!(err, HarpError::NoWordsFit { max_length: 2 }));
    assert!(WordNameSource::new(opts).is_err());
  }

  #[test]
  fn custom_separator() {
    let opts = NameOptions {
      separator: "_".to_string(),
      ..Default::default()
    };
    let name = generate_name_with_options(&opts).unwrap();
    assert_eq!(name.matches('_').count(), 2);
    assert!(!name.contains('-'));
  }

  #[test]
  fn seeded_rng_is_reproducible() {
    let a = generate_name_with_rng(&opts(5), &mut StdRng::seed_from_u64(7)).unwrap();
    let b = generate_name_with_rng(&opts(5), &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn source_matches_free_function_for_same_seed() {
    let mut source = WordNameSource::with_rng(opts(4), StdRng::seed_from_u64(42)).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
      assert_eq!(
        source.generate_name().unwrap(),
        generate_name_with_rng(&opts(4), &mut rng).unwrap()
      );
    }
  }

  #[test]
  fn source_reports_crate_version() {
    let source = WordNameSource::new(NameOptions::default()).unwrap();
    assert_eq!(source.version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(source.options().components, DEFAULT_COMPONENTS);
  }
}
