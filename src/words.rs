// src/words.rs
//! Embedded word lists used to build names.
use std::sync::LazyLock;

const ADJECTIVES_TXT: &str = include_str!("../data/adjectives.txt");
const NOUNS_TXT: &str = include_str!("../data/nouns.txt");

fn parse_list(raw: &'static str) -> Vec<&'static str> {
  raw
    .lines()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect()
}

/// Adjectives, used for every component but the last.
pub static ADJECTIVES: LazyLock<Vec<&'static str>> = LazyLock::new(|| parse_list(ADJECTIVES_TXT));

/// Nouns, used for the final component.
pub static NOUNS: LazyLock<Vec<&'static str>> = LazyLock::new(|| parse_list(NOUNS_TXT));

/// Words from `list` no longer than `max_len` bytes, or the whole list when unbounded.
pub fn filter_by_length(list: &[&'static str], max_len: Option<usize>) -> Vec<&'static str> {
  match max_len {
    Some(len) => list.iter().copied().filter(|w| w.len() <= len).collect(),
    None => list.to_vec(),
  }
}
