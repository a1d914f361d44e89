//! Rhyme groups keyed by rhyme part.
//!
//! A *rhyme part* is the last stressed vowel of an ARPAbet pronunciation followed by
//! every phoneme after it (`LIGHT  L AY1 T` → `AY1 T`). Words that share a rhyme
//! part rhyme perfectly. A [`RhymeMap`] is either built from a CMU-style pronouncing
//! dictionary or loaded from its saved text form (`AY1 T: BITE BRIGHT LIGHT`).

pub mod error;


pub use error::RhymeMapError;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::constants::DEFAULT_PHONETIC_SCORE;
use crate::scoring::RhymeCandidate;

/// Returns the rhyme part of a space-separated ARPAbet pronunciation, or an empty
/// string when it has no stressed vowel.
pub fn rhyme_part(pronunciation: &str) -> String {
    let phonemes: Vec<&str> = pronunciation.split_whitespace().collect();
    let last_vowel = phonemes
        .iter()
        .rposition(|p| p.chars().last().is_some_and(|c| c.is_ascii_digit()));

    match last_vowel {
        Some(idx) => phonemes[idx..].join(" "),
        None => String::new(),
    }
}

/// Splits `reader` into lines without requiring UTF-8.
///
/// Pronouncing dictionaries ship as Latin-1; undecodable bytes become U+FFFD
/// instead of failing the whole read.
fn lossy_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').map(|raw| {
        raw.map(|bytes| {
            String::from_utf8_lossy(&bytes)
                .trim_end_matches('\r')
                .to_string()
        })
    })
}

/// Strips a CMU alternate-pronunciation marker: `READ(1)` → `READ`.
fn strip_variant(word: &str) -> &str {
    match word.find('(') {
        Some(idx) => &word[..idx],
        None => word,
    }
}

/// Formats a dictionary word for display: `READ(1)` → `Read`.
pub fn display_word(word: &str) -> String {
    let lower = strip_variant(word).trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct RhymeMap {
    groups: BTreeMap<String, Vec<String>>,
    /// Dictionary word → its rhyme part. The first group a word appears in wins.
    index: HashMap<String, String>,
}

impl RhymeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from CMU pronouncing-dictionary lines (`WORD  PH1 PH2 ...`).
    ///
    /// Comment lines (`;;;`), lines without the two-space separator, and words with
    /// no stressed vowel are skipped. Bytes that are not UTF-8 are replaced, so a
    /// Latin-1 dictionary still loads.
    pub fn from_cmudict<R: BufRead>(reader: R) -> Result<Self, RhymeMapError> {
        let mut map = Self::new();
        let mut skipped = 0usize;

        for line in lossy_lines(reader) {
            let line = line?;
            if line.starts_with(";;;") {
                continue;
            }

            let Some((word, pronunciation)) = line.split_once("  ") else {
                skipped += 1;
                continue;
            };

            let part = rhyme_part(pronunciation);
            if part.is_empty() {
                skipped += 1;
                continue;
            }

            map.insert(&part, word.trim());
        }

        debug!(
            patterns = map.pattern_count(),
            skipped, "Built rhyme map from pronouncing dictionary"
        );

        map.non_empty()
    }

    /// Parses the saved form: one `PATTERN: WORD WORD ...` group per line.
    ///
    /// Blank lines, lines without `:`, and patterns with no words are skipped.
    /// Repeated patterns are merged.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, RhymeMapError> {
        let mut map = Self::new();

        for line in lossy_lines(reader) {
            let line = line?;
            let Some((pattern, words)) = line.split_once(':') else {
                continue;
            };

            let pattern = pattern.trim();
            if pattern.is_empty() {
                continue;
            }

            for word in words.split_whitespace() {
                map.insert(pattern, word);
            }
        }

        map.non_empty()
    }

    /// Loads the saved form from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RhymeMapError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RhymeMapError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let map = Self::parse(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            patterns = map.pattern_count(),
            words = map.total_words(),
            "Loaded rhyme map"
        );
        Ok(map)
    }

    /// Writes the saved form, one group per line in pattern order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), RhymeMapError> {
        for (pattern, words) in &self.groups {
            write!(writer, "{pattern}:")?;
            for word in words {
                write!(writer, " {word}")?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn insert(&mut self, pattern: &str, word: &str) {
        self.groups
            .entry(pattern.to_string())
            .or_default()
            .push(word.to_string());
        self.index
            .entry(word.to_string())
            .or_insert_with(|| pattern.to_string());
    }

    /// Returns the rhyme part recorded for `word` (case-insensitive).
    pub fn pattern_for(&self, word: &str) -> Option<&str> {
        self.index
            .get(&word.trim().to_uppercase())
            .map(String::as_str)
    }

    /// Words sharing `word`'s rhyme part, excluding `word` itself and its alternate
    /// pronunciations, formatted with [`display_word`]. Empty if `word` is unknown.
    pub fn find_rhymes(&self, word: &str) -> Vec<String> {
        let query = word.trim().to_uppercase();
        let Some(group) = self
            .index
            .get(&query)
            .and_then(|pattern| self.groups.get(pattern))
        else {
            return vec![];
        };

        let query_base = strip_variant(&query);
        let mut seen = BTreeSet::new();
        group
            .iter()
            .filter(|w| strip_variant(w) != query_base)
            .map(|w| display_word(w))
            .filter(|w| seen.insert(w.clone()))
            .collect()
    }

    /// Rhymes for `word` as lowercase candidates, each with `phonetic_score`.
    pub fn candidates_for(&self, word: &str, phonetic_score: f32) -> Vec<RhymeCandidate> {
        self.find_rhymes(word)
            .into_iter()
            .map(|w| RhymeCandidate::new(w.to_lowercase(), phonetic_score))
            .collect()
    }

    /// [`candidates_for`](Self::candidates_for) with the default phonetic score.
    pub fn default_candidates_for(&self, word: &str) -> Vec<RhymeCandidate> {
        self.candidates_for(word, DEFAULT_PHONETIC_SCORE)
    }

    pub fn pattern_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct words, counting alternate pronunciations once.
    pub fn total_words(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .map(|w| strip_variant(w))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Every rhyme part, in sorted order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    fn non_empty(self) -> Result<Self, RhymeMapError> {
        if self.groups.is_empty() {
            return Err(RhymeMapError::Empty);
        }
        Ok(self)
    }
}
