//! Request and result file formats.
//!
//! Requests arrive as JSON (`{"base_word": "light", "candidates": [["bright", 0.9]]}`)
//! or as a plain word list whose first line is the base word. Results are written as
//! TSV (`word\tscore`, four decimals, no header) or CSV (`word,score` header, six
//! decimals).

pub mod error;


pub use error::PayloadError;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::DEFAULT_PHONETIC_SCORE;
use crate::scoring::{RhymeCandidate, ScoredRhyme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeRequest {
    pub base_word: String,
    #[serde(default)]
    pub candidates: Vec<RhymeCandidate>,
}

impl RhymeRequest {
    pub fn new(base_word: impl Into<String>, candidates: Vec<RhymeCandidate>) -> Self {
        Self {
            base_word: base_word.into(),
            candidates,
        }
    }

    /// Parses and validates a JSON request.
    pub fn read_json<R: Read>(reader: R) -> Result<Self, PayloadError> {
        let request: Self = serde_json::from_reader(reader)?;
        request.validated()
    }

    /// Parses a plain word list: first non-empty line is the base word, each later
    /// non-empty line a candidate scored `phonetic_score`.
    pub fn read_word_list<R: BufRead>(reader: R, phonetic_score: f32) -> Result<Self, PayloadError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        let mut words = words.into_iter();
        let base_word = words.next().ok_or(PayloadError::EmptyInput)?;
        let candidates = words
            .map(|w| RhymeCandidate::new(w, phonetic_score))
            .collect();

        Self::new(base_word, candidates).validated()
    }

    /// Loads a request from disk. `.json` files are parsed as JSON, anything else as
    /// a word list with the default phonetic score.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PayloadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PayloadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = BufReader::new(File::open(path)?);
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let request = if is_json {
            Self::read_json(reader)?
        } else {
            Self::read_word_list(reader, DEFAULT_PHONETIC_SCORE)?
        };

        info!(
            path = %path.display(),
            base_word = %request.base_word,
            num_candidates = request.candidates.len(),
            "Loaded rhyme request"
        );
        Ok(request)
    }

    /// Checks the base word is present and every candidate has a word and a
    /// phonetic score in `[0, 1]`. Trims words in place.
    pub fn validated(mut self) -> Result<Self, PayloadError> {
        self.base_word = self.base_word.trim().to_string();
        if self.base_word.is_empty() {
            return Err(PayloadError::MissingBaseWord);
        }

        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            candidate.word = candidate.word.trim().to_string();
            if candidate.word.is_empty() {
                return Err(PayloadError::EmptyCandidateWord { index });
            }
            if !(0.0..=1.0).contains(&candidate.phonetic_score) {
                return Err(PayloadError::InvalidPhoneticScore {
                    word: candidate.word.clone(),
                    score: candidate.phonetic_score,
                });
            }
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultFormat {
    #[default]
    Tsv,
    Csv,
}

impl ResultFormat {
    /// Picks CSV for `.csv` paths and TSV otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Tsv,
        }
    }
}

impl FromStr for ResultFormat {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(Self::Tsv),
            "csv" => Ok(Self::Csv),
            _ => Err(PayloadError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tsv => f.write_str("tsv"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

pub fn write_tsv<W: Write>(mut writer: W, results: &[ScoredRhyme]) -> Result<(), PayloadError> {
    for r in results {
        writeln!(writer, "{}\t{:.4}", r.word, r.combined_score)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(mut writer: W, results: &[ScoredRhyme]) -> Result<(), PayloadError> {
    writeln!(writer, "word,score")?;
    for r in results {
        writeln!(writer, "{},{:.6}", csv_field(&r.word), r.combined_score)?;
    }
    writer.flush()?;
    Ok(())
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\"")).into()
    } else {
        value.into()
    }
}

pub fn write_results<W: Write>(
    writer: W,
    results: &[ScoredRhyme],
    format: ResultFormat,
) -> Result<(), PayloadError> {
    match format {
        ResultFormat::Tsv => write_tsv(writer, results),
        ResultFormat::Csv => write_csv(writer, results),
    }
}

/// Writes results to `path`, creating or truncating it.
pub fn save_results<P: AsRef<Path>>(
    path: P,
    results: &[ScoredRhyme],
    format: ResultFormat,
) -> Result<(), PayloadError> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_results(writer, results, format)?;

    debug!(path = %path.display(), %format, rows = results.len(), "Saved ranked rhymes");
    Ok(())
}
