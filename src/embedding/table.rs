use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use super::EmbeddingProvider;
use super::error::EmbeddingError;
use crate::hashing::normalize_word;

/// Read-only word → vector table held in memory.
///
/// Keys are stored case-folded. When two source rows fold to the same key the
/// first one wins, matching how pretrained tables list the most frequent
/// spelling first.
#[derive(Clone)]
pub struct EmbeddingTable {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl std::fmt::Debug for EmbeddingTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingTable")
            .field("words", &self.vectors.len())
            .field("dim", &self.dim)
            .finish()
    }
}

impl EmbeddingTable {
    /// Creates an empty table that accepts vectors of `dim` floats.
    pub fn new(dim: usize) -> Result<Self, EmbeddingError> {
        if dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding dimension must be non-zero".to_string(),
            });
        }

        Ok(Self {
            vectors: HashMap::new(),
            dim,
        })
    }

    /// Builds a table from `(word, vector)` pairs, rejecting any vector whose
    /// length differs from `dim`.
    pub fn from_entries<I, W>(dim: usize, entries: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (W, Vec<f32>)>,
        W: AsRef<str>,
    {
        let mut table = Self::new(dim)?;
        for (word, vector) in entries {
            table.insert(word.as_ref(), vector)?;
        }
        Ok(table)
    }

    /// Loads a GloVe or word2vec text file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EmbeddingError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EmbeddingError::TableNotFound {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), "Loading embedding table");
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            words = table.len(),
            dim = table.dim(),
            "Embedding table loaded"
        );

        Ok(table)
    }

    /// Parses space-separated `word v1 v2 ... vd` rows.
    ///
    /// A leading `count dim` header (word2vec text format) is accepted and fixes the
    /// dimension; otherwise the first row does. Once the dimension is known the last
    /// `dim` fields of a row are the vector and everything before them is the word,
    /// so tokens may contain spaces or other Unicode whitespace. Blank lines are
    /// skipped and invalid UTF-8 is replaced rather than rejected.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EmbeddingError> {
        let mut vectors: HashMap<String, Vec<f32>> = HashMap::new();
        let mut dim: Option<usize> = None;

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line = String::from_utf8_lossy(&raw);
            let line_no = idx + 1;
            let fields: Vec<&str> = line
                .trim_end_matches('\r')
                .split(' ')
                .filter(|f| !f.is_empty())
                .collect();

            if fields.is_empty() {
                continue;
            }

            if line_no == 1
                && fields.len() == 2
                && fields[0].parse::<usize>().is_ok()
                && let Ok(header_dim) = fields[1].parse::<usize>()
            {
                debug!(header_dim, "Found word2vec header");
                dim = Some(header_dim);
                continue;
            }

            let split_at = match dim {
                Some(expected) if fields.len() <= expected => {
                    return Err(EmbeddingError::DimensionMismatch {
                        word: fields[0].to_string(),
                        expected,
                        actual: fields.len() - 1,
                    });
                }
                Some(expected) => fields.len() - expected,
                None => 1,
            };
            let word = fields[..split_at].join(" ");

            let vector = fields[split_at..]
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|e| EmbeddingError::MalformedLine {
                    line: line_no,
                    reason: e.to_string(),
                })?;

            if *dim.get_or_insert(vector.len()) == 0 {
                return Err(EmbeddingError::MalformedLine {
                    line: line_no,
                    reason: format!("no vector components for '{word}'"),
                });
            }

            vectors.entry(normalize_word(&word)).or_insert(vector);
        }

        match dim {
            Some(dim) if !vectors.is_empty() => Ok(Self { vectors, dim }),
            _ => Err(EmbeddingError::EmptyTable),
        }
    }

    /// Adds a vector, keeping any existing entry for the same folded word.
    pub fn insert(&mut self, word: &str, vector: Vec<f32>) -> Result<(), EmbeddingError> {
        if vector.len() != self.dim {
            return Err(EmbeddingError::DimensionMismatch {
                word: word.to_string(),
                expected: self.dim,
                actual: vector.len(),
            });
        }

        self.vectors.entry(normalize_word(word)).or_insert(vector);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterates over stored (case-folded) words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }
}

impl EmbeddingProvider for EmbeddingTable {
    fn vector_for(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(&normalize_word(word)).map(Vec::as_slice)
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
