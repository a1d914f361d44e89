//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RHYME_*` environment variables;
//! command-line flags override both.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::DEFAULT_EMBEDDING_DIM;

/// Which semantic model feeds the blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    /// Rescaled cosine similarity of the two word vectors.
    #[default]
    Cosine,
    /// Trained pair network loaded from safetensors.
    Learned,
}

impl FromStr for ScorerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Self::Cosine),
            "learned" => Ok(Self::Learned),
            _ => Err(ConfigError::UnknownScorer {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cosine => f.write_str("cosine"),
            Self::Learned => f.write_str("learned"),
        }
    }
}

/// Ranking configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RHYME_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Word-vector table (`word v1 v2 ...` per line).
    pub embeddings_path: Option<PathBuf>,

    /// Trained rhyme network weights (safetensors).
    pub model_path: Option<PathBuf>,

    /// Saved rhyme map (`PATTERN: WORD WORD ...` per line).
    pub rhyme_map_path: Option<PathBuf>,

    /// Where ranked results are written. Default: `rhyme_scores.tsv`.
    pub output_path: PathBuf,

    /// Width of each word vector. Default: `25`.
    pub embedding_dim: usize,

    /// Semantic model. Default: [`ScorerKind::Cosine`].
    pub scorer: ScorerKind,
}

/// Output file used when `RHYME_OUTPUT_PATH` is not set.
pub const DEFAULT_OUTPUT_PATH: &str = "rhyme_scores.tsv";

impl Default for Config {
    fn default() -> Self {
        Self {
            embeddings_path: None,
            model_path: None,
            rhyme_map_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            scorer: ScorerKind::default(),
        }
    }
}

impl Config {
    pub const ENV_EMBEDDINGS_PATH: &'static str = "RHYME_EMBEDDINGS_PATH";
    pub const ENV_MODEL_PATH: &'static str = "RHYME_MODEL_PATH";
    pub const ENV_RHYME_MAP_PATH: &'static str = "RHYME_RHYME_MAP_PATH";
    pub const ENV_OUTPUT_PATH: &'static str = "RHYME_OUTPUT_PATH";
    pub const ENV_EMBEDDING_DIM: &'static str = "RHYME_EMBEDDING_DIM";
    pub const ENV_SCORER: &'static str = "RHYME_SCORER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embeddings_path = Self::parse_optional_path_from_env(Self::ENV_EMBEDDINGS_PATH);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let rhyme_map_path = Self::parse_optional_path_from_env(Self::ENV_RHYME_MAP_PATH);
        let output_path = Self::parse_optional_path_from_env(Self::ENV_OUTPUT_PATH)
            .unwrap_or(defaults.output_path);
        let embedding_dim = Self::parse_dim_from_env(defaults.embedding_dim)?;
        let scorer = match env::var(Self::ENV_SCORER) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.scorer,
        };

        Ok(Self {
            embeddings_path,
            model_path,
            rhyme_map_path,
            output_path,
            embedding_dim,
            scorer,
        })
    }

    /// Checks that configured inputs exist, the selected scorer has what it needs,
    /// and the output path is writable as a file. Does not open any file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_inputs()?;
        self.validate_scorer()?;

        if self.output_path.is_dir() {
            return Err(ConfigError::OutputIsDirectory {
                path: self.output_path.clone(),
            });
        }

        Ok(())
    }

    /// Checks the embedding dimension and that every configured input file exists.
    pub fn validate_inputs(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::InvalidEmbeddingDim {
                value: self.embedding_dim.to_string(),
            });
        }

        for path in [&self.embeddings_path, &self.model_path, &self.rhyme_map_path]
            .into_iter()
            .flatten()
        {
            Self::check_file(path)?;
        }

        Ok(())
    }

    /// Checks that the selected scorer can be built.
    pub fn validate_scorer(&self) -> Result<(), ConfigError> {
        if self.scorer == ScorerKind::Learned && self.model_path.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_MODEL_PATH,
            });
        }
        Ok(())
    }

    fn check_file(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ConfigError::NotAFile {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    fn parse_dim_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_EMBEDDING_DIM) {
            Ok(value) => {
                let dim: usize = value.trim().parse().map_err(|e| ConfigError::DimParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if dim == 0 {
                    return Err(ConfigError::InvalidEmbeddingDim { value });
                }

                Ok(dim)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
