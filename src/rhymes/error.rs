use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RhymeMapError {
    #[error("rhyme map source not found at path: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read rhyme map: {0}")]
    Io(#[from] std::io::Error),

    #[error("rhyme map contains no patterns")]
    Empty,
}
