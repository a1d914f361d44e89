use std::path::PathBuf;

use crate::constants::DEFAULT_EMBEDDING_DIM;

#[derive(Debug, Clone)]
pub struct RhymeNetConfig {
    /// Safetensors file holding `fc1`/`fc2`/`fc3` weights and biases.
    pub weights_path: PathBuf,

    /// Dimension of a single word vector; the network input is twice this.
    pub embedding_dim: usize,
}

impl RhymeNetConfig {
    pub fn new<P: Into<PathBuf>>(weights_path: P) -> Self {
        Self {
            weights_path: weights_path.into(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.embedding_dim == 0 {
            return Err("embedding_dim must be non-zero".to_string());
        }

        if self.weights_path.as_os_str().is_empty() {
            return Err("weights_path cannot be empty".to_string());
        }

        Ok(())
    }
}
