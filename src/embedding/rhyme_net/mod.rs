pub mod config;
pub mod error;


pub use config::RhymeNetConfig;
pub use error::RhymeNetError;

use candle_core::{DType, Device, Tensor};
use candle_nn::{ModuleT, VarBuilder};
use tracing::{debug, info};

use crate::constants::DimConfig;
use crate::embedding::device::select_device;
use crate::embedding::pair_mlp::PairMlp;

/// Trained pair model: `(base vector ++ candidate vector) → score in [0, 1]`.
///
/// Weights are read-only once loaded. Every forward pass runs with dropout
/// disabled, and weights loaded from disk are plain tensors rather than tracked
/// variables, so inference never records gradients.
pub struct RhymeNet {
    device: Device,
    dims: DimConfig,
    model: PairMlp,
}

impl std::fmt::Debug for RhymeNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RhymeNet")
            .field("device", &format!("{:?}", self.device))
            .field("embedding_dim", &self.dims.embedding_dim)
            .finish()
    }
}

impl RhymeNet {
    /// Loads weights from the safetensors file named by `config`.
    pub fn load(config: RhymeNetConfig) -> Result<Self, RhymeNetError> {
        if let Err(reason) = config.validate() {
            return Err(RhymeNetError::InvalidConfig { reason });
        }

        if !config.weights_path.exists() {
            return Err(RhymeNetError::WeightsNotFound {
                path: config.weights_path.clone(),
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for rhyme net");

        info!(
            weights_path = %config.weights_path.display(),
            embedding_dim = config.embedding_dim,
            "Loading rhyme net"
        );

        // SAFETY: the weights file is treated as immutable for the life of the process.
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[&config.weights_path], DType::F32, &device)
        }
        .map_err(|e| RhymeNetError::ModelLoadFailed {
            reason: format!("Failed to map weights: {}", e),
        })?;

        Self::from_var_builder(vb, config.embedding_dim, device)
    }

    /// Builds the network from an arbitrary variable source.
    ///
    /// Useful for weights held in memory (e.g. `VarBuilder::from_tensors`).
    pub fn from_var_builder(
        vb: VarBuilder,
        embedding_dim: usize,
        device: Device,
    ) -> Result<Self, RhymeNetError> {
        let dims = DimConfig::new(embedding_dim);
        dims.validate()
            .map_err(|e| RhymeNetError::InvalidConfig {
                reason: e.to_string(),
            })?;

        let model =
            PairMlp::load(vb, dims.pair_dim()).map_err(|e| RhymeNetError::ModelLoadFailed {
                reason: format!("Failed to build network: {}", e),
            })?;

        Ok(Self {
            device,
            dims,
            model,
        })
    }

    /// Network with every weight and bias set to zero; scores every pair `0.5`.
    pub fn zeros(embedding_dim: usize) -> Result<Self, RhymeNetError> {
        let device = Device::Cpu;
        let vb = VarBuilder::zeros(DType::F32, &device);
        Self::from_var_builder(vb, embedding_dim, device)
    }

    /// Scores one ordered pair.
    pub fn score(&self, base: &[f32], candidate: &[f32]) -> Result<f32, RhymeNetError> {
        let scores = self.score_batch(base, &[candidate])?;
        scores
            .first()
            .copied()
            .ok_or_else(|| RhymeNetError::InferenceFailed {
                reason: "network produced no output".to_string(),
            })
    }

    /// Scores `base` against each candidate in a single forward pass.
    pub fn score_batch(
        &self,
        base: &[f32],
        candidates: &[&[f32]],
    ) -> Result<Vec<f32>, RhymeNetError> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        self.check_dim(base.len())?;
        let pair_dim = self.dims.pair_dim();
        let mut rows = Vec::with_capacity(candidates.len() * pair_dim);
        for candidate in candidates {
            self.check_dim(candidate.len())?;
            rows.extend_from_slice(base);
            rows.extend_from_slice(candidate);
        }

        let input = Tensor::from_vec(rows, (candidates.len(), pair_dim), &self.device)?;
        let output = self.model.forward_t(&input, false)?;
        let scores = output.flatten_all()?.to_vec1::<f32>()?;

        debug!(batch = candidates.len(), "Rhyme net forward pass");

        Ok(scores)
    }

    pub fn embedding_dim(&self) -> usize {
        self.dims.embedding_dim
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn check_dim(&self, actual: usize) -> Result<(), RhymeNetError> {
        if actual != self.dims.embedding_dim {
            return Err(RhymeNetError::DimensionMismatch {
                expected: self.dims.embedding_dim,
                actual,
            });
        }
        Ok(())
    }
}
