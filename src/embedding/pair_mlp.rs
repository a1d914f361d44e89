use candle::{Result, Tensor};
use candle_core as candle;
use candle_nn::{Dropout, Linear, Module, ModuleT, VarBuilder};

use crate::constants::{RHYME_NET_BOTTLENECK_DIM, RHYME_NET_DROPOUT, RHYME_NET_HIDDEN_DIM};

/// `Linear(2d, 64) → ReLU → Dropout → Linear(64, 32) → ReLU → Dropout → Linear(32, 1) → Sigmoid`.
///
/// Tensor names (`fc1.weight`, `fc1.bias`, ...) match a PyTorch `state_dict` exported
/// to safetensors, so existing weight files load without renaming.
pub struct PairMlp {
    fc1: Linear,
    fc2: Linear,
    fc3: Linear,
    dropout: Dropout,
}

impl PairMlp {
    pub fn load(vb: VarBuilder, input_dim: usize) -> Result<Self> {
        let fc1 = candle_nn::linear(input_dim, RHYME_NET_HIDDEN_DIM, vb.pp("fc1"))?;
        let fc2 = candle_nn::linear(
            RHYME_NET_HIDDEN_DIM,
            RHYME_NET_BOTTLENECK_DIM,
            vb.pp("fc2"),
        )?;
        let fc3 = candle_nn::linear(RHYME_NET_BOTTLENECK_DIM, 1, vb.pp("fc3"))?;

        Ok(Self {
            fc1,
            fc2,
            fc3,
            dropout: Dropout::new(RHYME_NET_DROPOUT),
        })
    }
}

impl ModuleT for PairMlp {
    fn forward_t(&self, xs: &Tensor, train: bool) -> Result<Tensor> {
        let xs = self.fc1.forward(xs)?.relu()?;
        let xs = self.dropout.forward(&xs, train)?;
        let xs = self.fc2.forward(&xs)?.relu()?;
        let xs = self.dropout.forward(&xs, train)?;
        candle_nn::ops::sigmoid(&self.fc3.forward(&xs)?)
    }
}
