use burn::{
    config::Config,
    module::Module,
    nn::{
        loss::{MseLoss, Reduction},
        Linear, LinearConfig,
    },
    optim::{adaptor::OptimizerAdaptor, GradientsParams, Optimizer, Sgd, SgdConfig},
    tensor::{
        activation::sigmoid,
        backend::{AutodiffBackend, Backend},
        Tensor,
    },
};

use crate::{
    error::{self, Error},
    traits::{to_vec, ToTensor},
};

use super::Approximator;

/// The layers of an [`Mlp`]: sigmoid hidden layers followed by a linear output layer
#[derive(Module, Debug)]
pub struct Network<B: Backend> {
    hidden: Vec<Linear<B>>,
    output: Linear<B>,
}

impl<B: Backend> Network<B> {
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self
            .hidden
            .iter()
            .fold(input, |x, layer| sigmoid(layer.forward(x)));
        self.output.forward(x)
    }
}

/// Configuration for the [`Mlp`] approximator
#[derive(Config, Debug)]
pub struct MlpConfig {
    /// Length of the state vector
    pub inputs: usize,
    /// Number of actions
    pub outputs: usize,
    /// Number of hidden layers
    #[config(default = 1)]
    pub hidden_layers: usize,
    /// Neurons per hidden layer
    #[config(default = 6)]
    pub hidden_size: usize,
    /// SGD learning rate
    #[config(default = 0.2)]
    pub learning_rate: f64,
}

impl MlpConfig {
    /// Build a freshly initialized [`Mlp`] on `device`
    ///
    /// Fails with [`Error::Configuration`] if any layer would have zero width
    pub fn init<B: AutodiffBackend>(&self, device: &B::Device) -> error::Result<Mlp<B>> {
        if self.inputs == 0 || self.outputs == 0 {
            return Err(Error::config("mlp", "inputs and outputs must be nonzero"));
        }
        if self.hidden_layers > 0 && self.hidden_size == 0 {
            return Err(Error::config("mlp", "hidden_size must be nonzero"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::config("mlp", "learning_rate must be positive"));
        }

        let mut width = self.inputs;
        let hidden = (0..self.hidden_layers)
            .map(|_| {
                let layer = LinearConfig::new(width, self.hidden_size).init(device);
                width = self.hidden_size;
                layer
            })
            .collect();
        let output = LinearConfig::new(width, self.outputs).init(device);

        Ok(Mlp {
            network: Network { hidden, output },
            optimizer: SgdConfig::new().init(),
            loss: MseLoss::new(),
            device: device.clone(),
            inputs: self.inputs,
            outputs: self.outputs,
            learning_rate: self.learning_rate,
        })
    }
}

type SgdOptimizer<M, B> = OptimizerAdaptor<Sgd<<B as AutodiffBackend>::InnerBackend>, M, B>;

/// A small multilayer perceptron trained one sample at a time with SGD on the mean squared error
///
/// ### Generics
/// - `B`: A burn autodiff backend
pub struct Mlp<B: AutodiffBackend> {
    network: Network<B>,
    optimizer: SgdOptimizer<Network<B>, B>,
    loss: MseLoss<B>,
    device: B::Device,
    inputs: usize,
    outputs: usize,
    learning_rate: f64,
}

impl<B: AutodiffBackend> Mlp<B> {
    pub fn network(&self) -> &Network<B> {
        &self.network
    }

    fn check_state(&self, state: &[f32]) -> error::Result<()> {
        if state.len() != self.inputs {
            return Err(Error::approximator(format!(
                "expected a state of length {}, got {}",
                self.inputs,
                state.len()
            )));
        }
        Ok(())
    }
}

impl<B: AutodiffBackend> Approximator for Mlp<B> {
    fn predict(&self, state: &[f32]) -> error::Result<Vec<f32>> {
        self.check_state(state)?;
        let output = self.network.forward(state.to_tensor(&self.device));
        Ok(to_vec(output))
    }

    fn update(&mut self, state: &[f32], target: &[f32]) -> error::Result<()> {
        self.check_state(state)?;
        if target.len() != self.outputs {
            return Err(Error::approximator(format!(
                "expected a target of length {}, got {}",
                self.outputs,
                target.len()
            )));
        }

        let output = self.network.forward(state.to_tensor(&self.device));
        let target: Tensor<B, 2> = target.to_tensor(&self.device);
        let loss = self.loss.forward(output, target, Reduction::Mean);

        let grads = GradientsParams::from_grads(loss.backward(), &self.network);
        self.network = self
            .optimizer
            .step(self.learning_rate, self.network.clone(), grads);

        Ok(())
    }
}
