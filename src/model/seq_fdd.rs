use burn::nn::{Linear, LinearConfig, Relu};
use burn::prelude::*;

/// Sequential feed-forward network for per-frame classification.
///
/// ```text
/// Input:  [batch, input_dim]   (feature frame)
/// FC1:    input_dim -> hidden_dim, ReLU
/// FC2:    hidden_dim -> hidden_dim, ReLU
/// FC3:    hidden_dim -> output_dim  (class logits)
/// ```
#[derive(Module, Debug)]
pub struct SeqFdd<B: Backend> {
    pub fc1: Linear<B>,
    pub fc2: Linear<B>,
    pub fc3: Linear<B>,
    pub relu: Relu,
}

#[derive(Config, Debug)]
pub struct SeqFddConfig {
    pub input_dim: usize,
    pub hidden_dim: usize,
    pub output_dim: usize,
}

impl SeqFddConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SeqFdd<B> {
        SeqFdd {
            fc1: LinearConfig::new(self.input_dim, self.hidden_dim).init(device),
            fc2: LinearConfig::new(self.hidden_dim, self.hidden_dim).init(device),
            fc3: LinearConfig::new(self.hidden_dim, self.output_dim).init(device),
            relu: Relu::new(),
        }
    }
}

impl<B: Backend> SeqFdd<B> {
    /// Forward pass: input [batch, input_dim] -> output [batch, output_dim] logits.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.relu.forward(self.fc1.forward(input));
        let x = self.relu.forward(self.fc2.forward(x));
        self.fc3.forward(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_network_output_shape() {
        let device = Default::default();
        let config = SeqFddConfig::new(40, 256, 10);
        let network = config.init::<TestBackend>(&device);

        let input = Tensor::zeros([2, 40], &device);
        let output = network.forward(input);
        assert_eq!(output.shape().dims, [2, 10]);
    }

    #[test]
    fn test_network_single_input() {
        let device = Default::default();
        let config = SeqFddConfig::new(40, 256, 10);
        let network = config.init::<TestBackend>(&device);

        let input = Tensor::zeros([1, 40], &device);
        let output = network.forward(input);
        assert_eq!(output.shape().dims, [1, 10]);
    }
}
