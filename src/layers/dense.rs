use crate::{
    activation::{relu, relu_derivative},
    math::{matrix::Matrix, random::UniformSource},
};

/// A fully connected ReLU layer.
///
/// Holds one bias and one weight row per node, plus the working buffers
/// `output` (valid after [`Layer::feed_from`]) and `error` (valid after one of
/// the backpropagate calls). All four always have `size()` entries.
///
/// Inputs of the wrong width are never an error: only the overlapping prefix
/// of the input and the weight row takes part in any computation.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub output: Vec<f64>,
    pub error: Vec<f64>,
    pub bias: Vec<f64>,
    pub weights: Matrix,
}

impl Layer {
    pub fn new<R: UniformSource + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        let mut layer = Layer::default();
        layer.resize(size, input_size, rng);
        layer
    }

    /// Reallocates the layer for `size` nodes of `input_size` weights each,
    /// discarding all prior state. Bias and weights are redrawn from U[0, 1);
    /// output and error are zeroed.
    pub fn resize<R: UniformSource + ?Sized>(&mut self, size: usize, input_size: usize, rng: &mut R) {
        self.output = vec![0.0; size];
        self.error = vec![0.0; size];

        // Bias and weight row of a node are drawn together, node by node.
        let mut bias = Vec::with_capacity(size);
        let mut weights = Matrix::zeros(size, input_size);
        for i in 0..size {
            bias.push(rng.next_uniform());
            for w in weights.row_mut(i) {
                *w = rng.next_uniform();
            }
        }
        self.bias = bias;
        self.weights = weights;
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.output.len()
    }

    /// Number of weights per node.
    pub fn input_size(&self) -> usize {
        self.weights.cols
    }

    /// Forward pass: `output[i] = relu(bias[i] + Σ input[j] * weights[i][j])`.
    ///
    /// Returns a view of the updated `output` buffer.
    pub fn feed_from(&mut self, input: &[f64]) -> &[f64] {
        for (i, out) in self.output.iter_mut().enumerate() {
            let sum = self.weights.row(i).iter()
                .zip(input)
                .fold(self.bias[i], |acc, (w, x)| acc + w * x);
            *out = relu(sum);
        }
        &self.output
    }

    /// Output-layer error: `(reference[i] - output[i]) * relu'(output[i])`.
    ///
    /// Nodes past the end of `reference` keep their previous error.
    pub fn backpropagate(&mut self, reference: &[f64]) {
        for ((err, &out), &target) in self.error.iter_mut().zip(&self.output).zip(reference) {
            *err = (target - out) * relu_derivative(out);
        }
    }

    /// Hidden-layer error, propagated back through `next_layer`'s weights:
    /// `(Σ_j next.error[j] * next.weights[j][i]) * relu'(output[i])`.
    ///
    /// `next_layer` must already hold its own error and its pre-update weights.
    /// Weight columns it lacks contribute nothing.
    pub fn backpropagate_from(&mut self, next_layer: &Layer) {
        for (i, (err, &out)) in self.error.iter_mut().zip(&self.output).enumerate() {
            let deviation: f64 = next_layer.error.iter()
                .enumerate()
                .map(|(j, e)| e * next_layer.weights.get(j, i).unwrap_or(0.0))
                .sum();
            *err = deviation * relu_derivative(out);
        }
    }

    /// Gradient step: `bias[i] += error[i] * lr`, `weights[i][j] += error[i] * lr * input[j]`.
    ///
    /// `error` already carries `target - output`, so the step is an addition.
    pub fn update(&mut self, input: &[f64], learning_rate: f64) {
        for (i, (bias, &err)) in self.bias.iter_mut().zip(&self.error).enumerate() {
            let delta = err * learning_rate;
            *bias += delta;
            for (w, x) in self.weights.row_mut(i).iter_mut().zip(input) {
                *w += delta * x;
            }
        }
    }
}
