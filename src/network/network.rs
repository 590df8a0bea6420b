use tracing::{debug, trace, warn};

use crate::{
    layers::dense::Layer,
    loss::mse::MseLoss,
    math::random::UniformSource,
    network::spec::Topology,
    optim::sgd::Sgd,
    train::{epoch_stats::EpochStats, shuffle::shuffle_order},
};

/// A ReLU network with exactly one hidden layer, trained online by
/// backpropagation.
///
/// The network owns both layers and a private copy of its training set.
/// Randomness is never global: construction and training each take the
/// generator to draw from.
#[derive(Debug, Clone)]
pub struct Network {
    hidden: Layer,
    output: Layer,
    training_inputs: Vec<Vec<f64>>,
    training_targets: Vec<Vec<f64>>,
    sample_order: Vec<usize>,
}

impl Network {
    /// Builds a network with `num_inputs` inputs, `num_hidden` hidden nodes and
    /// `num_outputs` output nodes. All parameters are drawn from U[0, 1).
    pub fn new<R: UniformSource + ?Sized>(
        num_inputs: usize,
        num_hidden: usize,
        num_outputs: usize,
        rng: &mut R,
    ) -> Network {
        let hidden = Layer::new(num_hidden, num_inputs, rng);
        let output = Layer::new(num_outputs, num_hidden, rng);
        debug!(num_inputs, num_hidden, num_outputs, "network created");

        Network {
            hidden,
            output,
            training_inputs: Vec::new(),
            training_targets: Vec::new(),
            sample_order: Vec::new(),
        }
    }

    pub fn from_topology<R: UniformSource + ?Sized>(topology: &Topology, rng: &mut R) -> Network {
        Network::new(topology.input_width, topology.hidden_width, topology.output_width, rng)
    }

    pub fn num_inputs(&self) -> usize {
        self.hidden.input_size()
    }

    pub fn num_hidden(&self) -> usize {
        self.hidden.size()
    }

    pub fn num_outputs(&self) -> usize {
        self.output.size()
    }

    pub fn num_training_sets(&self) -> usize {
        self.sample_order.len()
    }

    pub fn hidden(&self) -> &Layer {
        &self.hidden
    }

    pub fn output(&self) -> &Layer {
        &self.output
    }

    pub fn training_inputs(&self) -> &[Vec<f64>] {
        &self.training_inputs
    }

    pub fn training_targets(&self) -> &[Vec<f64>] {
        &self.training_targets
    }

    /// Current visiting order of the training samples.
    pub fn sample_order(&self) -> &[usize] {
        &self.sample_order
    }

    /// Replaces the stored training set.
    ///
    /// Only the first `min(inputs.len(), targets.len())` pairs are kept; the
    /// surplus of the longer side is dropped. The sample order is reset to
    /// `0, 1, ..., K-1`.
    pub fn set_training_data<I, T>(&mut self, inputs: &[I], targets: &[T])
    where
        I: AsRef<[f64]>,
        T: AsRef<[f64]>,
    {
        let num_sets = inputs.len().min(targets.len());
        if inputs.len() != targets.len() {
            warn!(
                inputs = inputs.len(),
                targets = targets.len(),
                kept = num_sets,
                "training data lengths differ, truncating"
            );
        }

        self.training_inputs = inputs[..num_sets].iter().map(|x| x.as_ref().to_vec()).collect();
        self.training_targets = targets[..num_sets].iter().map(|y| y.as_ref().to_vec()).collect();
        self.sample_order = (0..num_sets).collect();
        debug!(num_sets, "training data stored");
    }

    /// Forward pass through both layers.
    ///
    /// The returned slice is the output layer's own buffer; it borrows the
    /// network, so it cannot outlive the next `predict` or `train` call. Use
    /// `.to_vec()` to keep a copy.
    pub fn predict(&mut self, input: &[f64]) -> &[f64] {
        let hidden_out = self.hidden.feed_from(input);
        self.output.feed_from(hidden_out)
    }

    /// Trains for `epochs` passes over the stored training set and returns the
    /// mean squared error of the last epoch (0.0 when nothing ran).
    pub fn train<R: UniformSource + ?Sized>(
        &mut self,
        epochs: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> f64 {
        self.train_with_progress(epochs, learning_rate, rng, |_| {})
    }

    /// Same as [`Network::train`], calling `on_epoch` after every completed
    /// epoch.
    ///
    /// Each epoch first reshuffles the sample order, then runs one
    /// forward/backward/update step per sample in that order.
    pub fn train_with_progress<R, F>(
        &mut self,
        epochs: usize,
        learning_rate: f64,
        rng: &mut R,
        mut on_epoch: F,
    ) -> f64
    where
        R: UniformSource + ?Sized,
        F: FnMut(&EpochStats),
    {
        let optimizer = Sgd::new(learning_rate);
        let num_sets = self.num_training_sets();
        debug!(epochs, learning_rate, num_sets, "training started");

        let mut last_loss = 0.0;
        for epoch in 1..=epochs {
            shuffle_order(&mut self.sample_order, rng);

            let mut total_loss = 0.0;
            for &k in &self.sample_order {
                total_loss += optimize(
                    &mut self.hidden,
                    &mut self.output,
                    &self.training_inputs[k],
                    &self.training_targets[k],
                    &optimizer,
                );
            }
            last_loss = if num_sets == 0 { 0.0 } else { total_loss / num_sets as f64 };
            trace!(epoch, loss = last_loss, "epoch finished");

            on_epoch(&EpochStats {
                epoch,
                total_epochs: epochs,
                train_loss: last_loss,
            });
        }

        debug!(epochs, final_loss = last_loss, "training finished");
        last_loss
    }

    /// Mean squared error over the stored training set, without training.
    pub fn evaluate(&mut self) -> f64 {
        let num_sets = self.num_training_sets();
        if num_sets == 0 {
            return 0.0;
        }
        let mut total = 0.0;
        for (input, target) in self.training_inputs.iter().zip(&self.training_targets) {
            let hidden_out = self.hidden.feed_from(input);
            total += MseLoss::loss(self.output.feed_from(hidden_out), target);
        }
        total / num_sets as f64
    }
}

/// One training step on a single sample. Returns the sample's squared error
/// as seen by the forward pass, before the update.
///
/// Both error signals are computed before either layer is updated: the hidden
/// error reads the output layer's pre-update weights.
fn optimize(
    hidden: &mut Layer,
    output: &mut Layer,
    input: &[f64],
    reference: &[f64],
    optimizer: &Sgd,
) -> f64 {
    hidden.feed_from(input);
    output.feed_from(&hidden.output);
    let loss = MseLoss::loss(&output.output, reference);

    output.backpropagate(reference);
    hidden.backpropagate_from(output);

    optimizer.step(output, &hidden.output);
    optimizer.step(hidden, input);
    loss
}
