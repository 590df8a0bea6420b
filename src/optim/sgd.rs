use crate::layers::dense::Layer;

/// Plain online gradient descent: no momentum, no regularization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `layer` using its current error and the input it
    /// was last fed.
    pub fn step(&self, layer: &mut Layer, input: &[f64]) {
        layer.update(input, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::seeded;

    #[test]
    fn step_matches_layer_update() {
        let mut a = Layer::new(2, 2, &mut seeded(8));
        a.feed_from(&[1.0, 1.0]);
        a.backpropagate(&[0.0, 3.0]);
        let mut b = a.clone();

        Sgd::new(0.05).step(&mut a, &[1.0, 1.0]);
        b.update(&[1.0, 1.0], 0.05);

        assert_eq!(a.bias, b.bias);
        assert_eq!(a.weights, b.weights);
    }
}
