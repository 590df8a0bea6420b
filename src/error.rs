use thiserror::Error;

/// Failures while loading, saving or validating an [`ExperimentSpec`].
///
/// [`ExperimentSpec`]: crate::network::spec::ExperimentSpec
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed experiment JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid topology: {0} width must be positive")]
    ZeroWidth(&'static str),

    #[error("Invalid learning rate: {0}. Must be finite and non-negative.")]
    InvalidLearningRate(f64),

    #[error("Dataset sample {index}: {kind} has {got} values, topology expects {expected}")]
    SampleWidth {
        index: usize,
        kind: &'static str,
        expected: usize,
        got: usize,
    },
}
