pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod report;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::random::{seeded, UniformSource};
pub use layers::dense::Layer;
pub use network::network::Network;
pub use network::spec::{Dataset, ExperimentSpec, Topology, TrainingConfig};
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::epoch_stats::EpochStats;
pub use error::ConfigError;
