use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::ConfigError;

/// Layer widths of a one-hidden-layer network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub input_width: usize,
    pub hidden_width: usize,
    pub output_width: usize,
}

/// Hyperparameters for a training run.
///
/// Missing fields fall back to 10000 epochs, a learning rate of 0.01 and an
/// entropy-seeded generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    /// Seed for initialization and shuffling; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            epochs: 10_000,
            learning_rate: 0.01,
            seed: None,
        }
    }
}

/// Parallel input/target samples.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

/// A complete, serializable description of one experiment: the network shape,
/// how to train it and optionally what to train it on.
///
/// Only the description is stored, never trained parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSpec {
    /// Human-readable name, used in logs and reports.
    pub name: String,
    pub topology: Topology,
    #[serde(default)]
    pub training: TrainingConfig,
    #[serde(default)]
    pub dataset: Option<Dataset>,
}

impl ExperimentSpec {
    /// Two-input XOR with three hidden nodes, 10000 epochs at rate 0.01.
    pub fn xor() -> ExperimentSpec {
        ExperimentSpec {
            name: "xor".to_string(),
            topology: Topology { input_width: 2, hidden_width: 3, output_width: 1 },
            training: TrainingConfig::default(),
            dataset: Some(Dataset {
                inputs: vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]],
                targets: vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]],
            }),
        }
    }

    /// Checks that the experiment can be run as described.
    ///
    /// The network itself tolerates mismatched widths; this is for catching
    /// mistakes in hand-written files before a long training run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.topology;
        for (width, name) in [
            (t.input_width, "input"),
            (t.hidden_width, "hidden"),
            (t.output_width, "output"),
        ] {
            if width == 0 {
                return Err(ConfigError::ZeroWidth(name));
            }
        }

        let rate = self.training.learning_rate;
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidLearningRate(rate));
        }

        if let Some(dataset) = &self.dataset {
            check_widths(&dataset.inputs, "input", t.input_width)?;
            check_widths(&dataset.targets, "target", t.output_width)?;
        }
        Ok(())
    }

    /// Serializes the experiment to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes an experiment from a JSON file. The result is not validated.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<ExperimentSpec, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

fn check_widths(samples: &[Vec<f64>], kind: &'static str, expected: usize) -> Result<(), ConfigError> {
    match samples.iter().position(|s| s.len() != expected) {
        Some(index) => Err(ConfigError::SampleWidth {
            index,
            kind,
            expected,
            got: samples[index].len(),
        }),
        None => Ok(()),
    }
}
