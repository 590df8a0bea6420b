use std::io::{self, Write};

use crate::{layers::dense::Layer, network::network::Network};

/// Values strictly inside `(-threshold, threshold)` are printed as `0`.
pub const DEFAULT_THRESHOLD: f64 = 0.001;

const RULE: &str = "--------------------------------------------------------------------------------";

/// Space-separated values on one line, with near-zero values printed as `0`.
pub fn format_values(values: &[f64], threshold: f64) -> String {
    values.iter()
        .map(|&v| if v > -threshold && v < threshold { "0".to_string() } else { v.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dumps a layer's shape, working buffers and parameters.
pub fn write_layer<W: Write>(w: &mut W, layer: &Layer, threshold: f64) -> io::Result<()> {
    writeln!(w, "{RULE}")?;
    writeln!(w, "Number of nodes: {}", layer.size())?;
    writeln!(w, "Number of weights per node: {}", layer.input_size())?;
    writeln!(w)?;
    writeln!(w, "Output: {}", format_values(&layer.output, threshold))?;
    writeln!(w, "Error: {}", format_values(&layer.error, threshold))?;
    writeln!(w, "Bias: {}", format_values(&layer.bias, threshold))?;
    writeln!(w)?;
    writeln!(w, "Weights:")?;
    for (i, row) in layer.weights.iter_rows().enumerate() {
        writeln!(w, "Node {}: {}", i + 1, format_values(row, threshold))?;
    }
    writeln!(w, "{RULE}")?;
    writeln!(w)
}

/// Runs `network` on every input and writes each input next to its prediction.
pub fn write_predictions<W, I>(
    w: &mut W,
    network: &mut Network,
    inputs: &[I],
    threshold: f64,
) -> io::Result<()>
where
    W: Write,
    I: AsRef<[f64]>,
{
    writeln!(w, "{RULE}")?;
    for (n, input) in inputs.iter().enumerate() {
        let input = input.as_ref();
        if n > 0 {
            writeln!(w)?;
        }
        writeln!(w, "Input: {}", format_values(input, threshold))?;
        let prediction = network.predict(input);
        writeln!(w, "Output: {}", format_values(prediction, threshold))?;
    }
    writeln!(w, "{RULE}")?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{matrix::Matrix, random::seeded};

    #[test]
    fn near_zero_values_print_as_zero() {
        let line = format_values(&[0.0005, -0.0009, 0.5, -2.0, 0.001], DEFAULT_THRESHOLD);
        assert_eq!(line, "0 0 0.5 -2 0.001");
    }

    #[test]
    fn empty_values_give_empty_line() {
        assert_eq!(format_values(&[], DEFAULT_THRESHOLD), "");
    }

    #[test]
    fn layer_report_lists_every_node() {
        let layer = Layer {
            output: vec![1.5, 0.0],
            error: vec![0.0, 0.0],
            bias: vec![0.25, 0.75],
            weights: Matrix { rows: 2, cols: 1, data: vec![vec![0.5], vec![-1.0]] },
        };
        let mut buf = Vec::new();
        write_layer(&mut buf, &layer, DEFAULT_THRESHOLD).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Number of nodes: 2\n"));
        assert!(text.contains("Number of weights per node: 1\n"));
        assert!(text.contains("Output: 1.5 0\n"));
        assert!(text.contains("Bias: 0.25 0.75\n"));
        assert!(text.contains("Node 1: 0.5\nNode 2: -1\n"));
    }

    #[test]
    fn prediction_report_pairs_inputs_with_outputs() {
        let mut network = Network::new(2, 3, 1, &mut seeded(5));
        let inputs = [[0.0, 1.0], [1.0, 1.0]];
        let mut buf = Vec::new();
        write_predictions(&mut buf, &mut network, &inputs, DEFAULT_THRESHOLD).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.matches("Input: ").count(), 2);
        assert_eq!(text.matches("Output: ").count(), 2);
        assert!(text.starts_with(RULE));
        assert!(text.contains("Input: 0 1\nOutput: "));
        assert!(text.ends_with(&format!("{RULE}\n\n")));
    }
}
