pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE over the overlapping prefix: mean((predicted - expected)²).
    /// Zero when there is nothing to compare.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len().min(expected.len());
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_squared_deviations() {
        assert_eq!(MseLoss::loss(&[1.0, 3.0], &[0.0, 1.0]), 2.5);
    }

    #[test]
    fn mismatched_lengths_compare_prefix() {
        assert_eq!(MseLoss::loss(&[2.0], &[0.0, 100.0]), 4.0);
        assert_eq!(MseLoss::loss(&[], &[1.0]), 0.0);
    }
}
