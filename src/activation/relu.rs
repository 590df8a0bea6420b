/// Rectified linear activation, `max(x, 0)`.
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// ReLU derivative evaluated on the activated value.
///
/// The activation is non-negative and positive exactly where the
/// pre-activation sum is, so the derivative can be read off the output.
/// Defined as 0 at the boundary.
pub fn relu_derivative(output: f64) -> f64 {
    if output > 0.0 { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_negative_sums() {
        assert_eq!(relu(-3.5), 0.0);
        assert_eq!(relu(2.25), 2.25);
    }

    #[test]
    fn zero_is_inactive() {
        assert_eq!(relu(0.0), 0.0);
        assert_eq!(relu_derivative(0.0), 0.0);
    }

    #[test]
    fn derivative_is_step() {
        assert_eq!(relu_derivative(1e-12), 1.0);
        assert_eq!(relu_derivative(7.0), 1.0);
        assert_eq!(relu_derivative(-1.0), 0.0);
    }
}
