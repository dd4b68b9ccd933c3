/// Arithmetic mean of a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    values.iter().sum::<f64>() / values.len() as f64
}

// Population standard deviation (ddof = 0), matching the convention used by
// charting libraries for volatility bands.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    debug_assert!(!values.is_empty());
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_simple_values() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_population_std_dev_known_case() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with ddof=0 is 4.0
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_eq!(m, 5.0);
        assert!((population_std_dev(&values, m) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_std_dev_of_constant_window_is_zero() {
        let values = [3.0; 20];
        assert_eq!(population_std_dev(&values, mean(&values)), 0.0);
    }
}
