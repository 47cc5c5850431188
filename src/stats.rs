pub fn average(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

pub fn quartile(values: &mut [f64], percentile: f64) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let pos = (values.len() - 1) as f64 * percentile;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;

    if base + 1 < values.len() {
        values[base] + rest * (values[base + 1] - values[base])
    } else {
        values[base]
    }
}

// Callers must pass a non-empty, strictly positive slice.
pub fn geometric_mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());
    debug_assert!(values.iter().all(|v| *v > 0.0));

    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    (log_sum / values.len() as f64).exp()
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometric_mean_of_doubling_series() {
        let mean = geometric_mean(&[10.0, 20.0, 40.0]);
        assert!((mean - 20.0).abs() < 1e-9);
        assert_eq!(round3(mean), 20.0);
    }

    #[test]
    fn geometric_mean_of_single_value() {
        assert!((geometric_mean(&[123.456]) - 123.456).abs() < 1e-9);
    }

    #[test]
    fn rounds_to_three_decimals() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(66.66666666666667), 66.667);
    }

    #[test]
    fn average_of_values() {
        assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn quartile_interpolates_between_values() {
        assert_eq!(quartile(&mut [1.0, 2.0, 3.0, 4.0], 0.5), 2.5);
        assert_eq!(quartile(&mut [4.0, 1.0, 3.0, 2.0], 1.0), 4.0);
    }
}
