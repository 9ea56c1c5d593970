//! Numeric helpers shared by the calculator, aggregator and ranking engine

/// Round to two decimal places, half away from zero.
///
/// Applied only to final percentages, never to intermediate ratios.
/// Non-finite input collapses to `0.0` so every computation stays total.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// `Some(value)` when it is a positive finite number.
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(12.345_000_1), 12.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn round2_is_total() {
        assert_eq!(round2(f64::NAN), 0.0);
        assert_eq!(round2(f64::INFINITY), 0.0);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[90.0, 110.0]), 100.0);
    }

    #[test]
    fn positive_filters_non_positive_values() {
        assert_eq!(positive(Some(4.0)), Some(4.0));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-2.0)), None);
        assert_eq!(positive(Some(f64::NAN)), None);
        assert_eq!(positive(None), None);
    }
}
