//! Descriptive statistics over numeric columns.
//!
//! Every function takes a borrowed slice and never reorders it; order
//! statistics sort a private copy. Empty input is an error instead of NaN.

use super::error::{StatsError, StatsResult};

/// Arithmetic mean
///
/// # Examples
/// ```
/// use engine::shared::stats::mean;
/// assert_eq!(mean(&[10.0, 20.0, 30.0]).unwrap(), 20.0);
/// ```
pub fn mean(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("mean"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value; average of the two middle values for even lengths
pub fn median(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput("median"));
    }
    let sorted = sorted_copy(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Population standard deviation (divides by n, not n - 1)
pub fn standard_deviation(values: &[f64]) -> StatsResult<f64> {
    let avg = mean(values).map_err(|_| StatsError::EmptyInput("standard_deviation"))?;
    let squared: Vec<f64> = values.iter().map(|v| (v - avg).powi(2)).collect();
    let variance = mean(&squared)?;
    Ok(variance.sqrt())
}

/// Percentile with linear interpolation between closest ranks
///
/// The fractional rank is `p / 100 * (n - 1)`; the result interpolates the
/// two neighbouring sorted values by its fractional part.
///
/// # Examples
/// ```
/// use engine::shared::stats::percentile;
/// assert_eq!(percentile(&[10.0, 20.0, 30.0, 40.0], 25.0).unwrap(), 17.5);
/// ```
pub fn percentile(values: &[f64], p: f64) -> StatsResult<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidArgument(format!(
            "percentile must be within [0, 100], got {}",
            p
        )));
    }
    if values.is_empty() {
        return Err(StatsError::EmptyInput("percentile"));
    }

    let sorted = sorted_copy(values);
    let index = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }
    Ok(sorted[lower] * (upper as f64 - index) + sorted[upper] * (index - lower as f64))
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0]).unwrap(), 20.0);
        assert_eq!(mean(&[7.5]).unwrap(), 7.5);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[30.0, 10.0, 20.0]).unwrap(), 20.0);
        assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]).unwrap(), 25.0);
        assert_eq!(median(&[40.0, 10.0, 30.0, 20.0]).unwrap(), 25.0);
    }

    #[test]
    fn test_median_keeps_caller_order() {
        let values = vec![3.0, 1.0, 2.0];
        median(&values).unwrap();
        percentile(&values, 50.0).unwrap();
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_standard_deviation_is_population() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&values).unwrap() - 2.0).abs() < EPS);
        assert_eq!(standard_deviation(&[42.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [10.0, 20.0, 30.0, 40.0];
        assert!((percentile(&values, 25.0).unwrap() - 17.5).abs() < EPS);
        assert!((percentile(&values, 90.0).unwrap() - 37.0).abs() < EPS);
        assert_eq!(percentile(&values, 0.0).unwrap(), 10.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 40.0);
    }

    #[test]
    fn test_percentile_single_element() {
        for p in [0.0, 12.5, 50.0, 99.9, 100.0] {
            assert_eq!(percentile(&[5.0], p).unwrap(), 5.0);
        }
    }

    #[test]
    fn test_percentile_rejects_out_of_range() {
        let values = [1.0, 2.0];
        assert!(matches!(percentile(&values, -0.1), Err(StatsError::InvalidArgument(_))));
        assert!(matches!(percentile(&values, 100.1), Err(StatsError::InvalidArgument(_))));
        assert!(matches!(percentile(&values, f64::NAN), Err(StatsError::InvalidArgument(_))));
        // range is checked before emptiness
        assert!(matches!(percentile(&[], 150.0), Err(StatsError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_input_errors() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyInput("mean")));
        assert_eq!(median(&[]), Err(StatsError::EmptyInput("median")));
        assert_eq!(
            standard_deviation(&[]),
            Err(StatsError::EmptyInput("standard_deviation"))
        );
        assert_eq!(percentile(&[], 50.0), Err(StatsError::EmptyInput("percentile")));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1.0e6..1.0e6f64, 1..200)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn median_equals_50th_percentile(values in finite_vec()) {
            let m = median(&values).unwrap();
            let p = percentile(&values, 50.0).unwrap();
            prop_assert!((m - p).abs() <= 1e-6 * (1.0 + m.abs()));
        }

        #[test]
        fn standard_deviation_non_negative(values in finite_vec()) {
            prop_assert!(standard_deviation(&values).unwrap() >= 0.0);
        }

        #[test]
        fn percentile_bounds_are_min_and_max(values in finite_vec()) {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(percentile(&values, 0.0).unwrap(), min);
            prop_assert_eq!(percentile(&values, 100.0).unwrap(), max);
        }

        #[test]
        fn percentile_stays_within_range(values in finite_vec(), p in 0.0..=100.0f64) {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let v = percentile(&values, p).unwrap();
            prop_assert!(v >= min - 1e-6 && v <= max + 1e-6);
        }
    }
}
