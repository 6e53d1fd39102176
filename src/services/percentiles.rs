/// Percentile helpers for already-sorted slices.
///
/// - Empty input => `None`.
/// - `percentile <= 0` => first element.
/// - `percentile >= 100` => last element.
/// - Otherwise we compute a position within `[0, len-1]` and interpolate
///   linearly between the two adjacent ranked values.

/// Returns the interpolated percentile value from a slice that is already
/// sorted in ascending order.
pub fn interpolated_sorted(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    if sorted_values.is_empty() {
        return None;
    }
    if percentile <= 0.0 {
        return sorted_values.first().copied();
    }
    if percentile >= 100.0 {
        return sorted_values.last().copied();
    }

    let position = (percentile / 100.0) * (sorted_values.len() as f64 - 1.0);
    let lower = position.floor() as usize;
    let fraction = position - position.floor();
    if lower + 1 >= sorted_values.len() {
        return sorted_values.last().copied();
    }

    let below = sorted_values[lower];
    let above = sorted_values[lower + 1];
    Some(below + fraction * (above - below))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolated_sorted_returns_none_for_empty_input() {
        let values: [f64; 0] = [];
        assert_eq!(interpolated_sorted(&values, 50.0), None);
    }

    #[test]
    fn interpolated_sorted_clamps_to_first_and_last() {
        let values = [10.0, 20.0, 30.0];
        assert_eq!(interpolated_sorted(&values, -1.0), Some(10.0));
        assert_eq!(interpolated_sorted(&values, 0.0), Some(10.0));
        assert_eq!(interpolated_sorted(&values, 100.0), Some(30.0));
        assert_eq!(interpolated_sorted(&values, 1000.0), Some(30.0));
    }

    #[test]
    fn interpolated_sorted_hits_exact_ranks() {
        // len=5 => indices 0..=4; p25 lands exactly on index 1.
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(interpolated_sorted(&values, 25.0), Some(1.0));
        assert_eq!(interpolated_sorted(&values, 50.0), Some(2.0));
        assert_eq!(interpolated_sorted(&values, 75.0), Some(3.0));
    }

    #[test]
    fn interpolated_sorted_interpolates_between_ranks() {
        // len=2 => p85 position = 0.85 => 10 + 0.85 * 10.
        let values = [10.0, 20.0];
        assert_eq!(interpolated_sorted(&values, 85.0), Some(18.5));
    }

    #[test]
    fn interpolated_sorted_single_element() {
        let values = [7.0];
        assert_eq!(interpolated_sorted(&values, 50.0), Some(7.0));
        assert_eq!(interpolated_sorted(&values, 95.0), Some(7.0));
    }
}
