//! Ordered list of isovalues.
//!
//! Values are contoured in list order, and output points, lines and scalars
//! appear in that same order.

use serde::{Deserialize, Serialize};

/// Ordered contour values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContourValues(Vec<f64>);

impl Default for ContourValues {
    /// A single contour at `0.0`.
    fn default() -> Self {
        Self(vec![0.0])
    }
}

impl ContourValues {
    /// An empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self(values.into_iter().collect())
    }

    /// Set value `i`, growing the list with `0.0` as needed.
    pub fn set_value(&mut self, i: usize, value: f64) {
        if i >= self.0.len() {
            self.0.resize(i + 1, 0.0);
        }
        self.0[i] = value;
    }

    pub fn value(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Truncate, or extend with `0.0`, to exactly `n` values.
    pub fn set_number_of_contours(&mut self, n: usize) {
        self.0.resize(n, 0.0);
    }

    /// Replace the list with `n` evenly spaced values over `[lo, hi]`.
    ///
    /// `n == 1` yields `lo`; `n == 0` clears the list.
    pub fn generate_values(&mut self, n: usize, range: [f64; 2]) {
        let [lo, hi] = range;
        self.0 = match n {
            0 => Vec::new(),
            1 => vec![lo],
            _ => {
                let step = (hi - lo) / (n - 1) as f64;
                (0..n).map(|k| lo + k as f64 * step).collect()
            }
        };
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<f64>> for ContourValues {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_zero() {
        assert_eq!(ContourValues::default().values(), &[0.0]);
        assert!(ContourValues::new().is_empty());
    }

    #[test]
    fn set_value_grows_with_zeros() {
        let mut v = ContourValues::new();
        v.set_value(2, 5.0);
        assert_eq!(v.values(), &[0.0, 0.0, 5.0]);
        v.set_value(0, -1.0);
        assert_eq!(v.value(0), Some(-1.0));
        assert_eq!(v.value(3), None);
    }

    #[test]
    fn generate_spans_range_inclusive() {
        let mut v = ContourValues::new();
        v.generate_values(5, [0.0, 1.0]);
        assert_eq!(v.values(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
        v.generate_values(1, [3.0, 9.0]);
        assert_eq!(v.values(), &[3.0]);
        v.generate_values(0, [3.0, 9.0]);
        assert!(v.is_empty());
    }

    #[test]
    fn resize_keeps_prefix() {
        let mut v = ContourValues::from_values([1.0, 2.0, 3.0]);
        v.set_number_of_contours(2);
        assert_eq!(v.values(), &[1.0, 2.0]);
        v.set_number_of_contours(3);
        assert_eq!(v.values(), &[1.0, 2.0, 0.0]);
    }
}
