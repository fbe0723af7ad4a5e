mod read;

use crate::statistics::Statistic;
use std::iter::Iterator;

pub use read::SampleError;

/// An owned, ordered sequence of observations.
///
/// One `Sample` holds one draw: the simulation layer creates a fresh sample
/// per replication and drops it after the statistic is computed.
#[derive(Debug, Clone, Default)]
pub struct Sample<T> {
    pub data: Vec<T>,
}

impl<T> Sample<T> {
    /// Create a new sample from raw data
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get the number of observations in the sample
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the sample contains no observations
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Estimate a statistic from the sample data
    pub fn estimate<Output>(&self, statistic: impl Statistic<Self, Output>) -> Output
    where
        Self: AsRef<[T]>,
        T: Clone,
    {
        statistic.compute(self)
    }
}

impl<T> FromIterator<T> for Sample<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sample::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sample<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<T> AsRef<[T]> for Sample<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

/// Collect the first `n` items of any iterator into a [`Sample`].
pub trait SamplingIterator: Iterator {
    fn sample(self, n: usize) -> Sample<Self::Item>
    where
        Self: Sized,
    {
        self.take(n).collect()
    }
}

impl<I: Iterator> SamplingIterator for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::Mean;
    use approx::assert_abs_diff_eq;

    #[test]
    fn collect_and_estimate() {
        let sample: Sample<f64> = (1..=5).map(f64::from).collect();
        assert_eq!(sample.len(), 5);
        assert_abs_diff_eq!(sample.estimate(Mean), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn sampling_iterator_truncates() {
        let sample = std::iter::repeat(1.0_f64).sample(7);
        assert_eq!(sample.len(), 7);
    }
}
