use rand::Rng;

use super::Re;
use crate::Sample;

/// With-replacement resampler (Efron's nonparametric bootstrap).
///
/// Each call to the iterator draws an n-length resample with replacement
/// from the source sample. The generator is owned by the iterator, so two
/// `Bootstrap` values seeded identically reproduce identical resample
/// streams regardless of what other streams are doing.
#[derive(Clone, Copy, Default)]
pub struct Bootstrap<R: Rng> {
    pub rng: R,
}

impl<R: Rng> Bootstrap<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<T: Copy, R: Rng + Clone> Re<Sample<T>> for Bootstrap<R> {
    type Item = Sample<T>;

    fn re(&self, sample: &Sample<T>) -> impl Iterator<Item = Self::Item> {
        BootstrapIter {
            data: &sample.data,
            rng: self.rng.clone(),
        }
    }
}

pub struct BootstrapIter<'a, T, R: Rng> {
    data: &'a [T],
    rng: R,
}

impl<'a, T: Copy, R: Rng> Iterator for BootstrapIter<'a, T, R> {
    type Item = Sample<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.data.len();
        if n == 0 {
            return Some(Sample::new(Vec::new()));
        }
        let resample = (0..n)
            .map(|_| self.data[self.rng.gen_range(0..n)])
            .collect();
        Some(resample)
    }
}
