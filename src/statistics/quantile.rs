use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Empirical quantile with linear interpolation between order statistics.
///
/// Uses the Hyndman–Fan type 7 definition (R and NumPy default):
/// `h = (n − 1)·p`, then interpolate linearly between the order statistics
/// at `⌊h⌋` and `⌊h⌋ + 1`. The interpolation rule is part of the crate's
/// contract: bootstrap critical values, and therefore reported empirical
/// sizes, depend on it.
///
/// NaN inputs are filtered before sorting; an empty (or all-NaN) slice
/// yields NaN.
#[derive(Debug, Clone, Copy)]
pub struct Quantile {
    p: f64,
}

impl Quantile {
    /// Creates a quantile estimator for probability `p ∈ [0, 1]`.
    ///
    /// # Panics
    /// Panics if `p` is outside `[0, 1]`.
    pub fn new(p: f64) -> Self {
        assert!((0.0..=1.0).contains(&p), "quantile p must be in [0,1], got {}", p);
        Self { p }
    }

    /// Convenience constructor for the median.
    pub fn median() -> Self {
        Self { p: 0.5 }
    }

    /// Upper-tail quantile `1 − α`, the usual critical-value probability.
    pub fn upper(alpha: f64) -> Self {
        Self::new(1.0 - alpha)
    }
}

impl<D, T> Statistic<D, T> for Quantile
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let mut sorted: Vec<T> = data
            .as_ref()
            .iter()
            .copied()
            .filter(|x| !x.is_nan())
            .collect();
        if sorted.is_empty() {
            return T::nan();
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("NaNs already filtered"));

        let n = sorted.len();
        let h = (n - 1) as f64 * self.p;
        let lo = h.floor() as usize;
        let frac = h - lo as f64;

        if frac == 0.0 || lo + 1 >= n {
            return sorted[lo.min(n - 1)];
        }
        let w = T::from_f64(frac).expect("interpolation weight fits in float");
        sorted[lo] + (sorted[lo + 1] - sorted[lo]) * w
    }
}
