use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic, Variance};

/// One-sample t-statistic: `t = √n · (mean − μ₀) / sd`.
///
/// The statistic is asymptotically pivotal, which is what makes both the
/// asymptotic-normal and the bootstrap critical-value rules in the size
/// study meaningful.
///
/// Returns NaN when the sample has fewer than two observations or zero
/// variance (all values identical); callers tally that as a degenerate
/// replication rather than a crash.
#[derive(Debug, Clone, Copy)]
pub struct TStat<T> {
    /// Centering value: μ₀ under H₀, or the observed estimate when building
    /// a bootstrap null distribution.
    pub null_mean: T,
}

impl<T> TStat<T> {
    pub fn new(null_mean: T) -> Self {
        Self { null_mean }
    }
}

impl<D, T> Statistic<D, T> for TStat<T>
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive + Copy,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();
        if slice.len() < 2 {
            return T::nan();
        }

        let (mean, var) = (Mean, Variance::default()).compute(data);
        let sd = var.sqrt();
        if sd.is_zero() || mean.is_nan() || sd.is_nan() {
            return T::nan();
        }

        let root_n = T::from_usize(slice.len())
            .expect("usize-to-float conversion failed")
            .sqrt();
        root_n * (mean - self.null_mean) / sd
    }
}
