use num_traits::{Float, FromPrimitive};

use super::{Mean, Statistic};

/// Sample variance with a configurable degrees-of-freedom adjustment.
#[derive(Debug, Clone, Copy)]
pub struct Variance {
    pub ddof: usize,
}

impl Variance {
    /// Creates a new `Variance` estimator with the given degrees of freedom adjustment.
    ///
    /// - `ddof = 0`: population variance (biased)
    /// - `ddof = 1`: sample variance (unbiased, Bessel's correction) — this is the default
    pub fn new(ddof: usize) -> Self {
        Variance { ddof }
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance { ddof: 1 }
    }
}

impl<D, T> Statistic<D, T> for Variance
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive + Copy,
{
    fn compute(&self, data: &D) -> T {
        let slice = data.as_ref();

        // Variance undefined for n < 2
        if slice.len() < 2 {
            return T::nan();
        }

        let mean = Mean.compute(data);

        // Kahan summation for squared deviations
        let mut sq_sum = T::zero();
        let mut c = T::zero();
        for &x in slice {
            let dev = x - mean;
            let y = dev * dev - c;
            let t = sq_sum + y;
            c = (t - sq_sum) - y;
            sq_sum = t;
        }

        let dof = T::from_usize(slice.len() - self.ddof).expect("usize fits in float");
        sq_sum / dof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn undefined_below_two_observations() {
        let v: f64 = Variance::default().compute(&[1.0_f64]);
        assert!(v.is_nan());
    }

    #[test]
    fn bessel_correction_applied() {
        let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(Variance::new(0).compute(&data), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Variance::new(1).compute(&data), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_sample_has_zero_variance() {
        let data = [3.25_f64; 16];
        assert_abs_diff_eq!(Variance::default().compute(&data), 0.0, epsilon = 1e-15);
    }
}
