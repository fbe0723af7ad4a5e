use num_traits::{Float, FromPrimitive};

use super::Statistic;

/// Arithmetic mean using **Kahan summation**.
///
/// Compensated summation matters here: a size study sums tens of thousands
/// of draws per cell, and heavy-tailed laws (Cauchy, Pareto) mix values of
/// very different magnitude. Returns NaN for an empty slice.
#[derive(Clone, Copy, Default)]
pub struct Mean;

impl<D, T> Statistic<D, T> for Mean
where
    D: AsRef<[T]>,
    T: Float + FromPrimitive,
{
    fn compute(&self, data: &D) -> T {
        let slice: &[T] = data.as_ref();
        if slice.is_empty() {
            return T::nan();
        }

        let mut sum = T::zero();
        let mut c = T::zero();
        for &x in slice {
            let y = x - c;
            let t = sum + y;
            c = (t - sum) - y;
            sum = t;
        }

        let n = T::from_usize(slice.len()).expect("usize-to-float conversion failed");
        sum / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_slice_returns_nan() {
        let mean: f64 = Mean.compute(&Vec::<f64>::new());
        assert!(mean.is_nan());
    }

    #[test]
    fn single_element_returns_value() {
        assert_abs_diff_eq!(Mean.compute(&[42.5_f64]), 42.5, epsilon = 1e-12);
    }

    #[test]
    fn exact_integer_means() {
        assert_abs_diff_eq!(Mean.compute(&[1.0_f64, 2.0, 3.0, 4.0, 5.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn kahan_reduces_accumulation_error() {
        // Summing 0.1 × 10,000 exposes naive summation drift in f32
        let n = 10_000;
        let data: Vec<f32> = vec![0.1_f32; n];

        let kahan_mean: f32 = Mean.compute(&data);
        let naive_mean: f32 = data.iter().sum::<f32>() / (n as f32);

        let kahan_error = (kahan_mean - 0.1).abs();
        let naive_error = (naive_mean - 0.1).abs();
        assert!(kahan_error <= naive_error);
        assert_abs_diff_eq!(kahan_mean, 0.1, epsilon = 5e-5);
    }

    #[test]
    fn symmetric_input_yields_zero_mean() {
        let data: Vec<f64> = (-1000..=1000).map(|x| x as f64 * 0.123456789).collect();
        assert_abs_diff_eq!(Mean.compute(&data), 0.0, epsilon = 1e-10);
    }
}
