use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::{Cauchy, ChiSquared, Normal, Pareto, StudentsT};

use crate::Sample;

/// Synthetic error distribution for a simulated dataset.
///
/// A tagged variant instead of a distribution-name string: every law knows
/// how to draw `n` i.i.d. values and what population mean a true null
/// hypothesis should use. Heavy-tailed members (Cauchy, low-df Student-t,
/// Pareto) are the interesting cases for finite-sample test size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorLaw {
    Normal { mean: f64, sd: f64 },
    StudentT { df: f64 },
    Cauchy,
    ChiSquared { k: f64 },
    /// Pareto with scale 1; `shape = 1.5` is the crate's default regression
    /// covariate law (finite mean, infinite variance).
    Pareto { shape: f64 },
}

impl ErrorLaw {
    /// Standard normal errors.
    pub fn standard_normal() -> Self {
        ErrorLaw::Normal { mean: 0.0, sd: 1.0 }
    }

    /// The heavy-tailed covariate law for the regression scenario.
    pub fn covariate() -> Self {
        ErrorLaw::Pareto { shape: 1.5 }
    }

    /// Draw `n` i.i.d. observations.
    ///
    /// # Panics
    /// Panics if the law's parameters are invalid (non-positive `sd`, `df`,
    /// `k` or `shape`), the configuration-error case: no computation is
    /// attempted with a malformed law.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> Sample<f64> {
        match *self {
            ErrorLaw::Normal { mean, sd } => {
                let dist = Normal::new(mean, sd).expect("valid normal parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            ErrorLaw::StudentT { df } => {
                let dist = StudentsT::new(0.0, 1.0, df).expect("valid Student-t parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            ErrorLaw::Cauchy => {
                let dist = Cauchy::new(0.0, 1.0).expect("valid Cauchy parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            ErrorLaw::ChiSquared { k } => {
                let dist = ChiSquared::new(k).expect("valid chi-squared parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            ErrorLaw::Pareto { shape } => {
                let dist = Pareto::new(1.0, shape).expect("valid Pareto parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        }
    }

    /// Population mean, i.e. the true value of μ under H�0 in a size study.
    ///
    /// For laws without a mean (Cauchy, Student-t with df ≤ 1) this is the
    /// symmetry center 0 — the size study still tests a true location null.
    /// Pareto with shape ≤ 1 has no finite mean and returns `f64::INFINITY`.
    pub fn null_mean(&self) -> f64 {
        match *self {
            ErrorLaw::Normal { mean, .. } => mean,
            ErrorLaw::StudentT { .. } | ErrorLaw::Cauchy => 0.0,
            ErrorLaw::ChiSquared { k } => k,
            ErrorLaw::Pareto { shape } => {
                if shape > 1.0 {
                    shape / (shape - 1.0)
                } else {
                    f64::INFINITY
                }
            }
        }
    }

    /// Short label for report rows.
    pub fn label(&self) -> String {
        match *self {
            ErrorLaw::Normal { mean, sd } => format!("N({}, {}²)", mean, sd),
            ErrorLaw::StudentT { df } => format!("t({})", df),
            ErrorLaw::Cauchy => "Cauchy".to_string(),
            ErrorLaw::ChiSquared { k } => format!("χ²({})", k),
            ErrorLaw::Pareto { shape } => format!("Pareto({})", shape),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mean, Statistic};
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn draw_has_requested_length() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for law in [
            ErrorLaw::standard_normal(),
            ErrorLaw::StudentT { df: 3.0 },
            ErrorLaw::Cauchy,
            ErrorLaw::ChiSquared { k: 2.0 },
            ErrorLaw::covariate(),
        ] {
            assert_eq!(law.draw(25, &mut rng).len(), 25);
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_draw() {
        let law = ErrorLaw::ChiSquared { k: 4.0 };
        let a = law.draw(10, &mut Xoshiro256PlusPlus::seed_from_u64(7));
        let b = law.draw(10, &mut Xoshiro256PlusPlus::seed_from_u64(7));
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn sample_mean_approaches_null_mean() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let law = ErrorLaw::ChiSquared { k: 3.0 };
        let sample = law.draw(200_000, &mut rng);
        // SE of the mean is sqrt(2k/n) ≈ 0.0055
        assert_abs_diff_eq!(Mean.compute(&sample), law.null_mean(), epsilon = 0.05);
    }

    #[test]
    fn pareto_support_and_mean() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let law = ErrorLaw::Pareto { shape: 3.0 };
        let sample = law.draw(1000, &mut rng);
        assert!(sample.as_ref().iter().all(|&x| x >= 1.0));
        assert_abs_diff_eq!(law.null_mean(), 1.5, epsilon = 1e-12);
        assert!(ErrorLaw::Pareto { shape: 1.0 }.null_mean().is_infinite());
    }

    #[test]
    #[should_panic(expected = "valid normal parameters")]
    fn invalid_parameters_are_a_configuration_error() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let _ = ErrorLaw::Normal { mean: 0.0, sd: -1.0 }.draw(5, &mut rng);
    }
}
