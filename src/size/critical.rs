use num_traits::{Float, FromPrimitive};

use crate::regress::ols;
use crate::{Mean, Quantile, Re, Sample, Statistic, TStat};

/// Bootstrap-t critical value for the one-sample mean test.
///
/// Draws `samples` resamples and computes each |t*| with the **original
/// sample mean** as the centering value — not the hypothesized μ₀. Centering
/// on the observed estimate is what makes the resampling distribution
/// approximate the statistic's null sampling distribution; centering on μ₀
/// would fold the true effect into every replicate. The returned critical
/// value is the (1−α) quantile of the |t*| values under the crate's fixed
/// linear-interpolation rule ([`Quantile`]).
///
/// Resamples with zero variance are dropped; NaN is returned when fewer
/// than two usable replicates remain.
#[derive(Debug, Clone)]
pub struct BootstrapCritical<Resampler> {
    resampler: Resampler,
    samples: usize,
    alpha: f64,
}

impl<Resampler> BootstrapCritical<Resampler> {
    /// # Panics
    /// Panics if `samples == 0` or `alpha` is outside `(0, 1)`.
    pub fn new(resampler: Resampler, samples: usize, alpha: f64) -> Self {
        assert!(samples > 0, "bootstrap needs at least one resample");
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "significance level must be in (0,1), got {}",
            alpha
        );
        Self {
            resampler,
            samples,
            alpha,
        }
    }
}

impl<T, Resampler> Statistic<Sample<T>, T> for BootstrapCritical<Resampler>
where
    T: Float + FromPrimitive,
    Resampler: Re<Sample<T>, Item = Sample<T>>,
{
    fn compute(&self, data: &Sample<T>) -> T {
        let center = Mean.compute(data);
        if center.is_nan() {
            return T::nan();
        }

        let pivot = TStat::new(center);
        let abs_t: Vec<T> = self
            .resampler
            .re(data)
            .take(self.samples)
            .filter_map(|resample| {
                let t = pivot.compute(&resample);
                if t.is_finite() {
                    Some(t.abs())
                } else {
                    None
                }
            })
            .collect();

        if abs_t.len() < 2 {
            return T::nan();
        }
        Quantile::upper(self.alpha).compute(&abs_t)
    }
}

/// Pairs-bootstrap critical value for the OLS slope test.
///
/// Operates on a sample of `(x, y)` rows: resample rows with replacement,
/// refit, and compute |t*| = |slope* − slopê| / se*, centered on the
/// original fit's slope for the same reason [`BootstrapCritical`] centers
/// on the sample mean. Row resampling keeps the covariate's heavy tails in
/// the bootstrap world, which is the point of the exercise.
#[derive(Debug, Clone)]
pub struct PairsBootstrapCritical<Resampler> {
    resampler: Resampler,
    samples: usize,
    alpha: f64,
}

impl<Resampler> PairsBootstrapCritical<Resampler> {
    /// # Panics
    /// Panics if `samples == 0` or `alpha` is outside `(0, 1)`.
    pub fn new(resampler: Resampler, samples: usize, alpha: f64) -> Self {
        assert!(samples > 0, "bootstrap needs at least one resample");
        assert!(
            alpha > 0.0 && alpha < 1.0,
            "significance level must be in (0,1), got {}",
            alpha
        );
        Self {
            resampler,
            samples,
            alpha,
        }
    }
}

impl<Resampler> Statistic<Sample<(f64, f64)>, f64> for PairsBootstrapCritical<Resampler>
where
    Resampler: Re<Sample<(f64, f64)>, Item = Sample<(f64, f64)>>,
{
    fn compute(&self, data: &Sample<(f64, f64)>) -> f64 {
        let (x, y): (Vec<f64>, Vec<f64>) = data.as_ref().iter().copied().unzip();
        let fit = ols(&x, &y);
        if fit.is_degenerate() {
            return f64::NAN;
        }

        let abs_t: Vec<f64> = self
            .resampler
            .re(data)
            .take(self.samples)
            .filter_map(|resample| {
                let (xs, ys): (Vec<f64>, Vec<f64>) = resample.into_iter().unzip();
                let refit = ols(&xs, &ys);
                if refit.is_degenerate() {
                    None
                } else {
                    Some(refit.t_slope(fit.slope).abs())
                }
            })
            .collect();

        if abs_t.len() < 2 {
            return f64::NAN;
        }
        Quantile::upper(self.alpha).compute(&abs_t)
    }
}
