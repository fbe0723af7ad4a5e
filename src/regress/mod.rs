use crate::{Mean, Statistic};

/// Result of a two-column least-squares fit (intercept + slope).
#[derive(Debug, Clone, Copy)]
pub struct OlsFit {
    pub intercept: f64,
    pub slope: f64,
    /// Standard error of the slope, `√(σ̂² / Sxx)`.
    pub slope_se: f64,
    /// Residual variance `σ̂² = Σê² / (n − 2)`.
    pub sigma2: f64,
    /// Residual degrees of freedom, `n − 2`.
    pub df: usize,
}

impl OlsFit {
    /// t-statistic for the slope against a hypothesized true value.
    ///
    /// Non-finite when the fit was degenerate (singular design); callers
    /// treat that as a skipped replication.
    pub fn t_slope(&self, null_slope: f64) -> f64 {
        (self.slope - null_slope) / self.slope_se
    }

    /// True when the design was singular or the residual variance collapsed.
    pub fn is_degenerate(&self) -> bool {
        !(self.slope.is_finite() && self.slope_se.is_finite() && self.slope_se > 0.0)
    }
}

/// Fit `y = β₀ + β₁·x + e` by solving the normal equations in closed form.
///
/// The design is the n×2 matrix `[1, x]`; with two columns the normal
/// equations reduce to `β̂₁ = Sxy / Sxx`, `β̂₀ = ȳ − β̂₁·x̄`. A singular
/// design (`Sxx = 0`, i.e. a constant covariate) yields NaN coefficients
/// rather than an error — at very small n with a discrete covariate this is
/// a real, tolerable outcome of a replication.
///
/// # Panics
/// Panics if `x` and `y` differ in length or hold fewer than 3 observations
/// (no residual degrees of freedom) — configuration errors, not data
/// outcomes.
pub fn ols(x: &[f64], y: &[f64]) -> OlsFit {
    assert_eq!(x.len(), y.len(), "covariate and response length mismatch");
    let n = x.len();
    assert!(n >= 3, "OLS slope inference needs n >= 3, got {}", n);

    let x_bar: f64 = Mean.compute(&x);
    let y_bar: f64 = Mean.compute(&y);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_bar;
        sxx += dx * dx;
        sxy += dx * (yi - y_bar);
    }

    if sxx == 0.0 {
        return OlsFit {
            intercept: f64::NAN,
            slope: f64::NAN,
            slope_se: f64::NAN,
            sigma2: f64::NAN,
            df: n - 2,
        };
    }

    let slope = sxy / sxx;
    let intercept = y_bar - slope * x_bar;

    let mut ssr = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let e = yi - intercept - slope * xi;
        ssr += e * e;
    }
    let sigma2 = ssr / (n - 2) as f64;

    OlsFit {
        intercept,
        slope,
        slope_se: (sigma2 / sxx).sqrt(),
        sigma2,
        df: n - 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn exact_fit_recovers_true_coefficients() {
        // Zero residuals: β̂ must equal the generating coefficients exactly
        // (up to floating point).
        let x: Vec<f64> = (1..=8).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|xi| 2.0 + 3.0 * xi).collect();

        let fit = ols(&x, &y);
        assert_abs_diff_eq!(fit.slope, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.sigma2, 0.0, epsilon = 1e-20);
    }

    #[test]
    fn textbook_slope_inference() {
        let x = [1.0_f64, 2.0, 3.0, 4.0];
        let y = [2.0_f64, 3.0, 5.0, 4.0];

        let fit = ols(&x, &y);
        assert_abs_diff_eq!(fit.slope, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.intercept, 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(fit.sigma2, 0.9, epsilon = 1e-12);
        assert_eq!(fit.df, 2);
        assert_abs_diff_eq!(
            fit.t_slope(0.0),
            0.8 / (0.9_f64 / 5.0).sqrt(),
            epsilon = 1e-12
        );
        assert!(!fit.is_degenerate());
    }

    #[test]
    fn singular_design_is_flagged_not_fatal() {
        let x = [2.0_f64; 5];
        let y = [1.0_f64, 2.0, 3.0, 4.0, 5.0];

        let fit = ols(&x, &y);
        assert!(fit.slope.is_nan());
        assert!(fit.is_degenerate());
        assert!(fit.t_slope(0.0).is_nan());
    }

    #[test]
    #[should_panic(expected = "n >= 3")]
    fn too_few_observations_is_a_configuration_error() {
        let _ = ols(&[1.0, 2.0], &[1.0, 2.0]);
    }
}
