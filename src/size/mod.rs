//! The replication driver: empirical test size over a grid of sample sizes
//! and error laws.
//!
//! Each cell of the grid is a pure reduce over independent replications:
//! draw a dataset, compute the t-statistic, compare it against every
//! decision rule's critical value, merge the binary outcomes into a
//! [`Tally`]. Nothing is shared between replications except the fold, so
//! the outer loop parallelizes trivially under the `rayon` feature and the
//! result is bit-identical to the sequential run.

mod critical;
mod pi;

pub use critical::{BootstrapCritical, PairsBootstrapCritical};
pub use pi::estimate_pi;

use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::{Bootstrap, ErrorLaw, Sample, Statistic, TStat};

/// SplitMix64 finalizer, used to derive independent RNG streams from one
/// root seed. Every logical stream (replication, bootstrap inner loop,
/// π-estimation chunk) gets its own seed, so parallel execution never
/// shares mutable generator state.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub(crate) fn stream_seed(root: u64, tags: &[u64]) -> u64 {
    let mut s = splitmix64(root);
    for &tag in tags {
        s = splitmix64(s ^ tag);
    }
    s
}

/// Decision rule a replication's t-statistic is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact Student-t quantile at the scenario's residual degrees of freedom.
    Exact,
    /// Standard-normal quantile, the asymptotic approximation.
    Asymptotic,
    /// Per-replication bootstrap-t critical value.
    Bootstrap,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Exact, Rule::Asymptotic, Rule::Bootstrap];

    pub(crate) fn index(self) -> usize {
        match self {
            Rule::Exact => 0,
            Rule::Asymptotic => 1,
            Rule::Bootstrap => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rule::Exact => "exact t",
            Rule::Asymptotic => "normal",
            Rule::Bootstrap => "bootstrap",
        }
    }
}

/// What one replication simulates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    /// i.i.d. draw from the error law; t-test of the mean against the law's
    /// population mean (a true null). Needs n ≥ 2.
    MeanTest,
    /// `y = intercept + slope·x + e` with a heavy-tailed covariate; t-test
    /// of the slope against the true `slope` (a true null). Needs n ≥ 3.
    SlopeTest {
        intercept: f64,
        slope: f64,
        covariate: ErrorLaw,
    },
}

impl Scenario {
    /// The classic heavy-tailed-regressor setup: Pareto(1.5) covariate.
    pub fn slope_default() -> Self {
        Scenario::SlopeTest {
            intercept: 1.0,
            slope: 0.5,
            covariate: ErrorLaw::covariate(),
        }
    }

    fn min_n(&self) -> usize {
        match self {
            Scenario::MeanTest => 2,
            Scenario::SlopeTest { .. } => 3,
        }
    }

    /// Residual degrees of freedom at sample size `n`.
    fn df(&self, n: usize) -> usize {
        match self {
            Scenario::MeanTest => n - 1,
            Scenario::SlopeTest { .. } => n - 2,
        }
    }
}

/// Rejection bookkeeping for one (law, sample size) cell.
///
/// A plain value: replications produce one-trial tallies, the driver folds
/// them with [`Tally::merge`]. Merging is associative and commutative, so
/// the parallel reduce agrees with the sequential fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Replications that produced a usable statistic and critical values.
    pub tallied: usize,
    /// Replications skipped: singular design, zero sample variance, or an
    /// unusable bootstrap distribution. Skipped-and-counted, never fatal.
    pub degenerate: usize,
    rejections: [usize; 3],
}

impl Tally {
    /// Outcome of a single replication.
    pub fn from_trial(abs_t: f64, criticals: [f64; 3]) -> Self {
        if !abs_t.is_finite() || criticals.iter().any(|c| !c.is_finite()) {
            return Tally {
                tallied: 0,
                degenerate: 1,
                rejections: [0; 3],
            };
        }
        let mut rejections = [0usize; 3];
        for (r, &crit) in rejections.iter_mut().zip(&criticals) {
            *r = usize::from(abs_t > crit);
        }
        Tally {
            tallied: 1,
            degenerate: 0,
            rejections,
        }
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut rejections = self.rejections;
        for (r, o) in rejections.iter_mut().zip(&other.rejections) {
            *r += o;
        }
        Tally {
            tallied: self.tallied + other.tallied,
            degenerate: self.degenerate + other.degenerate,
            rejections,
        }
    }

    /// Empirical rejection proportion for one rule; NaN when nothing tallied.
    pub fn size(&self, rule: Rule) -> f64 {
        if self.tallied == 0 {
            return f64::NAN;
        }
        self.rejections[rule.index()] as f64 / self.tallied as f64
    }
}

/// One row of the size report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeCell {
    pub law: ErrorLaw,
    pub n: usize,
    pub tally: Tally,
}

/// Empirical sizes for every (law, sample size) combination of a study.
///
/// Rendered as a table via `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub alpha: f64,
    pub scenario: Scenario,
    pub cells: Vec<SizeCell>,
}

/// Configuration of one Monte Carlo size study.
///
/// All counts are configurable; nothing in the crate bakes in a replication
/// budget. The root `seed` pins every replication's RNG stream, so a study
/// is reproducible and its replications order-independent.
#[derive(Debug, Clone)]
pub struct SizeStudy {
    /// Sample sizes to simulate, one report row per size and law.
    pub sample_sizes: Vec<usize>,
    /// Outer Monte Carlo replications R per cell.
    pub replications: usize,
    /// Inner bootstrap replications B per replication.
    pub bootstrap_samples: usize,
    /// Nominal significance level α.
    pub alpha: f64,
    /// Error laws to simulate.
    pub laws: Vec<ErrorLaw>,
    /// Root seed for all RNG streams.
    pub seed: u64,
}

impl SizeStudy {
    /// A study over the given grid with the usual defaults:
    /// R = 2000, B = 199, α = 0.05, seed 0.
    pub fn new(sample_sizes: Vec<usize>, laws: Vec<ErrorLaw>) -> Self {
        Self {
            sample_sizes,
            laws,
            replications: 2000,
            bootstrap_samples: 199,
            alpha: 0.05,
            seed: 0,
        }
    }

    /// Run the study.
    ///
    /// # Panics
    /// Panics on configuration errors before any computation: empty grid,
    /// zero replication counts, α outside (0,1), or a sample size below the
    /// scenario's minimum (2 for [`Scenario::MeanTest`], 3 for
    /// [`Scenario::SlopeTest`]).
    pub fn run(&self, scenario: Scenario) -> SizeReport {
        self.validate(scenario);

        let mut cells = Vec::with_capacity(self.laws.len() * self.sample_sizes.len());
        for (law_idx, &law) in self.laws.iter().enumerate() {
            for &n in &self.sample_sizes {
                cells.push(SizeCell {
                    law,
                    n,
                    tally: self.cell(scenario, law, law_idx, n),
                });
            }
        }

        SizeReport {
            alpha: self.alpha,
            scenario,
            cells,
        }
    }

    fn validate(&self, scenario: Scenario) {
        assert!(!self.sample_sizes.is_empty(), "no sample sizes configured");
        assert!(!self.laws.is_empty(), "no error laws configured");
        assert!(self.replications > 0, "replication count must be positive");
        assert!(
            self.bootstrap_samples > 0,
            "bootstrap replication count must be positive"
        );
        assert!(
            self.alpha > 0.0 && self.alpha < 1.0,
            "significance level must be in (0,1), got {}",
            self.alpha
        );
        let min_n = scenario.min_n();
        for &n in &self.sample_sizes {
            assert!(
                n >= min_n,
                "sample size {} below the scenario minimum {}",
                n,
                min_n
            );
        }
    }

    fn cell(&self, scenario: Scenario, law: ErrorLaw, law_idx: usize, n: usize) -> Tally {
        let replicate = |rep: usize| self.replicate(scenario, law, law_idx, n, rep);

        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            (0..self.replications)
                .into_par_iter()
                .map(replicate)
                .reduce(Tally::default, Tally::merge)
        }
        #[cfg(not(feature = "rayon"))]
        {
            (0..self.replications)
                .map(replicate)
                .fold(Tally::default(), Tally::merge)
        }
    }

    fn replicate(
        &self,
        scenario: Scenario,
        law: ErrorLaw,
        law_idx: usize,
        n: usize,
        rep: usize,
    ) -> Tally {
        let tags = [law_idx as u64, n as u64, rep as u64];
        let mut rng = StdRng::seed_from_u64(stream_seed(self.seed, &[tags[0], tags[1], tags[2], 0]));
        let boot_rng = StdRng::seed_from_u64(stream_seed(self.seed, &[tags[0], tags[1], tags[2], 1]));

        let df = scenario.df(n) as f64;
        let exact = StudentsT::new(0.0, 1.0, df)
            .expect("valid Student-t degrees of freedom")
            .inverse_cdf(1.0 - self.alpha / 2.0);
        let asymptotic = Normal::new(0.0, 1.0)
            .expect("valid N(0,1) distribution")
            .inverse_cdf(1.0 - self.alpha / 2.0);

        match scenario {
            Scenario::MeanTest => {
                let y = law.draw(n, &mut rng);
                let t: f64 = TStat::new(law.null_mean()).compute(&y);
                if !t.is_finite() {
                    return Tally::from_trial(f64::NAN, [exact, asymptotic, f64::NAN]);
                }
                let boot = BootstrapCritical::new(
                    Bootstrap::new(boot_rng),
                    self.bootstrap_samples,
                    self.alpha,
                )
                .compute(&y);
                Tally::from_trial(t.abs(), [exact, asymptotic, boot])
            }
            Scenario::SlopeTest {
                intercept,
                slope,
                covariate,
            } => {
                let x = covariate.draw(n, &mut rng);
                let e = law.draw(n, &mut rng);
                let rows: Sample<(f64, f64)> = x
                    .as_ref()
                    .iter()
                    .zip(e.as_ref())
                    .map(|(&xi, &ei)| (xi, intercept + slope * xi + ei))
                    .collect();

                let (xs, ys): (Vec<f64>, Vec<f64>) = rows.as_ref().iter().copied().unzip();
                let fit = crate::regress::ols(&xs, &ys);
                if fit.is_degenerate() {
                    return Tally::from_trial(f64::NAN, [exact, asymptotic, f64::NAN]);
                }
                let boot = PairsBootstrapCritical::new(
                    Bootstrap::new(boot_rng),
                    self.bootstrap_samples,
                    self.alpha,
                )
                .compute(&rows);
                Tally::from_trial(fit.t_slope(slope).abs(), [exact, asymptotic, boot])
            }
        }
    }
}
