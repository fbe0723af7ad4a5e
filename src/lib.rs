//! Monte Carlo size experiments for classical and bootstrap t-tests.
//!
//! The crate has two layers:
//!
//! - a small statistics kernel ([`Sample`], the [`Statistic`] trait, the
//!   [`Re`] resampler trait) shared by everything else, and
//! - the simulation layer: synthetic error laws ([`ErrorLaw`]), an OLS slope
//!   fit ([`ols`]), bootstrap-t critical values ([`BootstrapCritical`]) and
//!   the replication driver ([`SizeStudy`]) that turns all of it into an
//!   empirical-size table.
//!
//! Every replication owns an RNG stream derived from the study seed, so runs
//! are reproducible and (with the `rayon` feature) order-independent.

mod sample;
mod resample;
mod statistics;
mod generate;
mod regress;
mod size;
mod display;

pub use crate::generate::ErrorLaw;
pub use crate::regress::{ols, OlsFit};
pub use crate::resample::{Bootstrap, Re};
pub use crate::sample::{Sample, SampleError, SamplingIterator};
pub use crate::size::{
    estimate_pi, BootstrapCritical, PairsBootstrapCritical, Rule, Scenario, SizeCell, SizeReport,
    SizeStudy, Tally,
};
pub use crate::statistics::*;
pub use rand;
