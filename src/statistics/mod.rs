/// A pure estimator: consumes a dataset, produces a value.
///
/// Everything in the crate that looks at data — means, variances,
/// t-statistics, bootstrap critical values — implements this trait, so that
/// estimators compose and the replication driver never cares what it is
/// tallying.
pub trait Statistic<D, T> {
    fn compute(&self, data: &D) -> T;
}

mod mean;
mod quantile;
mod tstat;
mod variance;

pub use mean::Mean;
pub use quantile::Quantile;
pub use tstat::TStat;
pub use variance::Variance;

// Tuple compositions: compute several statistics over the same data in one
// call, e.g. `(Mean, Variance::default()).compute(&sample)`.

impl<D, T1, S1> Statistic<D, (T1,)> for (S1,)
where
    S1: Statistic<D, T1>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1,) {
        (self.0.compute(data),)
    }
}

impl<D, T1, T2, S1, S2> Statistic<D, (T1, T2)> for (S1, S2)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2) {
        (self.0.compute(data), self.1.compute(data))
    }
}

impl<D, T1, T2, T3, S1, S2, S3> Statistic<D, (T1, T2, T3)> for (S1, S2, S3)
where
    S1: Statistic<D, T1>,
    S2: Statistic<D, T2>,
    S3: Statistic<D, T3>,
{
    #[inline]
    fn compute(&self, data: &D) -> (T1, T2, T3) {
        (
            self.0.compute(data),
            self.1.compute(data),
            self.2.compute(data),
        )
    }
}
