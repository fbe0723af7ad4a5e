pub use rand::Rng;

/// A resampling scheme: turns one dataset into a stream of derived datasets.
///
/// Implementors yield an unbounded iterator; callers decide how many
/// resamples to take.
pub trait Re<T> {
    type Item;
    fn re(&self, t: &T) -> impl Iterator<Item = Self::Item>;
}

mod bootstrap;

pub use bootstrap::Bootstrap;
