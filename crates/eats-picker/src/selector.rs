//! Uniform random choice over a candidate pool.
//!
//! The randomness source is a trait so callers can swap the production RNG
//! for a fixed sequence or a seeded generator in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::PickerError;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: the same seed yields the same sequence of picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// An empty `values` list replays `0.0` forever.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// `steps` evenly spaced quantiles `(i + 0.5) / steps` for `i` in `0..steps`.
    #[must_use]
    pub fn quantiles(steps: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let values = (0..steps)
            .map(|i| (i as f64 + 0.5) / steps as f64)
            .collect();
        Self::new(values)
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position = self.position.wrapping_add(1);
        value
    }
}

/// Pick one element of `pool` uniformly at random.
///
/// The index is `floor(unit * len)` where `unit` comes from `source`. Values
/// outside `[0, 1)` are clamped so a misbehaving source can never index out
/// of bounds.
///
/// # Errors
///
/// Returns [`PickerError::EmptyPool`] when `pool` is empty. Callers should
/// skip the spin animation in that case.
pub fn select_random<'a, T, S>(pool: &'a [T], source: &mut S) -> Result<&'a T, PickerError>
where
    S: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return Err(PickerError::EmptyPool);
    }
    let index = index_for(source.next_unit(), pool.len());
    Ok(&pool[index])
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn index_for(unit: f64, len: usize) -> usize {
    let unit = if unit.is_finite() { unit.max(0.0) } else { 0.0 };
    let index = (unit * len as f64).floor() as usize;
    index.min(len - 1)
}
