//! White noise generator implementation.

use crate::Signal;
use crate::signal::MAX_AMPLITUDE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A white noise generator.
///
/// Each sample is an independent integer drawn uniformly from
/// `-MAX_AMPLITUDE..MAX_AMPLITUDE` (the upper bound is exclusive). The
/// generator owns its RNG and keeps advancing it, so consecutive buffers
/// differ unless the generator is rebuilt from the same seed.
pub struct WhiteNoise<R: Rng = StdRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<StdRng> {
    /// Creates a white noise generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible white noise generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::{Signal, WhiteNoise};
    ///
    /// let mut a = WhiteNoise::seeded(7);
    /// let mut b = WhiteNoise::seeded(7);
    /// assert_eq!(a.next_sample(), b.next_sample());
    /// ```
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use keysynth::{Signal, WhiteNoise};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// assert!((-32767..32767).contains(&sample));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> i16 {
        self.rng.gen_range(-MAX_AMPLITUDE..MAX_AMPLITUDE)
    }
}
