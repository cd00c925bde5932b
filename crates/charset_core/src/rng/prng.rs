//! Pseudo-random index generator used by the sampler.
//!
//! This module provides [`CharsetRng`], a seeded PRNG wrapper that draws
//! uniform indices into a character set.

use std::num::NonZeroUsize;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reads the wall clock at nanosecond resolution for use as a seed.
///
/// A clock set before the Unix epoch yields `0`.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Random source for character sampling.
///
/// Not suitable for secrets: the generator is seeded from a clock reading
/// unless a seed is supplied, and the seed is observable through
/// [`CharsetRng::seed`].
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use charset_core::rng::CharsetRng;
///
/// let mut rng = CharsetRng::from_seed(42);
/// let bound = NonZeroUsize::new(10).unwrap();
///
/// let index = rng.gen_index(bound);
/// assert!(index < 10);
/// ```
#[derive(Clone, Debug)]
pub struct CharsetRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl CharsetRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of indices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use charset_core::rng::CharsetRng;
    ///
    /// let bound = NonZeroUsize::new(1000).unwrap();
    /// let mut rng1 = CharsetRng::from_seed(12345);
    /// let mut rng2 = CharsetRng::from_seed(12345);
    ///
    /// assert_eq!(rng1.gen_index(bound), rng2.gen_index(bound));
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the current clock reading.
    #[inline]
    pub fn from_clock() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one index uniformly from `[0, bound)`.
    #[inline]
    pub fn gen_index(&mut self, bound: NonZeroUsize) -> usize {
        self.inner.gen_range(0..bound.get())
    }

    /// Fills `buffer` with indices drawn uniformly from `[0, bound)`.
    ///
    /// Empty buffers are left untouched and consume no randomness.
    #[inline]
    pub fn fill_indices(&mut self, bound: NonZeroUsize, buffer: &mut [usize]) {
        for index in buffer.iter_mut() {
            *index = self.inner.gen_range(0..bound.get());
        }
    }
}
