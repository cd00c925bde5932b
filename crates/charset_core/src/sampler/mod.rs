//! # Sampler
//!
//! Draws fixed-length sequences of code points uniformly, with replacement,
//! from a character set.
//!
//! A [`Sampler`] owns its random source behind a mutex. Callers that want
//! isolation or reproducibility construct their own with
//! [`Sampler::from_seed`]; callers that do not care share the process-wide
//! instance returned by [`default_sampler`], which is seeded once from the
//! clock on first use.
//!
//! ## Usage Example
//!
//! ```rust
//! use charset_core::catalog::CharsetId;
//! use charset_core::sampler::Sampler;
//!
//! let sampler = Sampler::from_seed(42);
//!
//! let runes = sampler.sample(5, &['A', 'B']).unwrap();
//! assert_eq!(runes.len(), 5);
//! assert!(runes.iter().all(|c| *c == 'A' || *c == 'B'));
//!
//! let word = sampler.sample_from(8, CharsetId::Greek).unwrap();
//! assert_eq!(word.chars().count(), 8);
//! ```

use std::collections::TryReserveError;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, trace};

use crate::catalog::{Catalog, CharsetId};
use crate::error::SamplerError;
use crate::rng::CharsetRng;

/// Uniform sampler over character sets.
///
/// Calls from several threads serialise on the internal generator, so the
/// draws of one call are contiguous in the generator's stream.
#[derive(Debug)]
pub struct Sampler {
    rng: Mutex<CharsetRng>,
    seed: u64,
}

static DEFAULT_SAMPLER: OnceLock<Sampler> = OnceLock::new();

/// Returns the process-wide sampler, seeding it from the clock on first use.
pub fn default_sampler() -> &'static Sampler {
    DEFAULT_SAMPLER.get_or_init(Sampler::new)
}

/// Samples `length` code points from `charset` with the process-wide sampler.
///
/// # Errors
///
/// Returns [`SamplerError::EmptyCharset`] if `charset` is empty.
///
/// # Examples
///
/// ```rust
/// use charset_core::random_runes;
///
/// let ascii: Vec<char> = "abc".chars().collect();
/// let runes = random_runes(10, &ascii).unwrap();
/// assert_eq!(runes.len(), 10);
/// ```
pub fn random_runes(length: usize, charset: &[char]) -> Result<Vec<char>, SamplerError> {
    default_sampler().sample(length, charset)
}

impl Sampler {
    /// Creates a sampler seeded from the current clock reading.
    pub fn new() -> Self {
        Self::with_rng(CharsetRng::from_clock())
    }

    /// Creates a sampler with a fixed seed.
    ///
    /// Two samplers with the same seed produce the same sequences for the
    /// same calls.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(CharsetRng::from_seed(seed))
    }

    fn with_rng(rng: CharsetRng) -> Self {
        let seed = rng.seed();
        debug!(seed, "Sampler initialised");
        Self {
            rng: Mutex::new(rng),
            seed,
        }
    }

    /// Returns the seed the generator was initialised with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `length` code points from `charset`.
    ///
    /// Each position is an independent uniform draw with replacement, so
    /// repeats are expected. A `length` of zero returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::EmptyCharset`] if `charset` is empty and
    /// [`SamplerError::LengthTooLarge`] if the output buffers cannot be
    /// allocated. No randomness is consumed in either case.
    pub fn sample(&self, length: usize, charset: &[char]) -> Result<Vec<char>, SamplerError> {
        let bound = NonZeroUsize::new(charset.len()).ok_or(SamplerError::EmptyCharset)?;
        let too_large = |_: TryReserveError| SamplerError::LengthTooLarge(length as u64);

        let mut indices: Vec<usize> = Vec::new();
        indices.try_reserve_exact(length).map_err(too_large)?;
        indices.resize(length, 0);
        let mut output: Vec<char> = Vec::new();
        output.try_reserve_exact(length).map_err(too_large)?;

        trace!(length, charset_len = charset.len(), "Sampling runes");
        self.lock().fill_indices(bound, &mut indices);
        output.extend(indices.into_iter().map(|index| charset[index]));
        Ok(output)
    }

    /// Like [`sample`](Self::sample), for lengths coming from signed sources.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::NegativeLength`] if `length` is negative,
    /// [`SamplerError::LengthTooLarge`] if it exceeds the address space and
    /// [`SamplerError::EmptyCharset`] if `charset` is empty.
    pub fn sample_signed(&self, length: i64, charset: &[char]) -> Result<Vec<char>, SamplerError> {
        if length < 0 {
            return Err(SamplerError::NegativeLength(length));
        }
        let length = usize::try_from(length)
            .map_err(|_| SamplerError::LengthTooLarge(length.unsigned_abs()))?;
        self.sample(length, charset)
    }

    /// Draws `length` code points from `charset` and joins them into a string.
    pub fn sample_string(&self, length: usize, charset: &[char]) -> Result<String, SamplerError> {
        Ok(self.sample(length, charset)?.into_iter().collect())
    }

    /// Draws `length` code points from the catalog entry `id`.
    pub fn sample_from(&self, length: usize, id: CharsetId) -> Result<String, SamplerError> {
        self.sample_string(length, Catalog::builtin().get(id).runes())
    }

    fn lock(&self) -> MutexGuard<'_, CharsetRng> {
        // A panic while holding the lock cannot leave the generator invalid.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
