//! # Random Source
//!
//! Seeded pseudo-random generation of indices for the sampler.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator records its seed; a fixed seed
//!   gives a fixed sequence
//! - **Clock seeding**: without an explicit seed the generator is seeded once
//!   from a nanosecond clock reading and never reseeded
//! - **Uniformity**: indices come from `rand`'s unbiased range sampling
//!
//! ## Usage Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use charset_core::rng::CharsetRng;
//!
//! let mut rng = CharsetRng::from_seed(7);
//! let mut buffer = vec![0usize; 32];
//! rng.fill_indices(NonZeroUsize::new(5).unwrap(), &mut buffer);
//! assert!(buffer.iter().all(|&i| i < 5));
//! ```

mod prng;

pub use prng::{clock_seed, CharsetRng};
