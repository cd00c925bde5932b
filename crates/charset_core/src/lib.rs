//! # charset_core: Random sequences from named character sets
//!
//! ## Role
//!
//! charset_core provides:
//! - A catalog of named character sets: scripts, alphabets and symbol
//!   groups (`catalog`)
//! - A uniform sampler drawing fixed-length sequences from any set
//!   (`sampler`)
//! - The seeded random source behind the sampler (`rng`)
//! - Error types: `SamplerError`, `CatalogError`, `CharsetError` (`error`)
//!
//! Character sets are sequences of Unicode code points (`char`), not bytes,
//! so multi-byte characters are drawn whole.
//!
//! ## Usage Examples
//!
//! ```rust
//! use charset_core::catalog::{Catalog, CharsetId};
//! use charset_core::sampler::Sampler;
//!
//! let sampler = Sampler::from_seed(7);
//!
//! // Sample from a catalog entry
//! let password = sampler.sample_from(12, CharsetId::Ascii).unwrap();
//! assert_eq!(password.chars().count(), 12);
//!
//! // Sample from any slice of code points
//! let cyrillic = Catalog::builtin().get(CharsetId::Cyrillic);
//! let runes = sampler.sample(6, cyrillic.runes()).unwrap();
//! assert!(runes.iter().all(|c| cyrillic.runes().contains(c)));
//!
//! // An empty set is rejected
//! assert!(sampler.sample(3, &[]).is_err());
//! ```
//!
//! ## Randomness
//!
//! The generator is a seeded `StdRng`, seeded from the clock by default. It
//! is not meant for secrets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod catalog;
pub mod error;
pub mod rng;
pub mod sampler;

pub use catalog::{Catalog, CharacterSet, CharsetId};
pub use error::{CatalogError, CharsetError, Result, SamplerError};
pub use sampler::{default_sampler, random_runes, Sampler};
