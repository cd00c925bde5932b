//! Error types for catalog lookups and sampling.

use thiserror::Error;

/// Invalid arguments passed to the sampler.
///
/// Every variant is raised before any random draw, so a failed call
/// produces no output and leaves the generator untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The character set to sample from has no code points.
    #[error("Invalid argument: empty charset")]
    EmptyCharset,

    /// A negative sequence length was requested.
    #[error("Invalid argument: negative length {0}")]
    NegativeLength(i64),

    /// The requested sequence does not fit in memory.
    #[error("Invalid argument: length {0} is too large")]
    LengthTooLarge(u64),
}

impl SamplerError {
    /// Returns true for every sampler error; they all reject caller input.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyCharset | Self::NegativeLength(_) | Self::LengthTooLarge(_)
        )
    }
}

/// Errors raised when addressing the catalog by name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog entry has the given name.
    #[error("Unknown charset '{0}'")]
    UnknownCharset(String),
}

/// Any error produced by this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// Sampling failed.
    #[error(transparent)]
    Sampler(#[from] SamplerError),

    /// Catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result alias for this crate.
pub type Result<T, E = CharsetError> = std::result::Result<T, E>;
