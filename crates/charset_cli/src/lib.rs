//! Charset CLI
//!
//! Command-line front end for the charset_core catalog and sampler.
//!
//! # Commands
//!
//! - `charset list` - List catalog entries with their sizes
//! - `charset show <NAME>` - Print the characters of an entry
//! - `charset sample [-n LENGTH] [-s NAME | --chars TEXT]` - Print random sequences

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

/// Version of the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
