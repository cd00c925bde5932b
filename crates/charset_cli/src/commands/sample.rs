//! Sample command implementation
//!
//! Draws random sequences from a catalog entry or from characters given on
//! the command line.

use std::io::Write;

use charset_core::{Catalog, Sampler};
use tracing::info;

use crate::config::{CliConfig, MAX_LENGTH};
use crate::{CliError, Result};

/// Options of the sample command
#[derive(Debug, Clone, Default)]
pub struct SampleOptions {
    /// Sequence length; the configured default when absent
    pub length: Option<i64>,
    /// Catalog entry name; the configured default when absent
    pub charset: Option<String>,
    /// Literal characters to sample from, instead of a catalog entry
    pub chars: Option<String>,
    /// Number of sequences to print
    pub count: usize,
}

/// Run the sample command
pub fn run(options: &SampleOptions, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    if options.count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    let length = options.length.unwrap_or(config.default_length as i64);
    if length > MAX_LENGTH as i64 {
        return Err(CliError::InvalidArgument(format!(
            "length {} exceeds {}",
            length, MAX_LENGTH
        )));
    }

    let (source, charset): (String, Vec<char>) = match (&options.chars, &options.charset) {
        (Some(chars), _) => ("custom".to_string(), chars.chars().collect()),
        (None, Some(name)) => {
            let set = Catalog::builtin().lookup(name)?;
            (set.name().to_string(), set.runes().to_vec())
        }
        (None, None) => {
            let set = Catalog::builtin().get(config.default_charset);
            (set.name().to_string(), set.runes().to_vec())
        }
    };

    let sampler = match config.seed {
        Some(seed) => Sampler::from_seed(seed),
        None => Sampler::new(),
    };
    info!(
        charset = %source,
        charset_len = charset.len(),
        length,
        count = options.count,
        seed = sampler.seed(),
        "Sampling"
    );

    for _ in 0..options.count {
        let runes = sampler.sample_signed(length, &charset)?;
        let line: String = runes.into_iter().collect();
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
