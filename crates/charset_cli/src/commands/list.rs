//! List command implementation
//!
//! Prints every catalog entry with its size and, for composites, its parts.

use std::io::Write;

use charset_core::Catalog;
use tracing::debug;

use crate::Result;

/// Run the list command
pub fn run(out: &mut impl Write) -> Result<()> {
    let catalog = Catalog::builtin();
    debug!(entries = catalog.len(), "Listing catalog");

    let width = catalog.iter().map(|set| set.name().len()).max().unwrap_or(0);

    for set in catalog.iter() {
        let parts = set.constituents();
        if parts.is_empty() {
            writeln!(out, "{:<width$}  {:>4}", set.name(), set.len())?;
        } else {
            let names: Vec<&str> = parts.iter().map(|id| id.name()).collect();
            writeln!(
                out,
                "{:<width$}  {:>4}  = {}",
                set.name(),
                set.len(),
                names.join(" + ")
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use charset_core::CharsetId;

    #[test]
    fn test_list_prints_every_entry() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), CharsetId::ALL.len());
        for id in CharsetId::ALL {
            assert!(
                text.lines().any(|line| line.starts_with(id.name())),
                "{} missing",
                id
            );
        }
    }

    #[test]
    fn test_list_shows_composition() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let cyrillic = text
            .lines()
            .find(|line| line.starts_with("Cyrillic "))
            .unwrap();
        assert!(cyrillic.ends_with("= Russian + CyrillicSupplement"));
        assert!(cyrillic.contains("78"));
    }
}
