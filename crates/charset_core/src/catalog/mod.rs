//! # Character Catalog
//!
//! Named, read-only sets of Unicode code points.
//!
//! Primitive entries are literal lists of code points. Composite entries are
//! concatenations of other entries and are flattened once, when the catalog
//! is resolved. The resolved catalog is immutable and shared for the life of
//! the process through [`Catalog::builtin`].
//!
//! ## Module Structure
//!
//! - [`id`]: entry identifiers, canonical names and definitions
//! - `data`: literal code points of the primitive entries
//!
//! ## Usage Example
//!
//! ```rust
//! use charset_core::catalog::{Catalog, CharsetId};
//!
//! let catalog = Catalog::builtin();
//!
//! let cyrillic = catalog.get(CharsetId::Cyrillic);
//! let russian = catalog.get(CharsetId::Russian);
//! assert!(cyrillic.len() > russian.len());
//!
//! let greek = catalog.lookup("greek").unwrap();
//! assert!(greek.runes().contains(&'α'));
//! ```

mod data;
pub mod id;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::CatalogError;

pub use id::{CharsetId, Definition};

/// A resolved catalog entry: its identifier and flattened code points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    id: CharsetId,
    runes: Vec<char>,
}

impl CharacterSet {
    /// Identifier of the entry.
    #[inline]
    pub fn id(&self) -> CharsetId {
        self.id
    }

    /// Canonical name of the entry.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Code points of the entry, in declaration order.
    #[inline]
    pub fn runes(&self) -> &[char] {
        &self.runes
    }

    /// Number of code points, counting repeats.
    #[inline]
    pub fn len(&self) -> usize {
        self.runes.len()
    }

    /// Always false for resolved catalog entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    /// Constituents of a composite entry; empty for primitive entries.
    pub fn constituents(&self) -> &'static [CharsetId] {
        match self.id.definition() {
            Definition::Composite(parts) => parts,
            Definition::Primitive(_) => &[],
        }
    }

    /// The code points joined into a string.
    pub fn text(&self) -> String {
        self.runes.iter().collect()
    }
}

impl AsRef<[char]> for CharacterSet {
    fn as_ref(&self) -> &[char] {
        &self.runes
    }
}

/// The resolved set of every catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    sets: BTreeMap<CharsetId, CharacterSet>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Returns the process-wide catalog, resolving it on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(Catalog::resolve)
    }

    /// Resolves every entry, flattening composites.
    ///
    /// Resolution is deterministic: two calls produce equal catalogs.
    pub fn resolve() -> Catalog {
        let mut sets = BTreeMap::new();
        for id in CharsetId::ALL {
            let mut runes = Vec::new();
            flatten_into(id, &mut runes);
            debug_assert!(!runes.is_empty(), "catalog entry {} is empty", id);
            debug!(charset = %id, size = runes.len(), "Resolved catalog entry");
            sets.insert(id, CharacterSet { id, runes });
        }
        debug!(entries = sets.len(), "Character catalog resolved");
        Catalog { sets }
    }

    /// Returns the entry for `id`.
    pub fn get(&self, id: CharsetId) -> &CharacterSet {
        // Every identifier is inserted by `resolve`.
        &self.sets[&id]
    }

    /// Looks an entry up by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCharset`] if no entry has that name.
    pub fn lookup(&self, name: &str) -> Result<&CharacterSet, CatalogError> {
        let id: CharsetId = name.parse()?;
        Ok(self.get(id))
    }

    /// Iterates over the entries in [`CharsetId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &CharacterSet> + '_ {
        CharsetId::ALL.into_iter().map(move |id| self.get(id))
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the catalog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Appends the code points of `id` to `out`, expanding composites depth-first.
fn flatten_into(id: CharsetId, out: &mut Vec<char>) {
    match id.definition() {
        Definition::Primitive(literal) => out.extend(literal.chars()),
        Definition::Composite(parts) => {
            for &part in parts {
                flatten_into(part, out);
            }
        }
    }
}
