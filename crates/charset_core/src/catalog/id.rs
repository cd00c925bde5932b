//! Identifiers and definitions of catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::data;
use crate::error::CatalogError;

/// How a catalog entry is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Definition {
    /// Literal code points.
    Primitive(&'static str),
    /// Concatenation of other entries, in the listed order.
    Composite(&'static [CharsetId]),
}

/// Identifier of a catalog entry.
///
/// Parses from the canonical name, ignoring case and any `-`, `_` or space
/// separators, so `"FullWidthCharacters"`, `"full-width-characters"` and
/// `"full_width_characters"` all name the same entry.
///
/// # Examples
///
/// ```rust
/// use charset_core::catalog::CharsetId;
///
/// let id: CharsetId = "mathematical-symbols".parse().unwrap();
/// assert_eq!(id, CharsetId::MathematicalSymbols);
/// assert_eq!(id.to_string(), "MathematicalSymbols");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharsetId {
    /// Union of every script and symbol group below.
    Unicode,
    /// Shell-friendly printable ASCII.
    Ascii,
    /// Polish alphabet.
    Polish,
    /// English alphabet.
    English,
    /// Russian alphabet.
    Russian,
    /// Mathematical operators.
    MathematicalSymbols,
    /// Mathematical alphanumeric letters.
    MathematicalFonts,
    /// Emoji.
    Emoji,
    /// Currency signs.
    Currencies,
    /// Gender symbols.
    Sex,
    /// Keyboard key symbols.
    Keyboard,
    /// Greek letters.
    Greek,
    /// Upside-down Latin letters.
    InvertedLetters,
    /// International Phonetic Alphabet.
    Ipa,
    /// Full-width forms.
    FullWidthCharacters,
    /// CJK unit squares.
    Units,
    /// Braille patterns.
    Braille,
    /// Extended Latin letters.
    Latin,
    /// Russian plus the Cyrillic supplement.
    Cyrillic,
    /// Cyrillic letters outside Russian.
    CyrillicSupplement,
    /// Chinese characters.
    Chinese,
    /// Kana.
    Japanese,
    /// Hangul jamo.
    Korean,
    /// Arabic script.
    Arabic,
    /// Ethiopic script.
    Ethiopian,
    /// Devanagari script.
    Devanagari,
    /// Bengali script.
    Bengali,
    /// Tamil script.
    Tamil,
    /// Tibetan script.
    Tibetan,
    /// Phoenician alphabet.
    Phoenician,
    /// Runic alphabet.
    Runes,
}

/// Constituents of [`CharsetId::Cyrillic`].
const CYRILLIC_PARTS: &[CharsetId] = &[CharsetId::Russian, CharsetId::CyrillicSupplement];

/// Constituents of [`CharsetId::Unicode`].
const UNICODE_PARTS: &[CharsetId] = &[
    CharsetId::Emoji,
    CharsetId::Sex,
    CharsetId::Keyboard,
    CharsetId::Currencies,
    CharsetId::Greek,
    CharsetId::MathematicalSymbols,
    CharsetId::MathematicalFonts,
    CharsetId::InvertedLetters,
    CharsetId::Braille,
    CharsetId::Ipa,
    CharsetId::FullWidthCharacters,
    CharsetId::Units,
    CharsetId::Latin,
    CharsetId::Cyrillic,
    CharsetId::Chinese,
    CharsetId::Japanese,
    CharsetId::Korean,
    CharsetId::Arabic,
    CharsetId::Ethiopian,
    CharsetId::Devanagari,
    CharsetId::Bengali,
    CharsetId::Tamil,
    CharsetId::Tibetan,
    CharsetId::Phoenician,
    CharsetId::Runes,
];

impl CharsetId {
    /// Every entry, in catalog order.
    pub const ALL: [CharsetId; 31] = [
        CharsetId::Unicode,
        CharsetId::Ascii,
        CharsetId::Polish,
        CharsetId::English,
        CharsetId::Russian,
        CharsetId::MathematicalSymbols,
        CharsetId::MathematicalFonts,
        CharsetId::Emoji,
        CharsetId::Currencies,
        CharsetId::Sex,
        CharsetId::Keyboard,
        CharsetId::Greek,
        CharsetId::InvertedLetters,
        CharsetId::Ipa,
        CharsetId::FullWidthCharacters,
        CharsetId::Units,
        CharsetId::Braille,
        CharsetId::Latin,
        CharsetId::Cyrillic,
        CharsetId::CyrillicSupplement,
        CharsetId::Chinese,
        CharsetId::Japanese,
        CharsetId::Korean,
        CharsetId::Arabic,
        CharsetId::Ethiopian,
        CharsetId::Devanagari,
        CharsetId::Bengali,
        CharsetId::Tamil,
        CharsetId::Tibetan,
        CharsetId::Phoenician,
        CharsetId::Runes,
    ];

    /// Canonical name of the entry.
    pub fn name(self) -> &'static str {
        match self {
            CharsetId::Unicode => "Unicode",
            CharsetId::Ascii => "ASCII",
            CharsetId::Polish => "Polish",
            CharsetId::English => "English",
            CharsetId::Russian => "Russian",
            CharsetId::MathematicalSymbols => "MathematicalSymbols",
            CharsetId::MathematicalFonts => "MathematicalFonts",
            CharsetId::Emoji => "Emoji",
            CharsetId::Currencies => "Currencies",
            CharsetId::Sex => "Sex",
            CharsetId::Keyboard => "Keyboard",
            CharsetId::Greek => "Greek",
            CharsetId::InvertedLetters => "InvertedLetters",
            CharsetId::Ipa => "IPA",
            CharsetId::FullWidthCharacters => "FullWidthCharacters",
            CharsetId::Units => "Units",
            CharsetId::Braille => "Braille",
            CharsetId::Latin => "Latin",
            CharsetId::Cyrillic => "Cyrillic",
            CharsetId::CyrillicSupplement => "CyrillicSupplement",
            CharsetId::Chinese => "Chinese",
            CharsetId::Japanese => "Japanese",
            CharsetId::Korean => "Korean",
            CharsetId::Arabic => "Arabic",
            CharsetId::Ethiopian => "Ethiopian",
            CharsetId::Devanagari => "Devanagari",
            CharsetId::Bengali => "Bengali",
            CharsetId::Tamil => "Tamil",
            CharsetId::Tibetan => "Tibetan",
            CharsetId::Phoenician => "Phoenician",
            CharsetId::Runes => "Runes",
        }
    }

    /// How the entry is built.
    pub fn definition(self) -> Definition {
        use Definition::{Composite, Primitive};

        match self {
            CharsetId::Unicode => Composite(UNICODE_PARTS),
            CharsetId::Cyrillic => Composite(CYRILLIC_PARTS),
            CharsetId::Ascii => Primitive(data::ASCII),
            CharsetId::Polish => Primitive(data::POLISH),
            CharsetId::English => Primitive(data::ENGLISH),
            CharsetId::Russian => Primitive(data::RUSSIAN),
            CharsetId::MathematicalSymbols => Primitive(data::MATHEMATICAL_SYMBOLS),
            CharsetId::MathematicalFonts => Primitive(data::MATHEMATICAL_FONTS),
            CharsetId::Emoji => Primitive(data::EMOJI),
            CharsetId::Currencies => Primitive(data::CURRENCIES),
            CharsetId::Sex => Primitive(data::SEX),
            CharsetId::Keyboard => Primitive(data::KEYBOARD),
            CharsetId::Greek => Primitive(data::GREEK),
            CharsetId::InvertedLetters => Primitive(data::INVERTED_LETTERS),
            CharsetId::Ipa => Primitive(data::IPA),
            CharsetId::FullWidthCharacters => Primitive(data::FULL_WIDTH_CHARACTERS),
            CharsetId::Units => Primitive(data::UNITS),
            CharsetId::Braille => Primitive(data::BRAILLE),
            CharsetId::Latin => Primitive(data::LATIN),
            CharsetId::CyrillicSupplement => Primitive(data::CYRILLIC_SUPPLEMENT),
            CharsetId::Chinese => Primitive(data::CHINESE),
            CharsetId::Japanese => Primitive(data::JAPANESE),
            CharsetId::Korean => Primitive(data::KOREAN),
            CharsetId::Arabic => Primitive(data::ARABIC),
            CharsetId::Ethiopian => Primitive(data::ETHIOPIAN),
            CharsetId::Devanagari => Primitive(data::DEVANAGARI),
            CharsetId::Bengali => Primitive(data::BENGALI),
            CharsetId::Tamil => Primitive(data::TAMIL),
            CharsetId::Tibetan => Primitive(data::TIBETAN),
            CharsetId::Phoenician => Primitive(data::PHOENICIAN),
            CharsetId::Runes => Primitive(data::RUNES),
        }
    }

    /// Returns true if the entry is a concatenation of other entries.
    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self.definition(), Definition::Composite(_))
    }
}

/// Lowercases and drops `-`, `_` and whitespace.
fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for CharsetId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise(s);
        CharsetId::ALL
            .into_iter()
            .find(|id| normalise(id.name()) == wanted)
            .ok_or_else(|| CatalogError::UnknownCharset(s.to_string()))
    }
}

impl fmt::Display for CharsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CharsetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CharsetId::from_str(&s).map_err(serde::de::Error::custom)
    }
}
