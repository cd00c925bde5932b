//! End-to-end sampling scenarios across the catalog.

use charset_core::{Catalog, CharsetError, CharsetId, Result, Sampler, SamplerError};

/// Samples a named entry, propagating lookup and sampling errors.
fn sample_named(sampler: &Sampler, name: &str, length: usize) -> Result<String> {
    let set = Catalog::builtin().lookup(name)?;
    Ok(sampler.sample_string(length, set.runes())?)
}

#[test]
fn test_every_entry_can_be_sampled() {
    let sampler = Sampler::from_seed(2026);

    for set in Catalog::builtin().iter() {
        for length in [0, 1, 50] {
            let runes = sampler.sample(length, set.runes()).unwrap();
            assert_eq!(runes.len(), length, "{}", set.name());
            assert!(
                runes.iter().all(|c| set.runes().contains(c)),
                "{} produced a foreign code point",
                set.name()
            );
        }
    }
}

#[test]
fn test_random_length_ascii_and_unicode() {
    let sampler = Sampler::from_seed(10);
    let ascii = Catalog::builtin().get(CharsetId::Ascii);
    let unicode = Catalog::builtin().get(CharsetId::Unicode);

    for length in [0, 3, 17, 49] {
        assert_eq!(sampler.sample(length, ascii.runes()).unwrap().len(), length);
        assert_eq!(sampler.sample(length, unicode.runes()).unwrap().len(), length);
    }
}

#[test]
fn test_sample_by_name() {
    let sampler = Sampler::from_seed(3);

    let word = sample_named(&sampler, "russian", 10).unwrap();
    let russian = Catalog::builtin().get(CharsetId::Russian);
    assert!(word.chars().all(|c| russian.runes().contains(&c)));

    let err = sample_named(&sampler, "Elvish", 10).unwrap_err();
    assert!(matches!(err, CharsetError::Catalog(_)));
    assert!(err.to_string().contains("Elvish"));
}

#[test]
fn test_custom_charset() {
    let sampler = Sampler::from_seed(8);
    let custom: Vec<char> = "AB".chars().collect();

    let runes = sampler.sample(5, &custom).unwrap();
    assert_eq!(runes.len(), 5);
    assert!(runes.iter().all(|&c| c == 'A' || c == 'B'));

    let err = sampler.sample(5, &[]).unwrap_err();
    assert_eq!(err, SamplerError::EmptyCharset);
    assert!(err.is_invalid_argument());
}

#[test]
fn test_ascii_output_is_plain_ascii() {
    let sampler = Sampler::from_seed(64);
    let text = sampler.sample_from(1_000, CharsetId::Ascii).unwrap();
    assert!(text.is_ascii());
    assert!(!text.contains(|c: char| matches!(c, '"' | '\'' | '\\' | '/' | '`')));
}
