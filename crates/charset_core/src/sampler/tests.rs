//! Unit, statistical and property tests for the sampler.

use super::*;
use approx::assert_relative_eq;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

const AB: [char; 2] = ['A', 'B'];

#[test]
fn test_sample_length_and_membership() {
    let sampler = Sampler::from_seed(42);
    let charset: Vec<char> = "xyz".chars().collect();

    for length in [1, 2, 17, 500] {
        let runes = sampler.sample(length, &charset).unwrap();
        assert_eq!(runes.len(), length);
        assert!(runes.iter().all(|c| charset.contains(c)));
    }
}

#[test]
fn test_zero_length_is_empty() {
    let sampler = Sampler::from_seed(1);
    assert!(sampler.sample(0, &AB).unwrap().is_empty());
    assert_eq!(sampler.sample_string(0, &AB).unwrap(), "");
}

#[test]
fn test_empty_charset_is_rejected() {
    let sampler = Sampler::from_seed(1);
    assert_eq!(sampler.sample(5, &[]), Err(SamplerError::EmptyCharset));
    assert_eq!(sampler.sample(0, &[]), Err(SamplerError::EmptyCharset));
}

#[test]
fn test_empty_charset_consumes_no_randomness() {
    let sampler = Sampler::from_seed(5);
    let reference = Sampler::from_seed(5);

    let _ = sampler.sample(10, &[]);
    assert_eq!(sampler.sample(10, &AB), reference.sample(10, &AB));
}

#[test]
fn test_negative_length_is_rejected() {
    let sampler = Sampler::from_seed(1);
    assert_eq!(
        sampler.sample_signed(-1, &AB),
        Err(SamplerError::NegativeLength(-1))
    );
    assert_eq!(sampler.sample_signed(3, &AB).unwrap().len(), 3);
    assert_eq!(sampler.sample_signed(0, &AB).unwrap().len(), 0);
}

#[test]
fn test_huge_length_is_rejected_without_panicking() {
    let sampler = Sampler::from_seed(1);
    let reference = Sampler::from_seed(1);

    assert_eq!(
        sampler.sample(usize::MAX, &AB),
        Err(SamplerError::LengthTooLarge(usize::MAX as u64))
    );
    assert_eq!(
        sampler.sample_signed(i64::MAX, &AB),
        Err(SamplerError::LengthTooLarge(i64::MAX as u64))
    );
    // Still usable, and nothing was drawn.
    assert_eq!(sampler.sample(16, &AB), reference.sample(16, &AB));
}

#[test]
fn test_sample_follows_index_stream() {
    let sampler = Sampler::from_seed(2024);
    let mut rng = CharsetRng::from_seed(2024);
    let charset: Vec<char> = "αβγδε".chars().collect();

    let mut indices = vec![0usize; 64];
    rng.fill_indices(NonZeroUsize::new(charset.len()).unwrap(), &mut indices);
    let expected: Vec<char> = indices.iter().map(|&i| charset[i]).collect();

    assert_eq!(sampler.sample(64, &charset).unwrap(), expected);
}

#[test]
fn test_single_rune_charset() {
    let sampler = Sampler::from_seed(8);
    assert_eq!(sampler.sample_string(4, &['ж']).unwrap(), "жжжж");
}

#[test]
fn test_seeded_samplers_agree() {
    let a = Sampler::from_seed(2024);
    let b = Sampler::from_seed(2024);
    assert_eq!(a.seed(), 2024);

    for _ in 0..10 {
        assert_eq!(a.sample(32, &AB), b.sample(32, &AB));
    }
}

#[test]
fn test_sample_from_catalog_entry() {
    let sampler = Sampler::from_seed(3);
    let runes = Catalog::builtin().get(CharsetId::Phoenician).runes();

    let word = sampler.sample_from(12, CharsetId::Phoenician).unwrap();
    assert_eq!(word.chars().count(), 12);
    assert!(word.chars().all(|c| runes.contains(&c)));
}

#[test]
fn test_multi_byte_runes_count_as_one() {
    let sampler = Sampler::from_seed(11);
    let word = sampler.sample_from(20, CharsetId::MathematicalFonts).unwrap();
    assert_eq!(word.chars().count(), 20);
    assert_eq!(word.len(), 80);
}

#[test]
fn test_repeated_calls_differ() {
    let sampler = default_sampler();
    let first = sampler.sample(5, &AB).unwrap();
    let differs = (0..20).any(|_| sampler.sample(5, &AB).unwrap() != first);
    assert!(differs, "20 consecutive samples were identical");
}

#[test]
fn test_all_same_outcomes_are_rare() {
    let sampler = Sampler::from_seed(99);
    let trials = 32_000;
    let mut all_a = 0;
    let mut all_b = 0;

    for _ in 0..trials {
        let runes = sampler.sample(5, &AB).unwrap();
        assert_eq!(runes.len(), 5);
        if runes.iter().all(|&c| c == 'A') {
            all_a += 1;
        } else if runes.iter().all(|&c| c == 'B') {
            all_b += 1;
        }
    }

    // Expected 1000 each; standard deviation is about 31.
    assert!((800..1200).contains(&all_a), "all-A count {}", all_a);
    assert!((800..1200).contains(&all_b), "all-B count {}", all_b);
}

/// Chi-squared statistic of observed counts against a uniform expectation.
fn chi_squared(counts: &HashMap<char, usize>, k: usize, draws: usize) -> f64 {
    let expected = draws as f64 / k as f64;
    counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn test_uniformity_chi_squared() {
    // Critical value of chi-squared with 9 degrees of freedom at p = 0.001.
    const CRITICAL_9_DOF: f64 = 27.877;
    let charset: Vec<char> = "0123456789".chars().collect();
    let draws = 100_000;

    for seed in [1_u64, 42, 31337] {
        let sampler = Sampler::from_seed(seed);
        let runes = sampler.sample(draws, &charset).unwrap();

        let mut counts: HashMap<char, usize> = HashMap::new();
        for rune in runes {
            *counts.entry(rune).or_default() += 1;
        }

        assert_eq!(counts.len(), charset.len(), "some digit never drawn");
        let statistic = chi_squared(&counts, charset.len(), draws);
        assert!(
            statistic < CRITICAL_9_DOF,
            "chi-squared {:.3} exceeds {:.3} (seed={})",
            statistic,
            CRITICAL_9_DOF,
            seed
        );
    }
}

#[test]
fn test_duplicates_weight_the_draw() {
    // 'a' appears three times, so it should take about three quarters.
    let charset = ['a', 'a', 'a', 'b'];
    let draws = 100_000;
    let sampler = Sampler::from_seed(17);
    let runes = sampler.sample(draws, &charset).unwrap();

    let share = runes.iter().filter(|&&c| c == 'a').count() as f64 / draws as f64;
    assert_relative_eq!(share, 0.75, epsilon = 0.01);
}

#[test]
fn test_sampler_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Sampler>();

    let sampler = Arc::new(Sampler::from_seed(123));
    let charset: Arc<Vec<char>> = Arc::new("αβγδ".chars().collect());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            let charset = Arc::clone(&charset);
            thread::spawn(move || {
                for _ in 0..200 {
                    let runes = sampler.sample(16, &charset).unwrap();
                    assert_eq!(runes.len(), 16);
                    assert!(runes.iter().all(|c| charset.contains(c)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_poisoned_lock_is_recovered() {
    let sampler = Arc::new(Sampler::from_seed(4));
    let poisoner = Arc::clone(&sampler);

    let _ = thread::spawn(move || {
        let _guard = poisoner.rng.lock().unwrap();
        panic!("poison the sampler lock");
    })
    .join();

    assert!(sampler.rng.is_poisoned());
    assert_eq!(sampler.sample(3, &AB).unwrap().len(), 3);
}

#[test]
fn test_random_runes_uses_default_sampler() {
    let charset: Vec<char> = "qwerty".chars().collect();
    let runes = random_runes(9, &charset).unwrap();
    assert_eq!(runes.len(), 9);
    assert!(runes.iter().all(|c| charset.contains(c)));
    assert_eq!(random_runes(1, &[]), Err(SamplerError::EmptyCharset));
}

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Output length always equals the requested length.
    #[test]
    fn prop_length_is_exact(seed in any::<u64>(), length in 0..2_000usize, charset in prop::collection::vec(any::<char>(), 1..64)) {
        let sampler = Sampler::from_seed(seed);
        let runes = sampler.sample(length, &charset).unwrap();
        prop_assert_eq!(runes.len(), length);
    }

    /// No code point outside the input set ever appears.
    #[test]
    fn prop_output_within_charset(seed in any::<u64>(), length in 0..2_000usize, charset in prop::collection::vec(any::<char>(), 1..64)) {
        let sampler = Sampler::from_seed(seed);
        for rune in sampler.sample(length, &charset).unwrap() {
            prop_assert!(charset.contains(&rune), "{:?} not in charset (seed={})", rune, seed);
        }
    }

    /// Negative signed lengths are always rejected.
    #[test]
    fn prop_negative_length_rejected(length in i64::MIN..0) {
        let sampler = Sampler::from_seed(0);
        prop_assert_eq!(sampler.sample_signed(length, &AB), Err(SamplerError::NegativeLength(length)));
    }
}
