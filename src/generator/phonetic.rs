use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::filter::{CharFilter, is_vowel};
use crate::generator::FALLBACK_TEXT;

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 6;

/// Chance of starting an untargeted word with a vowel.
const VOWEL_START_PROBABILITY: f64 = 0.3;
/// Chance of reusing a difficult key for the next consonant or vowel.
const TARGET_REUSE_PROBABILITY: f64 = 0.5;

/// Builds pronounceable pseudo-words from whatever letters are unlocked.
pub struct PhoneticGenerator<'a> {
    rng: &'a mut SmallRng,
}

impl<'a> PhoneticGenerator<'a> {
    pub fn new(rng: &'a mut SmallRng) -> Self {
        Self { rng }
    }

    /// Alternates consonants and vowels, seeding the word with one of the
    /// `targets` when given. Without both letter classes the word is a uniform
    /// draw over the allowed keys.
    pub fn word(&mut self, filter: &CharFilter, targets: &[char]) -> String {
        if filter.is_empty() {
            return FALLBACK_TEXT.to_string();
        }

        let target_len = self.rng.gen_range(MIN_WORD_LEN..=MAX_WORD_LEN);
        let consonants = filter.consonants();
        let vowels = filter.vowels();

        if consonants.is_empty() || vowels.is_empty() {
            let pool = filter.symbols();
            return (0..target_len)
                .filter_map(|_| pool.choose(self.rng).copied())
                .collect();
        }

        let targets: Vec<char> = targets
            .iter()
            .copied()
            .filter(|&c| filter.is_allowed(c) && c.is_alphabetic())
            .collect();
        let target_consonants: Vec<char> =
            targets.iter().copied().filter(|&c| !is_vowel(c)).collect();
        let target_vowels: Vec<char> = targets.iter().copied().filter(|&c| is_vowel(c)).collect();

        let mut word = Vec::with_capacity(target_len);
        let mut last_was_vowel = if let Some(&seed) = targets.choose(self.rng) {
            word.push(seed);
            is_vowel(seed)
        } else if self.rng.gen_bool(VOWEL_START_PROBABILITY) {
            word.extend(vowels.choose(self.rng));
            true
        } else {
            word.extend(consonants.choose(self.rng));
            false
        };

        while word.len() < target_len {
            let (preferred, pool) = if last_was_vowel {
                (&target_consonants, &consonants)
            } else {
                (&target_vowels, &vowels)
            };
            let next = if !preferred.is_empty() && self.rng.gen_bool(TARGET_REUSE_PROBABILITY) {
                preferred.choose(self.rng)
            } else {
                pool.choose(self.rng)
            };
            word.extend(next);
            last_was_vowel = !last_was_vowel;
        }

        word.into_iter().collect()
    }
}
