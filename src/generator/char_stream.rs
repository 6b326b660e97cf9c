use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::difficulty::DifficultyModel;
use crate::engine::filter::CharFilter;
use crate::engine::profile::LearnerProfile;
use crate::generator::transition_table::TransitionTable;
use crate::generator::{FALLBACK_TEXT, TextGenerator};

/// Chance that a position after the first is a fresh weighted draw rather
/// than a bigram continuation of the previous key.
const WEIGHTED_DRAW_PROBABILITY: f64 = 0.7;

const MIN_LETTER_WEIGHT: f64 = 10.0;
const LETTER_WEIGHT_BONUS: f64 = 20.0;
const NON_LETTER_WEIGHT: f64 = 5.0;

/// Sampling weight for one unlocked key. Harder letters come up more often;
/// space and punctuation stay rare.
pub fn key_weight(model: &DifficultyModel, key: char) -> f64 {
    if key.is_alphabetic() {
        (model.difficulty(key) + LETTER_WEIGHT_BONUS).max(MIN_LETTER_WEIGHT)
    } else {
        NON_LETTER_WEIGHT
    }
}

/// Emits a stream of single keys, mixing weighted draws with common bigrams.
pub struct CharStreamGenerator {
    table: TransitionTable,
    rng: SmallRng,
}

impl CharStreamGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            table: TransitionTable::build_english(),
            rng,
        }
    }
}

impl TextGenerator for CharStreamGenerator {
    fn generate(&mut self, profile: &LearnerProfile, length: usize) -> String {
        let filter = CharFilter::from_profile(profile);
        let keys = filter.symbols();
        let model = DifficultyModel::new(profile);
        let weights: Vec<f64> = keys.iter().map(|&k| key_weight(&model, k)).collect();
        let Ok(dist) = WeightedIndex::new(&weights) else {
            return FALLBACK_TEXT.to_string();
        };

        let mut text: Vec<char> = Vec::with_capacity(length);
        for _ in 0..length {
            let continuation = match text.last() {
                Some(&prev) if !self.rng.gen_bool(WEIGHTED_DRAW_PROBABILITY) => self
                    .table
                    .allowed_followers(prev, &filter)
                    .choose(&mut self.rng)
                    .copied(),
                _ => None,
            };
            let next = continuation.unwrap_or_else(|| keys[dist.sample(&mut self.rng)]);
            text.push(next);
        }

        text.into_iter().collect()
    }
}
