use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::difficulty::DifficultyModel;
use crate::engine::filter::CharFilter;
use crate::engine::focus::{FocusRegime, SENTENCE_FLOW_ACCURACY};
use crate::engine::profile::LearnerProfile;
use crate::generator::dictionary::{Dictionary, SENTENCE_STARTERS};
use crate::generator::phonetic::PhoneticGenerator;
use crate::generator::{FALLBACK_TEXT, TextGenerator};

/// How many of the hardest letters word selection aims at.
pub const TOP_DIFFICULT_KEYS: usize = 5;

pub struct WordGenerator {
    dictionary: Dictionary,
    rng: SmallRng,
}

impl WordGenerator {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            dictionary: Dictionary::load(),
            rng,
        }
    }

    fn pseudo_words(&mut self, filter: &CharFilter, targets: &[char], word_count: usize) -> String {
        let mut phonetic = PhoneticGenerator::new(&mut self.rng);
        (0..word_count)
            .map(|_| phonetic.word(filter, targets))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Groups words by how many distinct difficult keys they contain.
/// Index `n` holds the words containing exactly `n` of them.
pub fn bucket_by_difficult_keys(
    words: &[&'static str],
    difficult: &[char],
) -> Vec<Vec<&'static str>> {
    let mut buckets = vec![Vec::new(); difficult.len() + 1];
    for &word in words {
        let hits = difficult.iter().filter(|&&key| word.contains(key)).count();
        buckets[hits].push(word);
    }
    buckets
}

/// Draws from the richest non-empty bucket at or above `min_hits`.
fn pick_targeted(
    rng: &mut SmallRng,
    buckets: &[Vec<&'static str>],
    min_hits: usize,
) -> Option<&'static str> {
    (min_hits..buckets.len())
        .rev()
        .map(|hits| &buckets[hits])
        .find(|bucket| !bucket.is_empty())?
        .choose(rng)
        .copied()
}

impl TextGenerator for WordGenerator {
    fn generate(&mut self, profile: &LearnerProfile, word_count: usize) -> String {
        let filter = CharFilter::from_profile(profile);
        if filter.is_empty() {
            return FALLBACK_TEXT.to_string();
        }

        let model = DifficultyModel::new(profile);
        let difficult = model.top_difficult_letters(TOP_DIFFICULT_KEYS);
        let usable = self.dictionary.find_matching(&filter);
        if usable.is_empty() {
            return self.pseudo_words(&filter, &difficult, word_count);
        }

        let avg_accuracy = model.average_letter_accuracy();
        let regime = FocusRegime::for_accuracy(avg_accuracy);
        let buckets = bucket_by_difficult_keys(&usable, &difficult);

        let mut words: Vec<&str> = Vec::with_capacity(word_count);
        for _ in 0..word_count {
            let targeted = !difficult.is_empty() && self.rng.gen_bool(regime.focus_probability);
            let word = if targeted {
                pick_targeted(&mut self.rng, &buckets, regime.min_difficult_keys)
            } else {
                None
            };
            words.extend(word.or_else(|| usable.choose(&mut self.rng).copied()));
        }

        if avg_accuracy > SENTENCE_FLOW_ACCURACY && !words.is_empty() {
            let starters: Vec<&str> = usable
                .iter()
                .copied()
                .filter(|w| SENTENCE_STARTERS.contains(w))
                .collect();
            if let Some(&starter) = starters.choose(&mut self.rng) {
                words[0] = starter;
            }
        }

        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;

    use super::*;
    use crate::engine::key_stats::KeyStatsStore;

    fn generator() -> WordGenerator {
        WordGenerator::new(SmallRng::seed_from_u64(42))
    }

    fn profile_with(keys: &str) -> LearnerProfile {
        let unlocked: BTreeSet<char> = keys.chars().collect();
        LearnerProfile::from_parts(KeyStatsStore::default(), unlocked, 0)
    }

    #[test]
    fn test_bucket_counts_distinct_keys() {
        let buckets = bucket_by_difficult_keys(&["all", "ask", "add", "a"], &['a', 'l', 's']);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[1], vec!["add", "a"]);
        assert_eq!(buckets[2], vec!["all", "ask"]);
        assert!(buckets[3].is_empty());
    }

    #[test]
    fn test_pick_targeted_prefers_richest_bucket() {
        let mut rng = SmallRng::seed_from_u64(1);
        let buckets = vec![vec!["x"], vec!["y"], vec![], vec!["z"]];
        for _ in 0..20 {
            assert_eq!(pick_targeted(&mut rng, &buckets, 1), Some("z"));
        }
        let sparse = vec![vec!["x"], vec!["y"], vec![]];
        assert_eq!(pick_targeted(&mut rng, &sparse, 2), None);
        assert_eq!(pick_targeted(&mut rng, &sparse, 1), Some("y"));
    }

    #[test]
    fn test_words_use_only_unlocked_keys() {
        let mut generator = generator();
        let profile = profile_with("asdfjkl ghetinro");
        let filter = CharFilter::from_profile(&profile);
        for _ in 0..50 {
            let text = generator.generate(&profile, 12);
            let words: Vec<&str> = text.split(' ').collect();
            assert_eq!(words.len(), 12);
            assert!(words.iter().all(|w| filter.can_type(w)), "{text}");
        }
    }

    #[test]
    fn test_accurate_learner_opens_with_starter() {
        let mut generator = generator();
        let mut profile = LearnerProfile::new();
        for key in profile.unlocked_letters() {
            profile.record_keystroke(key, true, 120.0);
        }
        for _ in 0..20 {
            let text = generator.generate(&profile, 6);
            // "a" is the only starter typeable on the home row
            assert_eq!(text.split(' ').next(), Some("a"), "{text}");
        }
    }

    #[test]
    fn test_no_usable_words_falls_back_to_pseudo_words() {
        let mut generator = generator();
        let profile = profile_with("qxz");
        let text = generator.generate(&profile, 5);
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(words.len(), 5);
        assert!(
            words
                .iter()
                .all(|w| !w.is_empty() && w.chars().all(|c| "qxz".contains(c)))
        );
    }

    #[test]
    fn test_empty_unlocked_set_returns_fallback() {
        let mut generator = generator();
        let profile = profile_with("");
        assert_eq!(generator.generate(&profile, 10), FALLBACK_TEXT);
    }

    #[test]
    fn test_zero_words_is_empty() {
        let mut generator = generator();
        assert_eq!(generator.generate(&LearnerProfile::new(), 0), "");
    }
}
