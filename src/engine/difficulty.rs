use std::cmp::Ordering;

use crate::engine::profile::LearnerProfile;

/// Keystroke latency treated as "average"; 100ms counts as excellent.
pub const BASELINE_LATENCY_MS: f64 = 200.0;

/// Speed component assumed for an unlocked key with no latency samples yet.
const NO_SPEED_DATA_SCORE: f64 = 50.0;

const ACCURACY_WEIGHT: f64 = 0.7;
const SPEED_WEIGHT: f64 = 0.3;

/// Speed component of the difficulty score, 0..=100.
pub fn speed_score(average_speed_ms: f64) -> f64 {
    if average_speed_ms > 0.0 {
        (average_speed_ms / BASELINE_LATENCY_MS * 50.0).min(100.0)
    } else {
        NO_SPEED_DATA_SCORE
    }
}

/// Blend of inverted accuracy and normalized speed. Higher means more practice needed.
pub fn score(accuracy: f64, average_speed_ms: f64) -> f64 {
    let accuracy_score = 100.0 - accuracy;
    (ACCURACY_WEIGHT * accuracy_score + SPEED_WEIGHT * speed_score(average_speed_ms))
        .clamp(0.0, 100.0)
}

/// Read-only view that scores keys against a learner profile.
pub struct DifficultyModel<'a> {
    profile: &'a LearnerProfile,
}

impl<'a> DifficultyModel<'a> {
    pub fn new(profile: &'a LearnerProfile) -> Self {
        Self { profile }
    }

    /// Locked keys are never difficult: they have not been practiced yet.
    pub fn difficulty(&self, key: char) -> f64 {
        if !self.profile.is_unlocked(key) {
            return 0.0;
        }
        score(self.profile.accuracy(key), self.profile.average_speed(key))
    }

    /// Scores sorted hardest first; equal scores fall back to code point order.
    pub fn rank(&self, keys: impl IntoIterator<Item = char>) -> Vec<(char, f64)> {
        let mut ranked: Vec<(char, f64)> = keys
            .into_iter()
            .map(|key| (key, self.difficulty(key)))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked
    }

    pub fn rank_by_difficulty(&self) -> Vec<(char, f64)> {
        self.rank(self.profile.unlocked_keys().iter().copied())
    }

    /// The `count` hardest unlocked letters. Space and punctuation never qualify.
    pub fn top_difficult_letters(&self, count: usize) -> Vec<char> {
        self.rank(self.profile.unlocked_letters())
            .into_iter()
            .take(count)
            .map(|(key, _)| key)
            .collect()
    }

    /// Mean difficulty over the unlocked set; 100 when nothing is unlocked.
    pub fn average_difficulty(&self) -> f64 {
        let unlocked = self.profile.unlocked_keys();
        if unlocked.is_empty() {
            return 100.0;
        }
        unlocked.iter().map(|&k| self.difficulty(k)).sum::<f64>() / unlocked.len() as f64
    }

    /// Mean accuracy over unlocked letters; 100 when there are none.
    pub fn average_letter_accuracy(&self) -> f64 {
        let letters = self.profile.unlocked_letters();
        if letters.is_empty() {
            return 100.0;
        }
        letters.iter().map(|&k| self.profile.accuracy(k)).sum::<f64>() / letters.len() as f64
    }
}
