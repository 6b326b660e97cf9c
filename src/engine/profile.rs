use std::collections::BTreeSet;

use crate::engine::key_stats::{KeyRecord, KeyStatsStore};

/// Keys every new learner starts with: the home row plus space.
pub const STARTING_KEYS: &[char] = &['a', 's', 'd', 'f', 'j', 'k', 'l', ' '];

/// Everything the engine knows about one learner.
///
/// The unlocked set only grows; the sole way to shrink it is [`LearnerProfile::reset`].
#[derive(Clone, Debug)]
pub struct LearnerProfile {
    pub stats: KeyStatsStore,
    unlocked_keys: BTreeSet<char>,
    pub session_count: u32,
}

impl LearnerProfile {
    pub fn new() -> Self {
        Self {
            stats: KeyStatsStore::default(),
            unlocked_keys: STARTING_KEYS.iter().copied().collect(),
            session_count: 0,
        }
    }

    pub fn from_parts(
        stats: KeyStatsStore,
        unlocked_keys: BTreeSet<char>,
        session_count: u32,
    ) -> Self {
        Self {
            stats,
            unlocked_keys,
            session_count,
        }
    }

    pub fn record_keystroke(&mut self, key: char, correct: bool, latency_ms: f64) {
        self.stats.record_keystroke(key, correct, latency_ms);
    }

    pub fn accuracy(&self, key: char) -> f64 {
        self.stats.accuracy(key)
    }

    pub fn average_speed(&self, key: char) -> f64 {
        self.stats.average_speed(key)
    }

    pub fn record(&self, key: char) -> Option<&KeyRecord> {
        self.stats.get_record(key)
    }

    pub fn total_keystrokes(&self) -> u64 {
        self.stats.total_keystrokes
    }

    pub fn unlocked_keys(&self) -> &BTreeSet<char> {
        &self.unlocked_keys
    }

    pub fn is_unlocked(&self, key: char) -> bool {
        self.unlocked_keys.contains(&key)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked_keys.len()
    }

    /// Alphabetic members of the unlocked set, in code point order.
    pub fn unlocked_letters(&self) -> Vec<char> {
        self.unlocked_keys
            .iter()
            .copied()
            .filter(|c| c.is_alphabetic())
            .collect()
    }

    pub(crate) fn insert_unlocked(&mut self, key: char) -> bool {
        self.unlocked_keys.insert(key)
    }

    /// Forget all statistics and return to the starting curriculum.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self::new()
    }
}
