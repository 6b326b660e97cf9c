use std::collections::BTreeSet;

use crate::engine::profile::LearnerProfile;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Snapshot of the keys a generator may emit.
pub struct CharFilter {
    pub allowed: BTreeSet<char>,
}

impl CharFilter {
    pub fn new(allowed: impl IntoIterator<Item = char>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn from_profile(profile: &LearnerProfile) -> Self {
        Self {
            allowed: profile.unlocked_keys().clone(),
        }
    }

    /// Case-insensitive membership test.
    pub fn is_allowed(&self, ch: char) -> bool {
        self.allowed.contains(&ch.to_ascii_lowercase())
    }

    pub fn can_type(&self, word: &str) -> bool {
        word.chars().all(|c| self.is_allowed(c))
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn symbols(&self) -> Vec<char> {
        self.allowed.iter().copied().collect()
    }

    pub fn letters(&self) -> Vec<char> {
        self.allowed
            .iter()
            .copied()
            .filter(|c| c.is_alphabetic())
            .collect()
    }

    pub fn vowels(&self) -> Vec<char> {
        self.letters()
            .into_iter()
            .filter(|c| VOWELS.contains(c))
            .collect()
    }

    pub fn consonants(&self) -> Vec<char> {
        self.letters()
            .into_iter()
            .filter(|c| c.is_ascii_lowercase() && !VOWELS.contains(c))
            .collect()
    }
}

pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}
