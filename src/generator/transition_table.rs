use std::collections::HashMap;

use crate::engine::filter::CharFilter;

const COMMON_BIGRAMS: &[&str] = &[
    "th", "he", "in", "er", "an", "re", "on", "at", "en", "nd", "ti", "es", "or", "te", "of",
    "ed", "is", "it", "al", "ar", "st", "to", "nt", "ng", "se", "ha", "as", "ou", "io", "le",
    "ea", "ch", "wh", "sh", "oo", "ee", "ai", "ay", "ly", "el",
];

/// First-order lookup of which letters commonly follow a given letter.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    pub transitions: HashMap<char, Vec<char>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    pub fn add(&mut self, first: char, second: char) {
        let followers = self.transitions.entry(first).or_default();
        if !followers.contains(&second) {
            followers.push(second);
        }
    }

    pub fn build_english() -> Self {
        let mut table = Self::new();
        for bigram in COMMON_BIGRAMS {
            let chars: Vec<char> = bigram.chars().collect();
            if let [first, second] = chars[..] {
                table.add(first, second);
            }
        }
        table
    }

    /// Followers of `first` that the filter allows.
    pub fn allowed_followers(&self, first: char, filter: &CharFilter) -> Vec<char> {
        self.transitions
            .get(&first)
            .map(|followers| {
                followers
                    .iter()
                    .copied()
                    .filter(|&c| filter.is_allowed(c))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_followers_of_t() {
        let table = TransitionTable::build_english();
        let filter = CharFilter::new('a'..='z');
        assert_eq!(table.allowed_followers('t', &filter), vec!['h', 'i', 'e', 'o']);
    }

    #[test]
    fn test_followers_respect_filter() {
        let table = TransitionTable::build_english();
        let filter = CharFilter::new(['a', 's', 'd', 'f', 'j', 'k', 'l', ' ']);
        assert_eq!(table.allowed_followers('a', &filter), vec!['l', 's']);
        assert!(table.allowed_followers('s', &filter).is_empty());
        assert!(table.allowed_followers('q', &filter).is_empty());
    }
}
