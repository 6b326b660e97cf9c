use std::collections::HashSet;

use crate::engine::filter::CharFilter;

/// Common English words, most frequent first.
const WORDS_EN: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when",
    "make", "can", "like", "time", "no", "just", "him", "know", "take", "people", "into",
    "year", "your", "good", "some", "could", "them", "see", "other", "than", "then", "now",
    "look", "only", "come", "its", "over", "think", "also", "back", "after", "use", "two",
    "how", "our", "work", "first", "well", "way", "even", "new", "want", "because", "any",
    "these", "give", "day", "most", "us", "is", "was", "are", "been", "has", "had", "were",
    "said", "did", "may", "must", "such", "here", "where", "why", "find", "long", "down",
    "call", "own", "old", "right", "left", "high", "low", "fast", "slow", "big", "small",
    "great", "best", "man", "woman", "child", "world", "life", "hand", "part", "place",
    "case", "point", "ask", "seem", "feel", "try", "leave", "keep", "let", "begin", "help",
    "show", "hear", "play", "run", "move", "live", "believe", "bring", "happen", "write",
    "sit", "stand", "lose", "pay", "meet", "include", "continue", "set", "learn", "change",
    "lead", "understand", "watch", "follow", "stop", "create", "speak", "read", "allow",
    "add",
];

/// Determiners and pronouns that open a sentence naturally.
pub const SENTENCE_STARTERS: &[&str] = &[
    "the", "a", "this", "that", "these", "those", "my", "your", "our", "some", "many",
];

pub struct Dictionary {
    words: Vec<&'static str>,
}

impl Dictionary {
    pub fn load() -> Self {
        let mut seen = HashSet::new();
        let words = WORDS_EN
            .iter()
            .copied()
            .filter(|w| seen.insert(*w))
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Words typeable with the allowed keys, in frequency order.
    pub fn find_matching(&self, filter: &CharFilter) -> Vec<&'static str> {
        self.words
            .iter()
            .copied()
            .filter(|w| filter.can_type(w))
            .collect()
    }
}
