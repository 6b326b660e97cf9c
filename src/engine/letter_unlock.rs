use crate::engine::difficulty::DifficultyModel;
use crate::engine::profile::LearnerProfile;

/// Order in which keys join the curriculum: home row and space, the inner
/// index-finger keys, then the remaining letters by frequency.
pub const CURRICULUM_ORDER: &[char] = &[
    'a', 's', 'd', 'f', 'j', 'k', 'l', ' ', 'g', 'h', 'e', 'i', 'r', 't', 'n', 'o', 'u', 'w',
    'y', 'p', 'c', 'm', 'b', 'v', 'q', 'x', 'z',
];

/// No further unlocks once this many keys are active.
pub const MAX_UNLOCKED_KEYS: usize = 26;

/// Average difficulty of the active set must fall below this before a new key is added.
pub const UNLOCK_DIFFICULTY_THRESHOLD: f64 = 20.0;

/// Keystrokes required per active key before the averages are trusted.
pub const KEYSTROKES_PER_KEY: u64 = 50;

pub fn should_unlock_next(profile: &LearnerProfile) -> bool {
    let unlocked = profile.unlocked_count();
    if unlocked >= MAX_UNLOCKED_KEYS {
        return false;
    }

    let avg_difficulty = DifficultyModel::new(profile).average_difficulty();
    avg_difficulty < UNLOCK_DIFFICULTY_THRESHOLD
        && profile.total_keystrokes() > KEYSTROKES_PER_KEY * unlocked as u64
}

pub fn next_key_to_unlock(profile: &LearnerProfile) -> Option<char> {
    CURRICULUM_ORDER
        .iter()
        .copied()
        .find(|&key| !profile.is_unlocked(key))
}

/// Add `key` to the active set. Returns false if it was already unlocked.
pub fn unlock(profile: &mut LearnerProfile, key: char) -> bool {
    profile.insert_unlocked(key)
}

/// Run the exercise-boundary check and unlock the next key if the learner is ready.
pub fn evaluate(profile: &mut LearnerProfile) -> Option<char> {
    if !should_unlock_next(profile) {
        return None;
    }
    let key = next_key_to_unlock(profile)?;
    unlock(profile, key).then_some(key)
}

/// Fraction of the curriculum that is active.
pub fn progress(profile: &LearnerProfile) -> f64 {
    let active = CURRICULUM_ORDER
        .iter()
        .filter(|&&key| profile.is_unlocked(key))
        .count();
    active as f64 / CURRICULUM_ORDER.len() as f64
}
