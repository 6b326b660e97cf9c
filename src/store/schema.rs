use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::key_stats::{KeyRecord, KeyStatsStore, LATENCY_WINDOW};
use crate::engine::profile::LearnerProfile;

pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyCounts {
    pub correct: u32,
    pub incorrect: u32,
}

/// On-disk form of a [`LearnerProfile`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub key_accuracy: BTreeMap<char, AccuracyCounts>,
    #[serde(default)]
    pub key_speed: BTreeMap<char, Vec<f64>>,
    #[serde(default, alias = "total_keystrokes")]
    pub total_keys: u64,
    #[serde(default)]
    pub session_count: u32,
    #[serde(default)]
    pub unlocked_keys: Option<Vec<char>>,
    #[serde(default)]
    pub last_session_at: Option<DateTime<Utc>>,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::from_profile(&LearnerProfile::default())
    }
}

impl ProfileData {
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }

    pub fn from_profile(profile: &LearnerProfile) -> Self {
        let mut key_accuracy = BTreeMap::new();
        let mut key_speed = BTreeMap::new();
        for (&key, record) in &profile.stats.records {
            key_accuracy.insert(
                key,
                AccuracyCounts {
                    correct: record.correct,
                    incorrect: record.incorrect,
                },
            );
            key_speed.insert(key, record.recent_latencies_ms.iter().copied().collect());
        }

        Self {
            schema_version: SCHEMA_VERSION,
            key_accuracy,
            key_speed,
            total_keys: profile.total_keystrokes(),
            session_count: profile.session_count,
            unlocked_keys: Some(profile.unlocked_keys().iter().copied().collect()),
            last_session_at: None,
        }
    }

    /// A missing unlocked list means the starting keys; latency lists are
    /// trimmed to the most recent window.
    pub fn into_profile(self) -> LearnerProfile {
        let mut records: HashMap<char, KeyRecord> = HashMap::new();
        for (key, counts) in self.key_accuracy {
            let record = records.entry(key).or_default();
            record.correct = counts.correct;
            record.incorrect = counts.incorrect;
        }
        for (key, samples) in self.key_speed {
            let record = records.entry(key).or_default();
            let skip = samples.len().saturating_sub(LATENCY_WINDOW);
            record.recent_latencies_ms = samples.into_iter().skip(skip).collect();
        }

        let stats = KeyStatsStore {
            records,
            total_keystrokes: self.total_keys,
        };
        match self.unlocked_keys {
            Some(keys) => {
                let unlocked: BTreeSet<char> = keys.into_iter().collect();
                LearnerProfile::from_parts(stats, unlocked, self.session_count)
            }
            None => {
                let mut profile = LearnerProfile::new();
                profile.stats = stats;
                profile.session_count = self.session_count;
                profile
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_conversion_preserves_state() {
        let mut profile = LearnerProfile::new();
        profile.record_keystroke('a', true, 120.0);
        profile.record_keystroke('a', false, 240.0);
        profile.record_keystroke(' ', true, 90.0);
        profile.session_count = 3;

        let restored = ProfileData::from_profile(&profile).into_profile();
        assert_eq!(restored.total_keystrokes(), 3);
        assert_eq!(restored.session_count, 3);
        assert_eq!(restored.unlocked_keys(), profile.unlocked_keys());
        assert_eq!(restored.record('a'), profile.record('a'));
        assert_eq!(restored.record(' '), profile.record(' '));
    }

    #[test]
    fn test_deserialize_legacy_layout() {
        let json = r#"{
            "key_accuracy": {"a": {"correct": 10, "incorrect": 2}, " ": {"correct": 4, "incorrect": 0}},
            "key_speed": {"a": [150, 150, 200]},
            "total_keys": 16,
            "session_count": 2,
            "unlocked_keys": ["a", "s", "d", "f", "j", "k", "l", " ", "g"]
        }"#;
        let data: ProfileData = serde_json::from_str(json).unwrap();
        assert!(!data.needs_reset());
        let profile = data.into_profile();
        assert!(profile.is_unlocked('g'));
        assert_eq!(profile.total_keystrokes(), 16);
        assert!((profile.accuracy('a') - 83.333).abs() < 0.01);
        assert!((profile.average_speed('a') - 166.666).abs() < 0.01);
        assert_eq!(profile.record(' ').unwrap().correct, 4);
    }

    #[test]
    fn test_missing_unlocked_keys_uses_starting_set() {
        let data: ProfileData = serde_json::from_str(r#"{"total_keys": 5}"#).unwrap();
        let profile = data.into_profile();
        assert_eq!(profile.unlocked_count(), 8);
        assert_eq!(profile.total_keystrokes(), 5);
    }

    #[test]
    fn test_oversized_latency_list_is_trimmed() {
        let samples: Vec<f64> = (0..80).map(|i| i as f64).collect();
        let mut data = ProfileData::default();
        data.key_speed.insert('s', samples);
        let profile = data.into_profile();
        let latencies = &profile.record('s').unwrap().recent_latencies_ms;
        assert_eq!(latencies.len(), LATENCY_WINDOW);
        assert_eq!(latencies.front().copied(), Some(30.0));
    }

    #[test]
    fn test_unknown_version_needs_reset() {
        let data: ProfileData = serde_json::from_str(r#"{"schema_version": 9}"#).unwrap();
        assert!(data.needs_reset());
    }
}
