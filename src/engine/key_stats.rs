use std::collections::{HashMap, VecDeque};

/// Number of recent latency samples kept per key.
pub const LATENCY_WINDOW: usize = 50;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyRecord {
    pub correct: u32,
    pub incorrect: u32,
    pub recent_latencies_ms: VecDeque<f64>,
}

impl KeyRecord {
    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Percentage of correct attempts; a key nobody has typed yet is 100%.
    pub fn accuracy(&self) -> f64 {
        let total = self.attempts();
        if total == 0 {
            return 100.0;
        }
        self.correct as f64 / total as f64 * 100.0
    }

    /// Mean of the retained latency samples, or 0.0 without samples.
    pub fn average_speed(&self) -> f64 {
        if self.recent_latencies_ms.is_empty() {
            return 0.0;
        }
        self.recent_latencies_ms.iter().sum::<f64>() / self.recent_latencies_ms.len() as f64
    }

    pub fn push_latency(&mut self, latency_ms: f64) {
        self.recent_latencies_ms.push_back(latency_ms);
        while self.recent_latencies_ms.len() > LATENCY_WINDOW {
            self.recent_latencies_ms.pop_front();
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct KeyStatsStore {
    pub records: HashMap<char, KeyRecord>,
    pub total_keystrokes: u64,
}

impl KeyStatsStore {
    pub fn record_keystroke(&mut self, key: char, correct: bool, latency_ms: f64) {
        let record = self.records.entry(key).or_default();
        if correct {
            record.correct += 1;
        } else {
            record.incorrect += 1;
        }
        record.push_latency(latency_ms);
        self.total_keystrokes += 1;
    }

    pub fn accuracy(&self, key: char) -> f64 {
        self.records.get(&key).map(KeyRecord::accuracy).unwrap_or(100.0)
    }

    pub fn average_speed(&self, key: char) -> f64 {
        self.records
            .get(&key)
            .map(KeyRecord::average_speed)
            .unwrap_or(0.0)
    }

    pub fn get_record(&self, key: char) -> Option<&KeyRecord> {
        self.records.get(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untyped_key_defaults() {
        let store = KeyStatsStore::default();
        assert_eq!(store.accuracy('a'), 100.0);
        assert_eq!(store.average_speed('a'), 0.0);
        assert!(store.get_record('a').is_none());
    }

    #[test]
    fn test_record_keystroke_creates_record() {
        let mut store = KeyStatsStore::default();
        store.record_keystroke('e', true, 180.0);
        store.record_keystroke('e', false, 220.0);

        let record = store.get_record('e').unwrap();
        assert_eq!(record.correct, 1);
        assert_eq!(record.incorrect, 1);
        assert_eq!(store.total_keystrokes, 2);
        assert_eq!(store.accuracy('e'), 50.0);
        assert!((store.average_speed('e') - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_records_keys_outside_any_curriculum() {
        let mut store = KeyStatsStore::default();
        store.record_keystroke('%', true, 300.0);
        assert_eq!(store.get_record('%').unwrap().correct, 1);
    }

    #[test]
    fn test_latency_window_evicts_oldest() {
        let mut store = KeyStatsStore::default();
        for i in 0..=LATENCY_WINDOW {
            store.record_keystroke('k', true, i as f64);
        }
        let record = store.get_record('k').unwrap();
        assert_eq!(record.recent_latencies_ms.len(), LATENCY_WINDOW);
        // Sample 0 was the 51st-from-last insertion
        assert_eq!(record.recent_latencies_ms.front().copied(), Some(1.0));
        assert_eq!(
            record.recent_latencies_ms.back().copied(),
            Some(LATENCY_WINDOW as f64)
        );
        assert_eq!(record.attempts(), LATENCY_WINDOW as u32 + 1);
    }

    #[test]
    fn test_average_speed_uses_only_recent_window() {
        let mut store = KeyStatsStore::default();
        for _ in 0..LATENCY_WINDOW {
            store.record_keystroke('j', true, 400.0);
        }
        for _ in 0..LATENCY_WINDOW {
            store.record_keystroke('j', true, 100.0);
        }
        assert!((store.average_speed('j') - 100.0).abs() < f64::EPSILON);
    }
}
