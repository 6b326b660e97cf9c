use std::time::Instant;

use crate::session::input::CharStatus;

/// One exercise: the target text and how far the learner got through it.
pub struct DrillState {
    pub target: Vec<char>,
    pub input: Vec<CharStatus>,
    pub cursor: usize,
    pub shown_at: Instant,
    pub last_key_at: Instant,
    pub finished_at: Option<Instant>,
}

impl DrillState {
    pub fn new(text: &str) -> Self {
        Self::shown_at(text, Instant::now())
    }

    pub fn shown_at(text: &str, now: Instant) -> Self {
        Self {
            target: text.chars().collect(),
            input: Vec::new(),
            cursor: 0,
            shown_at: now,
            last_key_at: now,
            finished_at: None,
        }
    }

    pub fn text(&self) -> String {
        self.target.iter().collect()
    }

    pub fn expected(&self) -> Option<char> {
        self.target.get(self.cursor).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.target.len()
    }

    pub fn elapsed_secs(&self) -> f64 {
        let end = self.finished_at.unwrap_or(self.last_key_at);
        end.duration_since(self.shown_at).as_secs_f64()
    }

    pub fn correct_count(&self) -> usize {
        self.input
            .iter()
            .filter(|s| matches!(s, CharStatus::Correct))
            .count()
    }

    pub fn incorrect_count(&self) -> usize {
        self.input.len() - self.correct_count()
    }

    /// Five typed characters make one word, counted from when the text was shown.
    pub fn wpm(&self) -> f64 {
        let elapsed = self.elapsed_secs();
        if elapsed < 0.1 {
            return 0.0;
        }
        (self.input.len() as f64 / 5.0) / (elapsed / 60.0)
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.input.len();
        if total == 0 {
            return 100.0;
        }
        self.correct_count() as f64 / total as f64 * 100.0
    }

    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.cursor as f64 / self.target.len() as f64
    }
}
