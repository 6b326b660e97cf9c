use std::time::Instant;

use crate::engine::difficulty::DifficultyModel;
use crate::engine::letter_unlock;
use crate::engine::profile::LearnerProfile;
use crate::generator::TextGenerator;
use crate::session::drill::DrillState;
use crate::session::input::{self, KeystrokeEvent};
use crate::store::StoreError;
use crate::store::json_store::JsonStore;

/// Owns the learner profile for the lifetime of the process and drives the
/// record → unlock → generate cycle between exercises.
pub struct PracticeSession {
    profile: LearnerProfile,
    generator: Box<dyn TextGenerator>,
    store: Option<JsonStore>,
    exercise_size: usize,
    drill: DrillState,
    pub keys_typed: u64,
    pub errors: u64,
    pub last_unlocked: Option<char>,
    pub last_save_error: Option<String>,
}

impl PracticeSession {
    pub fn new(
        profile: LearnerProfile,
        generator: Box<dyn TextGenerator>,
        store: Option<JsonStore>,
        exercise_size: usize,
    ) -> Self {
        Self {
            profile,
            generator,
            store,
            exercise_size,
            drill: DrillState::new(""),
            keys_typed: 0,
            errors: 0,
            last_unlocked: None,
            last_save_error: None,
        }
    }

    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    pub fn drill(&self) -> &DrillState {
        &self.drill
    }

    pub fn difficulty(&self) -> DifficultyModel<'_> {
        DifficultyModel::new(&self.profile)
    }

    /// Count the session and show the first exercise.
    pub fn begin(&mut self) {
        self.profile.session_count += 1;
        tracing::info!(session = self.profile.session_count, "session started");
        self.start_exercise();
    }

    /// Exercise boundary: maybe unlock a key (saving right away so curriculum
    /// progress survives a crash), then generate fresh text.
    pub fn start_exercise(&mut self) -> Option<char> {
        let unlocked = letter_unlock::evaluate(&mut self.profile);
        if let Some(key) = unlocked {
            tracing::info!(
                key = %key.escape_debug(),
                unlocked = self.profile.unlocked_count(),
                total_keystrokes = self.profile.total_keystrokes(),
                "unlocked new key"
            );
            self.last_unlocked = Some(key);
            let _ = self.persist();
        }

        let text = self.generator.generate(&self.profile, self.exercise_size);
        tracing::debug!(%text, "new exercise");
        self.drill = DrillState::new(&text);
        unlocked
    }

    /// Abandon the current text for a new one. Keystrokes already typed stay recorded.
    pub fn restart(&mut self) -> Option<char> {
        tracing::debug!(
            typed = self.drill.cursor,
            length = self.drill.target.len(),
            "exercise abandoned"
        );
        self.start_exercise()
    }

    /// Feed one typed character. Returns true when it completed the exercise.
    pub fn type_char(&mut self, ch: char) -> bool {
        self.type_char_at(ch, Instant::now()).is_some() && self.drill.is_complete()
    }

    pub fn type_char_at(&mut self, ch: char, now: Instant) -> Option<KeystrokeEvent> {
        let event = input::process_char(&mut self.drill, ch, now)?;
        self.profile
            .record_keystroke(event.expected, event.correct, event.latency_ms);
        self.keys_typed += 1;
        if !event.correct {
            self.errors += 1;
        }
        Some(event)
    }

    pub fn finish(&mut self) -> Result<(), StoreError> {
        tracing::info!(
            keys = self.keys_typed,
            errors = self.errors,
            total_keystrokes = self.profile.total_keystrokes(),
            "session finished"
        );
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        match store.save_profile(&self.profile) {
            Ok(()) => {
                self.last_save_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save profile");
                self.last_save_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
