use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use homerow::session::practice::PracticeSession;

use crate::ui::theme::Theme;

/// Pause after a finished text so the learner sees the final keystroke.
const COMPLETION_PAUSE: Duration = Duration::from_millis(500);

pub struct App {
    pub session: PracticeSession,
    pub theme: Theme,
    pub should_quit: bool,
    pub completed_at: Option<Instant>,
    pub status: Option<String>,
}

impl App {
    pub fn new(mut session: PracticeSession) -> Self {
        session.begin();
        Self {
            session,
            theme: Theme::default(),
            should_quit: false,
            completed_at: None,
            status: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                let unlocked = self.session.restart();
                self.after_boundary(unlocked);
            }
            KeyCode::Char(ch) if (' '..='~').contains(&ch) => {
                if self.completed_at.is_none() && self.session.type_char(ch) {
                    self.completed_at = Some(Instant::now());
                }
            }
            _ => {}
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(done) = self.completed_at
            && done.elapsed() >= COMPLETION_PAUSE
        {
            self.next_exercise();
        }
    }

    fn next_exercise(&mut self) {
        let unlocked = self.session.start_exercise();
        self.after_boundary(unlocked);
    }

    fn after_boundary(&mut self, unlocked: Option<char>) {
        self.completed_at = None;
        if let Some(key) = unlocked {
            let label = if key == ' ' {
                "[space]".to_string()
            } else {
                key.to_string()
            };
            self.status = Some(format!("New key unlocked: {label}"));
        }
        if let Some(err) = &self.session.last_save_error {
            self.status = Some(format!("Could not save progress: {err}"));
        }
    }
}
