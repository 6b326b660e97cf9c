use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use homerow::engine::letter_unlock::{self, CURRICULUM_ORDER};
use homerow::session::practice::PracticeSession;

use crate::ui::theme::Theme;

pub struct StatsHeader<'a> {
    session: &'a PracticeSession,
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatsHeader<'a> {
    pub fn new(session: &'a PracticeSession, status: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            session,
            status,
            theme,
        }
    }
}

/// Unlocked keys in code point order, with space spelled out.
pub fn unlocked_label(keys: impl IntoIterator<Item = char>) -> String {
    keys.into_iter()
        .map(|k| {
            if k == ' ' {
                "[space]".to_string()
            } else {
                k.to_string()
            }
        })
        .collect()
}

impl Widget for StatsHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let drill = self.session.drill();
        let profile = self.session.profile();

        let stats = format!(
            "WPM: {:3.0} | Accuracy: {:3.0}% | Keys: {} | Errors: {}",
            drill.wpm(),
            drill.accuracy(),
            self.session.keys_typed,
            self.session.errors,
        );
        let unlocked = format!(
            " Unlocked keys ({}/{}): {}",
            profile.unlocked_count(),
            CURRICULUM_ORDER.len(),
            unlocked_label(profile.unlocked_keys().iter().copied()),
        );
        let progress = format!(" {:.0}% of curriculum", letter_unlock::progress(profile) * 100.0);

        let mut lines = vec![
            Line::from(Span::styled(
                "homerow \u{00b7} adaptive typing practice",
                Style::default()
                    .fg(colors.header_fg())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(stats, Style::default().fg(colors.fg())))
                .alignment(Alignment::Center),
            Line::from(vec![
                Span::styled(unlocked, Style::default().fg(colors.dim())),
                Span::styled(progress, Style::default().fg(colors.accent())),
            ]),
        ];

        if let Some(status) = self.status {
            let color = if status.starts_with("Could not") {
                colors.error()
            } else {
                colors.success()
            };
            lines.push(Line::from(Span::styled(
                format!(" {status}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
