use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use homerow::engine::difficulty::DifficultyModel;
use homerow::engine::profile::LearnerProfile;

use crate::ui::theme::Theme;

const MAX_ROWS: usize = 8;
const BAR_WIDTH: usize = 20;

/// Hardest unlocked keys with a bar, score and accuracy. Space is left out:
/// it is drilled implicitly between every word.
pub struct KeyDifficulty<'a> {
    profile: &'a LearnerProfile,
    theme: &'a Theme,
}

impl<'a> KeyDifficulty<'a> {
    pub fn new(profile: &'a LearnerProfile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }
}

/// (filled, empty) cell counts for a 0..=100 score.
fn bar_cells(score: f64) -> (usize, usize) {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64) as usize;
    (filled, BAR_WIDTH - filled)
}

pub fn ranked_rows(profile: &LearnerProfile) -> Vec<(char, f64, f64)> {
    DifficultyModel::new(profile)
        .rank_by_difficulty()
        .into_iter()
        .filter(|&(key, _)| key != ' ')
        .take(MAX_ROWS)
        .map(|(key, score)| (key, score, profile.accuracy(key)))
        .collect()
}

impl Widget for KeyDifficulty<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Key difficulty (practice needed) ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(colors.border()));

        let lines: Vec<Line> = ranked_rows(self.profile)
            .into_iter()
            .map(|(key, score, accuracy)| {
                let (filled, empty) = bar_cells(score);
                Line::from(vec![
                    Span::styled(format!(" '{key}' "), Style::default().fg(colors.accent())),
                    Span::styled(
                        "\u{2588}".repeat(filled),
                        Style::default().fg(colors.bar_filled()),
                    ),
                    Span::styled(
                        "\u{2591}".repeat(empty),
                        Style::default().fg(colors.bar_empty()),
                    ),
                    Span::styled(
                        format!(" {score:5.1}"),
                        Style::default().fg(colors.fg()),
                    ),
                    Span::styled(
                        format!("  acc {accuracy:5.1}%"),
                        Style::default().fg(colors.dim()),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
