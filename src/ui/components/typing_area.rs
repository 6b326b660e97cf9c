use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use homerow::session::drill::DrillState;
use homerow::session::input::CharStatus;

use crate::ui::theme::Theme;

/// Shown in place of a space the learner typed wrong, so the error stays visible.
const MISSED_SPACE: char = '\u{00b7}';

pub struct TypingArea<'a> {
    drill: &'a DrillState,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(drill: &'a DrillState, theme: &'a Theme) -> Self {
        Self { drill, theme }
    }
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let spans: Vec<Span> = self
            .drill
            .target
            .iter()
            .enumerate()
            .map(|(idx, &ch)| {
                let style = if idx < self.drill.cursor {
                    match &self.drill.input[idx] {
                        CharStatus::Correct => Style::default().fg(colors.text_correct()),
                        CharStatus::Incorrect(_) => Style::default()
                            .fg(colors.text_incorrect())
                            .bg(colors.text_incorrect_bg())
                            .add_modifier(Modifier::UNDERLINED),
                    }
                } else if idx == self.drill.cursor {
                    Style::default()
                        .fg(colors.text_cursor_fg())
                        .bg(colors.text_cursor_bg())
                } else {
                    Style::default()
                        .fg(colors.text_pending())
                        .add_modifier(Modifier::DIM)
                };

                let display = match self.drill.input.get(idx) {
                    Some(CharStatus::Incorrect(_)) if ch == ' ' => MISSED_SPACE,
                    _ => ch,
                };
                Span::styled(display.to_string(), style)
            })
            .collect();

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use homerow::session::input;

    use super::*;

    fn render(drill: &DrillState) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TypingArea::new(drill, &theme).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_renders_target_inside_border() {
        let drill = DrillState::new("as df");
        let buf = render(&drill);
        let row: String = (1..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "as df");
    }

    #[test]
    fn test_styles_follow_progress() {
        let theme = Theme::default();
        let colors = &theme.colors;
        let t0 = Instant::now();
        let mut drill = DrillState::shown_at("asd", t0);
        input::process_char(&mut drill, 'a', t0);
        input::process_char(&mut drill, 'x', t0);

        let buf = render(&drill);
        assert_eq!(buf[(1, 1)].fg, colors.text_correct());
        assert_eq!(buf[(2, 1)].fg, colors.text_incorrect());
        assert_eq!(buf[(3, 1)].bg, colors.text_cursor_bg());
    }

    #[test]
    fn test_missed_space_is_marked() {
        let t0 = Instant::now();
        let mut drill = DrillState::shown_at("a s", t0);
        input::process_char(&mut drill, 'a', t0);
        input::process_char(&mut drill, 'k', t0);
        let buf = render(&drill);
        assert_eq!(buf[(2, 1)].symbol(), MISSED_SPACE.to_string());
    }
}
