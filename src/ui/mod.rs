pub mod components;
pub mod layout;
pub mod theme;

use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;
use components::key_difficulty::KeyDifficulty;
use components::stats_header::StatsHeader;
use components::typing_area::TypingArea;
use layout::{AppLayout, LayoutTier, pack_hint_lines};

const HINTS: &[&str] = &["[type] practice", "[Backspace] new text", "[Esc] quit"];

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg())),
        area,
    );

    let layout = AppLayout::new(area);

    frame.render_widget(
        StatsHeader::new(&app.session, app.status.as_deref(), &app.theme),
        layout.header,
    );
    frame.render_widget(TypingArea::new(app.session.drill(), &app.theme), layout.main);
    frame.render_widget(
        KeyDifficulty::new(app.session.profile(), &app.theme),
        layout.difficulty,
    );

    // Narrow terminals only have room for the first line of hints.
    let hint_lines = pack_hint_lines(HINTS, layout.footer.width as usize);
    let footer: Vec<Line> = match layout.tier {
        LayoutTier::Wide => hint_lines.into_iter().map(Line::from).collect(),
        LayoutTier::Narrow => hint_lines.into_iter().take(1).map(Line::from).collect(),
    };
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(colors.dim())),
        layout.footer,
    );
}
