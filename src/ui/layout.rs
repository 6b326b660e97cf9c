use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥90 cols: typing area with the difficulty panel beside it
    Narrow, // <90 cols: difficulty panel below the typing area
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 90 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }
}

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub difficulty: Rect,
    pub footer: Rect,
    pub tier: LayoutTier,
}

/// Rows needed by the difficulty panel: up to eight keys plus borders.
const DIFFICULTY_PANEL_HEIGHT: u16 = 10;

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(area);

        let (main, difficulty) = match tier {
            LayoutTier::Wide => {
                let horizontal = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(vertical[1]);
                (horizontal[0], horizontal[1])
            }
            LayoutTier::Narrow => {
                let stacked = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(3),
                        Constraint::Length(DIFFICULTY_PANEL_HEIGHT),
                    ])
                    .split(vertical[1]);
                (stacked[0], stacked[1])
            }
        };

        Self {
            header: vertical[0],
            main,
            difficulty,
            footer: vertical[2],
            tier,
        }
    }
}

/// Join key hints into as few lines as fit in `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if current.is_empty() {
            format!(" {hint}")
        } else {
            format!("{current}{separator}{hint}")
        };
        if candidate.chars().count() <= width || current.is_empty() {
            current = candidate;
        } else {
            out.push(std::mem::replace(&mut current, format!(" {hint}")));
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}
