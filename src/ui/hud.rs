use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

const CONTROLS_HINT: &str = "←↑↓→ / hjkl / wasd move · Enter restart · q quit";
const SHORT_CONTROLS_HINT: &str = "arrows move · q quit";

/// Values shown in the header and footer rows.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub score: u32,
    pub score_win: u32,
    pub length: usize,
}

/// Renders the score header and controls footer, returning the play area
/// between them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: HudInfo, palette: &Palette) -> Rect {
    let [score_area, play_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(info, palette)).alignment(Alignment::Center),
        score_area,
    );

    if let Some(hint) = controls_hint(usize::from(footer_area.width)) {
        frame.render_widget(
            Paragraph::new(Line::from(hint))
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted)),
            footer_area,
        );
    }

    play_area
}

fn score_line(info: HudInfo, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("Score: {}", info.score),
            Style::default()
                .fg(palette.score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  / {}  ·  length {}", info.score_win, info.length),
            Style::default().fg(palette.muted),
        ),
    ])
}

/// Picks the longest hint that fits in `width` display columns.
fn controls_hint(width: usize) -> Option<&'static str> {
    [CONTROLS_HINT, SHORT_CONTROLS_HINT]
        .into_iter()
        .find(|hint| hint.width() <= width)
}
