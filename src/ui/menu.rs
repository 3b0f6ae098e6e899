use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::LoseCause;
use crate::theme::Palette;

/// Draws the win screen as a centered popup.
pub fn render_win_menu(frame: &mut Frame<'_>, area: Rect, score: u32, palette: &Palette) {
    render_result_popup(
        frame,
        area,
        "You Win!",
        palette.win,
        vec![Line::from(format!("Final score: {score}"))],
        palette,
    );
}

/// Draws the lose screen as a centered popup.
pub fn render_lose_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    cause: Option<LoseCause>,
    palette: &Palette,
) {
    render_result_popup(
        frame,
        area,
        "You Lose!",
        palette.lose,
        vec![
            Line::from(format!("Score: {score}")),
            Line::from(match cause {
                Some(LoseCause::WallCollision) => "Cause: hit wall",
                Some(LoseCause::SelfCollision) => "Cause: hit yourself",
                None => "",
            }),
        ],
        palette,
    );
}

fn render_result_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    accent: Color,
    mut body: Vec<Line<'static>>,
    palette: &Palette,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from(title))
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        title_row,
    );

    body.push(Line::from(""));
    body.push(Line::from("[Enter] Play again"));
    body.push(Line::from("[Q]/[Esc] Quit"));
    frame.render_widget(
        Paragraph::new(body).alignment(Alignment::Center).block(
            Block::bordered().border_style(Style::default().fg(palette.border)),
        ),
        body_row,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
