use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::config::Config;
use crate::game::GameResult;
use crate::session::Session;
use crate::snake::Position;
use crate::theme::Palette;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_lose_menu, render_win_menu};

/// Terminal columns used for one slot, so slots look roughly square.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_CELL: &str = "██";

/// Renders the full game frame from the session's current snapshot.
///
/// Called every frame whether or not a tick ran, so the picture only changes
/// when the snapshot does.
pub fn render(frame: &mut Frame<'_>, session: &Session, palette: &Palette) {
    let snapshot = session.snapshot();
    let config = session.config();

    let play_area = render_hud(
        frame,
        frame.area(),
        HudInfo {
            score: snapshot.game.score,
            score_win: config.score_win,
            length: snapshot.snake.len(),
        },
        palette,
    );

    let board_area = board_rect(play_area, config);
    let block = Block::bordered().border_style(Style::new().fg(palette.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame.render_widget(Block::new().style(Style::new().bg(palette.board)), inner);

    paint_slot(frame, inner, config, snapshot.food, palette.food, palette);
    for segment in snapshot.snake.segments() {
        paint_slot(frame, inner, config, *segment, palette.snake, palette);
    }

    match snapshot.game.result {
        GameResult::Win => render_win_menu(frame, play_area, snapshot.game.score, palette),
        GameResult::Lose => render_lose_menu(
            frame,
            play_area,
            snapshot.game.score,
            session.lose_cause(),
            palette,
        ),
        GameResult::InProgress => {}
    }
}

fn paint_slot(
    frame: &mut Frame<'_>,
    inner: Rect,
    config: &Config,
    position: Position,
    color: ratatui::style::Color,
    palette: &Palette,
) {
    let Some((x, y)) = slot_to_terminal(inner, config, position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(color).bg(palette.board));
}

/// Board rectangle (including its border) centered in `area`, clipped to fit.
#[must_use]
pub fn board_rect(area: Rect, config: &Config) -> Rect {
    let grid = config.grid();
    let width = grid
        .width
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = grid.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Maps a pixel position to the terminal cell of its slot inside `inner`.
/// Off-board positions and slots clipped by a small terminal yield `None`.
#[must_use]
pub fn slot_to_terminal(inner: Rect, config: &Config, position: Position) -> Option<(u16, u16)> {
    let (column, row) = position.slot(config)?;

    let x = inner.x.saturating_add(column.saturating_mul(CELL_WIDTH));
    let y = inner.y.saturating_add(row);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
