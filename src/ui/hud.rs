use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::game::GameState;

/// Rows occupied by the score and level lines.
pub const HUD_HEIGHT: u16 = 2;

/// Renders the score and level lines into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let [score_row, level_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(Paragraph::new(score_line(state.score())), score_row);
    frame.render_widget(Paragraph::new(level_line(state.level())), level_row);
}

fn score_line(score: u32) -> Line<'static> {
    Line::from(format!("Score: {score}"))
}

fn level_line(level: u32) -> Line<'static> {
    Line::from(format!("Level: {level}"))
}
