use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::EndReason;

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    end_reason: Option<EndReason>,
) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(game_over_lines(score, end_reason))
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn game_over_lines(score: u32, end_reason: Option<EndReason>) -> Vec<Line<'static>> {
    vec![
        Line::from("Game Over!").style(Style::new().add_modifier(Modifier::BOLD)),
        Line::from(format!("Score: {score}")),
        Line::from(match end_reason {
            Some(EndReason::SelfCollision) => "You ran into yourself",
            Some(EndReason::Quit) => "You quit",
            None => "",
        }),
        Line::from(""),
        Line::from("Press any key to exit"),
    ]
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

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::game::EndReason;

    use super::{centered_popup, game_over_lines};

    #[test]
    fn game_over_text_names_score_and_cause() {
        let lines: Vec<String> = game_over_lines(40, Some(EndReason::SelfCollision))
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(lines[0], "Game Over!");
        assert_eq!(lines[1], "Score: 40");
        assert_eq!(lines[2], "You ran into yourself");
        assert_eq!(lines[4], "Press any key to exit");
    }

    #[test]
    fn popup_stays_inside_area() {
        let area = Rect::new(0, 0, 42, 22);
        let popup = centered_popup(area, 70, 60);

        assert_eq!(area.intersection(popup), popup);
        assert!(popup.width < area.width);
        assert!(popup.height < area.height);
    }
}
