use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::config::{GLYPH_FRUIT, GLYPH_SNAKE_HEAD, GLYPH_SNAKE_TAIL, GLYPH_WALL, GridSize};
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let field = play_field_area(area, state.bounds());

    draw_field(frame.buffer_mut(), field, state);

    let hud_area = Rect {
        x: area.x,
        y: field.bottom().saturating_add(1),
        width: area.width,
        height: HUD_HEIGHT,
    }
    .intersection(area);
    render_hud(frame, hud_area, state);

    if state.is_over() {
        render_game_over_menu(frame, field, state.score(), state.end_reason());
    }
}

/// Returns the walled rectangle (grid plus one-cell border) anchored at the
/// top-left of `area`, clipped to it.
#[must_use]
pub fn play_field_area(area: Rect, bounds: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: bounds.width.saturating_add(2),
        height: bounds.height.saturating_add(2),
    }
    .intersection(area)
}

/// Draws walls, tail, fruit and head into `field`.
///
/// Later layers win: tail, then fruit, then head.
pub fn draw_field(buffer: &mut Buffer, field: Rect, state: &GameState) {
    draw_walls(buffer, field);

    let inner = Rect {
        x: field.x.saturating_add(1),
        y: field.y.saturating_add(1),
        width: field.width.saturating_sub(2),
        height: field.height.saturating_sub(2),
    };

    for segment in state.body() {
        put(buffer, inner, *segment, GLYPH_SNAKE_TAIL, Style::new());
    }

    put(buffer, inner, state.fruit(), GLYPH_FRUIT, Style::new());
    put(
        buffer,
        inner,
        state.head(),
        GLYPH_SNAKE_HEAD,
        Style::new().add_modifier(Modifier::BOLD),
    );
}

fn draw_walls(buffer: &mut Buffer, field: Rect) {
    if field.is_empty() {
        return;
    }

    let style = Style::new();
    for x in field.left()..field.right() {
        buffer.set_string(x, field.top(), GLYPH_WALL, style);
        buffer.set_string(x, field.bottom() - 1, GLYPH_WALL, style);
    }
    for y in field.top()..field.bottom() {
        buffer.set_string(field.left(), y, GLYPH_WALL, style);
        buffer.set_string(field.right() - 1, y, GLYPH_WALL, style);
    }
}

fn put(buffer: &mut Buffer, inner: Rect, position: Position, glyph: &str, style: Style) {
    let Some((x, y)) = logical_to_terminal(inner, position) else {
        return;
    };

    buffer.set_string(x, y, glyph, style);
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::game::GameState;
    use crate::snake::Position;

    use super::{draw_field, play_field_area};

    fn symbol(buffer: &Buffer, x: u16, y: u16) -> &str {
        buffer[(x, y)].symbol()
    }

    #[test]
    fn field_is_grid_plus_border() {
        let bounds = GridSize {
            width: 40,
            height: 20,
        };
        let field = play_field_area(Rect::new(0, 0, 80, 30), bounds);

        assert_eq!(field, Rect::new(0, 0, 42, 22));
    }

    #[test]
    fn field_is_clipped_to_small_terminals() {
        let bounds = GridSize {
            width: 40,
            height: 20,
        };
        let field = play_field_area(Rect::new(0, 0, 10, 5), bounds);

        assert_eq!(field, Rect::new(0, 0, 10, 5));
    }

    #[test]
    fn draws_walls_head_tail_and_fruit() {
        let bounds = GridSize {
            width: 6,
            height: 4,
        };
        let mut state = GameState::new_with_seed(bounds, 3).expect("valid grid");
        state.reposition(Position::new(2, 1), vec![Position::new(1, 1)]);
        state.place_fruit(Position::new(4, 2));

        let field = play_field_area(Rect::new(0, 0, 20, 10), bounds);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 20, 10));
        draw_field(&mut buffer, field, &state);

        assert_eq!(symbol(&buffer, 0, 0), "#");
        assert_eq!(symbol(&buffer, 7, 5), "#");
        assert_eq!(symbol(&buffer, 3, 2), "O");
        assert_eq!(symbol(&buffer, 2, 2), "o");
        assert_eq!(symbol(&buffer, 5, 3), "F");
        assert_eq!(symbol(&buffer, 1, 1), " ");
    }

    #[test]
    fn head_is_drawn_over_fruit() {
        let bounds = GridSize {
            width: 6,
            height: 4,
        };
        let mut state = GameState::new_with_seed(bounds, 3).expect("valid grid");
        state.reposition(Position::new(2, 1), Vec::new());
        state.place_fruit(Position::new(2, 1));

        let field = play_field_area(Rect::new(0, 0, 8, 6), bounds);
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 6));
        draw_field(&mut buffer, field, &state);

        assert_eq!(symbol(&buffer, 3, 2), "O");
    }
}
