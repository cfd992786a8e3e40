use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit offset `(dx, dy)` for one step in this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
///
/// Any direction is legal while the snake is still standing.
#[must_use]
pub fn direction_change_is_valid(current: Option<Direction>, next: Direction) -> bool {
    current.is_none_or(|current| next != current.opposite())
}

/// Maps one raw key event onto a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Left | KeyCode::Char('a') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => GameInput::Direction(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => GameInput::Direction(Direction::Down),
        KeyCode::Char('x') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Non-blocking keyboard reader for the tick loop.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the next mapped input if one is already pending.
    ///
    /// Consumes at most one key press per call; pending non-key events and
    /// unmapped keys are skipped. Never blocks.
    pub fn poll_input(&mut self) -> io::Result<Option<GameInput>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(map_key(key));
            }
        }

        Ok(None)
    }

    /// Blocks until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid, map_key};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Some(Direction::Up), Direction::Down));
        assert!(!direction_change_is_valid(Some(Direction::Right), Direction::Left));

        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Left));
        assert!(direction_change_is_valid(Some(Direction::Up), Direction::Up));
        assert!(direction_change_is_valid(None, Direction::Left));
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let cases = [
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('s'), Direction::Down),
        ];

        for (code, direction) in cases {
            assert_eq!(map_key(press(code)), Some(GameInput::Direction(direction)));
        }
    }

    #[test]
    fn x_and_ctrl_c_quit() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), Some(GameInput::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
    }

    #[test]
    fn unmapped_and_released_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), None);
        assert_eq!(map_key(press(KeyCode::Enter)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
