/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns true when both dimensions are non-zero.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Play field width in cells.
pub const GRID_WIDTH: u16 = 40;

/// Play field height in cells.
pub const GRID_HEIGHT: u16 = 20;

/// The fixed play field used by the binary.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// Tick interval at level 1, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 300;

/// Interval reduction applied on every level-up.
pub const TICK_INTERVAL_STEP_MS: u64 = 50;

/// Fastest tick interval the game will reach.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Score granted per fruit.
pub const POINTS_PER_FRUIT: u32 = 10;

/// Fruits needed per level increase.
pub const FRUITS_PER_LEVEL: u32 = 2;

pub const GLYPH_WALL: &str = "#";
pub const GLYPH_SNAKE_HEAD: &str = "O";
pub const GLYPH_SNAKE_TAIL: &str = "o";
pub const GLYPH_FRUIT: &str = "F";

#[cfg(test)]
mod tests {
    use super::{DEFAULT_GRID, GridSize};

    #[test]
    fn default_grid_has_expected_cell_count() {
        assert_eq!(DEFAULT_GRID.total_cells(), 800);
        assert!(DEFAULT_GRID.is_valid());
    }

    #[test]
    fn zero_dimension_grid_is_invalid() {
        assert!(!GridSize { width: 0, height: 5 }.is_valid());
        assert!(!GridSize { width: 5, height: 0 }.is_valid());
    }
}
