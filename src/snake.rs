use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring cell one step in `direction`, unwrapped.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Returned when the body cannot take another segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BodyFull {
    pub capacity: usize,
}

/// Trailing segments behind the head, nearest-to-head first.
///
/// The head itself is not stored here. Capacity is one segment per grid cell;
/// the body may briefly share the head's cell on the tick it becomes full, and
/// the following tick then ends in a collision.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Body {
    segments: Vec<Position>,
    capacity: usize,
}

impl Body {
    /// Creates an empty body sized for `bounds`.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        let capacity = bounds.total_cells();
        Self {
            segments: Vec::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Creates a body from explicit segments (front is nearest the head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` exceeds the grid-derived capacity.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, bounds: GridSize) -> Self {
        let mut body = Self::new(bounds);
        assert!(
            segments.len() <= body.capacity,
            "Body::from_segments: {} segments exceed capacity {}",
            segments.len(),
            body.capacity,
        );
        body.segments = segments;
        body
    }

    /// Moves every segment into the slot ahead of it.
    ///
    /// Segment 0 takes `previous_head`; segment i takes segment i-1's old
    /// position. Returns the cell the tail tip left behind, which is
    /// `previous_head` itself for an empty body.
    pub fn shift(&mut self, previous_head: Position) -> Position {
        let mut carried = previous_head;
        for segment in &mut self.segments {
            carried = std::mem::replace(segment, carried);
        }
        carried
    }

    /// Appends one segment at the tail tip.
    pub fn grow(&mut self, at: Position) -> Result<(), BodyFull> {
        if self.segments.len() >= self.capacity {
            return Err(BodyFull {
                capacity: self.capacity,
            });
        }

        self.segments.push(at);
        Ok(())
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Segments from nearest the head to the tail tip.
    #[must_use]
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }
}
