use std::time::Duration;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::{
    FRUITS_PER_LEVEL, GridSize, INITIAL_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, POINTS_PER_FRUIT,
    TICK_INTERVAL_STEP_MS,
};
use crate::fruit::spawn_position;
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Body, Position};

/// Errors raised by the game engine.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GameError {
    #[error("grid must have non-zero dimensions, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    SelfCollision,
    Quit,
}

/// Outcome of one [`GameState::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickResult {
    Continue,
    GameOver,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    head: Position,
    direction: Option<Direction>,
    body: Body,
    fruit: Position,
    score: u32,
    level: u32,
    fruits_eaten: u32,
    tick_interval_ms: u64,
    status: GameStatus,
    end_reason: Option<EndReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from OS entropy.
    pub fn new(bounds: GridSize) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Result<Self, GameError> {
        if !bounds.is_valid() {
            return Err(GameError::InvalidGrid {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let fruit = spawn_position(&mut rng, bounds);

        Ok(Self {
            head,
            direction: None,
            body: Body::new(bounds),
            fruit,
            score: 0,
            level: 1,
            fruits_eaten: 0,
            tick_interval_ms: INITIAL_TICK_INTERVAL_MS,
            status: GameStatus::Running,
            end_reason: None,
            bounds,
            rng,
        })
    }

    /// Requests a new heading; direct reversals are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }

        if direction_change_is_valid(self.direction, direction) {
            self.direction = Some(direction);
        }
    }

    /// Ends the session immediately, bypassing collision logic.
    pub fn quit(&mut self) {
        if self.status == GameStatus::Running {
            self.finish(EndReason::Quit);
        }
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Quit => self.quit(),
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn advance(&mut self) -> TickResult {
        if self.status == GameStatus::GameOver {
            return TickResult::GameOver;
        }

        let previous_head = self.head;
        let next_head = match self.direction {
            Some(direction) => previous_head.stepped(direction).wrapped(self.bounds),
            None => previous_head,
        };

        // Collision is judged against where the body was before this tick.
        let collided = self.body.occupies(next_head);

        let vacated = self.body.shift(previous_head);
        self.head = next_head;

        if collided {
            self.finish(EndReason::SelfCollision);
            return TickResult::GameOver;
        }

        if self.head == self.fruit {
            self.eat_fruit(vacated);
        }

        TickResult::Continue
    }

    fn eat_fruit(&mut self, vacated: Position) {
        self.score += POINTS_PER_FRUIT;
        self.fruits_eaten += 1;

        if let Err(full) = self.body.grow(vacated) {
            warn!("body already at capacity {}, not growing", full.capacity);
        }

        self.fruit = spawn_position(&mut self.rng, self.bounds);

        if self.fruits_eaten % FRUITS_PER_LEVEL == 0 {
            self.level += 1;
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(TICK_INTERVAL_STEP_MS)
                .max(MIN_TICK_INTERVAL_MS);
            debug!(
                "level {} reached, tick interval now {}ms",
                self.level, self.tick_interval_ms
            );
        }
    }

    fn finish(&mut self, reason: EndReason) {
        self.status = GameStatus::GameOver;
        self.end_reason = Some(reason);
        debug!(
            "game over ({reason:?}) with score {} at level {}",
            self.score, self.level
        );
    }

    /// Replaces the snake layout; used to set up scenarios.
    ///
    /// # Panics
    ///
    /// Panics if the head or any segment lies outside the grid.
    pub fn reposition(&mut self, head: Position, body: Vec<Position>) {
        assert!(head.is_within_bounds(self.bounds), "head out of bounds");
        assert!(
            body.iter().all(|segment| segment.is_within_bounds(self.bounds)),
            "body segment out of bounds"
        );

        self.head = head;
        self.body = Body::from_segments(body, self.bounds);
    }

    /// Moves the fruit to `position`; used to set up scenarios.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the grid.
    pub fn place_fruit(&mut self, position: Position) {
        assert!(position.is_within_bounds(self.bounds), "fruit out of bounds");
        self.fruit = position;
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn fruit(&self) -> Position {
        self.fruit
    }

    /// Body segments from nearest the head to the tail tip.
    #[must_use]
    pub fn body(&self) -> &[Position] {
        self.body.segments()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn fruits_eaten(&self) -> u32 {
        self.fruits_eaten
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}
