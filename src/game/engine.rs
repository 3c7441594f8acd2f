use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, warn};

use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{GameState, Position, Snake},
};

/// Rejection-sampling attempts before falling back to an explicit free list.
pub const MAX_FOOD_ATTEMPTS: usize = 64;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Whether the new head landed on the body
    pub self_collision: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// Seed derived from the wall clock, used when no explicit seed is given.
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine whose food placement is driven by `seed`.
    /// Fails if `config` does not describe a playable board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let (width, height) = (self.config.grid_width, self.config.grid_height);
        let center = Position::new((width / 2) as i32, (height / 2) as i32);

        let snake = Snake::new(
            center,
            Direction::Right,
            self.config.initial_snake_length,
            width,
            height,
        );
        let food = self.spawn_food(&snake, width, height);

        GameState::new(snake, food, width, height)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_food: false,
                    self_collision: false,
                },
            };
        }

        if let Action::Move(new_direction) = action {
            if !state.snake.direction.is_opposite(new_direction) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction)
            .wrapped(state.grid_width, state.grid_height);
        debug_assert!(state.is_in_bounds(new_head));

        let ate_food = state.food == Some(new_head);
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.spawn_food(&state.snake, state.grid_width, state.grid_height);
            debug!(score = state.score, food = ?state.food, "food eaten");
        }

        // Checked against the post-move body: a vacated tail cell is free.
        let self_collision = state.snake.collides_with_body(new_head);
        if self_collision {
            state.is_alive = false;
        }

        state.steps += 1;

        StepResult {
            terminated: self_collision,
            info: StepInfo {
                ate_food,
                self_collision,
            },
        }
    }

    /// Pick a uniformly random cell not covered by `snake`.
    ///
    /// Rejection sampling is tried first; once that keeps hitting the body,
    /// the free cells are enumerated and one is chosen directly. Returns `None`
    /// only when the snake covers the whole board.
    pub fn spawn_food(&mut self, snake: &Snake, width: usize, height: usize) -> Option<Position> {
        for _ in 0..MAX_FOOD_ATTEMPTS {
            let x = self.rng.gen_range(0..width) as i32;
            let y = self.rng.gen_range(0..height) as i32;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return Some(pos);
            }
        }

        let free: Vec<Position> = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        let food = free.choose(&mut self.rng).copied();
        if food.is_none() {
            warn!(length = snake.len(), "no free cell left for food");
        }
        food
    }
}
