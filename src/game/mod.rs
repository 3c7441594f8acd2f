//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The board is a torus: the snake leaves one edge and re-enters on the opposite one,
//! so the only way a run ends is the snake running into itself.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{seed_from_clock, GameEngine, StepInfo, StepResult, MAX_FOOD_ATTEMPTS};
pub use state::{GameState, Position, Snake};
