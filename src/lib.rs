//! Torus Snake - a snake that runs itself on a wrap-around grid
//!
//! This library provides:
//! - Core game logic: movement, wrap-around, food placement, self-collision (game module)
//! - Plain-text board rendering (render module)
//! - The self-running game loop (modes module)

pub mod game;
pub mod modes;
pub mod render;
