use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::game::{Action, GameEngine, GameState};
use crate::render::Renderer;

const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Runs the snake on its own until it collides with itself.
pub struct AutoplayMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    tick_interval: Duration,
}

impl AutoplayMode {
    pub fn new(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        Self::with_state(engine, state)
    }

    /// Resume from an existing state instead of a fresh board.
    pub fn with_state(engine: GameEngine, state: GameState) -> Self {
        let tick_interval = engine.config().tick_interval();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            tick_interval,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render, step, sleep; repeat until the snake bites itself.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            self.renderer.draw(out, &self.state)?;

            let result = self.engine.step(&mut self.state, Action::Continue);

            if result.terminated {
                writeln!(out, "{GAME_OVER_MESSAGE}").context("Failed to write game over")?;
                out.flush().context("Failed to flush output")?;

                info!(
                    score = self.state.score,
                    steps = self.state.steps,
                    length = self.state.snake.len(),
                    "game over"
                );
                return Ok(());
            }

            if !self.tick_interval.is_zero() {
                thread::sleep(self.tick_interval);
            }
        }
    }
}
