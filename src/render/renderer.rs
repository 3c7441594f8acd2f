use std::io::Write;

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::game::{GameState, Position};

const FOOD_CELL: char = 'F';
const SNAKE_CELL: char = 'O';
const EMPTY_CELL: char = '.';

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the terminal and redraw the whole board.
    pub fn draw<W: Write>(&self, out: &mut W, state: &GameState) -> Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear terminal")?;
        out.write_all(self.render_grid(state).as_bytes())
            .context("Failed to write frame")?;
        out.flush().context("Failed to flush frame")?;
        Ok(())
    }

    /// One character per cell, one line per row. Food wins over snake.
    pub fn render_grid(&self, state: &GameState) -> String {
        let mut grid = String::with_capacity((state.grid_width + 1) * state.grid_height);

        for y in 0..state.grid_height {
            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if state.food == Some(pos) {
                    FOOD_CELL
                } else if state.is_occupied_by_snake(pos) {
                    SNAKE_CELL
                } else {
                    EMPTY_CELL
                };

                grid.push(cell);
            }
            grid.push('\n');
        }

        grid
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
