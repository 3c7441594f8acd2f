use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Bring a position that stepped one cell off the board back onto the
    /// opposite edge.
    pub fn wrapped(&self, width: usize, height: usize) -> Self {
        let (w, h) = (width as i32, height as i32);
        let mut pos = *self;

        if pos.x < 0 {
            pos.x = w - 1;
        } else if pos.x >= w {
            pos.x = 0;
        }
        if pos.y < 0 {
            pos.y = h - 1;
        } else if pos.y >= h {
            pos.y = 0;
        }

        pos
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of `length` segments trailing behind `head`, wrapped onto
    /// a `width` x `height` board.
    pub fn new(
        head: Position,
        direction: Direction,
        length: usize,
        width: usize,
        height: usize,
    ) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = Vec::with_capacity(length.max(1));
        body.push(head);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-dx, -dy).wrapped(width, height));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first.
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`, dropping the tail unless the snake grows.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only when the snake leaves no free cell.
    pub food: Option<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Food eaten so far
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(
            pos.moved_in_direction(Direction::Left),
            Position::new(4, 5)
        );
    }

    #[test]
    fn test_wrap_around_edges() {
        assert_eq!(Position::new(20, 10).wrapped(20, 20), Position::new(0, 10));
        assert_eq!(Position::new(-1, 10).wrapped(20, 20), Position::new(19, 10));
        assert_eq!(Position::new(3, 20).wrapped(20, 20), Position::new(3, 0));
        assert_eq!(Position::new(3, -1).wrapped(20, 20), Position::new(3, 19));
        assert_eq!(Position::new(7, 7).wrapped(20, 20), Position::new(7, 7));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_creation_wraps_tail() {
        let snake = Snake::new(Position::new(1, 5), Direction::Right, 3, 10, 10);
        assert_eq!(
            snake.body,
            vec![Position::new(1, 5), Position::new(0, 5), Position::new(9, 5)]
        );
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 2, 20, 20);

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.body, vec![Position::new(6, 5), Position::new(5, 5)]);

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(7, 5));
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20, 20);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5)));
        assert!(!snake.collides_with_body(Position::new(10, 10)));
        assert!(snake.occupies(Position::new(5, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1, 20, 20),
            Some(Position::new(10, 10)),
            20,
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(state.is_in_bounds(Position::new(20, -1).wrapped(20, 20)));
        assert!(state.is_occupied_by_snake(Position::new(5, 5)));
    }
}
