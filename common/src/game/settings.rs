use std::time::Duration;

use super::board::Board;
use super::types::{Coordinate, Difficulty};

pub const BOARD_WIDTH: i32 = 600;
pub const BOARD_HEIGHT: i32 = 400;
pub const STEP_SIZE: i32 = 10;
pub const FOOD_REWARD: u32 = 10;

/// Three segments heading right along the upper half of the board.
pub fn initial_board() -> Board {
    Board::from_segments([
        Coordinate::new(90, 50),
        Coordinate::new(80, 50),
        Coordinate::new(70, 50),
    ])
}

impl Difficulty {
    pub fn tick_interval(&self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(60),
        }
    }
}
