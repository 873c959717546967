mod board;
mod events;
mod rng;
mod settings;
mod state;
mod types;

pub use board::Board;
pub use events::GameEvent;
pub use rng::GameRng;
pub use settings::{BOARD_HEIGHT, BOARD_WIDTH, FOOD_REWARD, STEP_SIZE, initial_board};
pub use state::{GameState, UNKNOWN_HIGH_SCORE};
pub use types::{Coordinate, DeathReason, Difficulty, Direction, KeyCode};
