use super::board::Board;
use super::events::GameEvent;
use super::rng::GameRng;
use super::settings::{BOARD_HEIGHT, BOARD_WIDTH, FOOD_REWARD, STEP_SIZE, initial_board};
use super::types::{Coordinate, DeathReason, Difficulty, Direction, KeyCode};

pub const UNKNOWN_HIGH_SCORE: i32 = -1;

/// Full state of one game.
///
/// Transitions consume the current value and return its successor; the
/// caller owns exactly one `GameState` at a time and replaces it wholesale
/// on every event. Game over is carried by `death_reason`, and a dead game
/// is always paused: nothing but `Restart` resumes from there.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub food: Coordinate,
    pub direction: Direction,
    pub score: u32,
    pub highest_score: i32,
    pub paused: bool,
    pub death_reason: Option<DeathReason>,
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
}

impl GameState {
    pub fn new(rng: &mut GameRng) -> Self {
        let board = initial_board();
        let food = rng.food_coordinate(&board);
        Self {
            board,
            food,
            direction: Direction::Right,
            score: 0,
            highest_score: UNKNOWN_HIGH_SCORE,
            paused: false,
            death_reason: None,
            difficulty: Difficulty::Medium,
            sound_enabled: true,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.death_reason.is_some()
    }

    pub fn apply(self, event: GameEvent, rng: &mut GameRng) -> GameState {
        match event {
            GameEvent::Move => self.advance(rng),
            GameEvent::KeyPress(code) => self.handle_key(&code),
            GameEvent::SetHighScore(score) => GameState {
                highest_score: score,
                ..self
            },
            GameEvent::Restart => self.restarted(rng),
            GameEvent::TogglePause => self.toggle_pause(),
            GameEvent::ToggleSound => GameState {
                sound_enabled: !self.sound_enabled,
                ..self
            },
            GameEvent::UpdateDifficulty(difficulty) => GameState { difficulty, ..self },
        }
    }

    fn advance(self, rng: &mut GameRng) -> GameState {
        if self.paused {
            return self;
        }

        let candidate = self.board.next_head(self.direction);

        if !in_bounds(candidate) {
            return self.died(DeathReason::WallCollision);
        }
        if self.board.hits_body(candidate) {
            return self.died(DeathReason::SelfCollision);
        }

        if candidate == self.food {
            let board = self.board.grown(candidate);
            let food = rng.food_coordinate(&board);
            return GameState {
                board,
                food,
                score: self.score + FOOD_REWARD,
                ..self
            };
        }

        let board = self.board.advanced(self.direction);
        GameState { board, ..self }
    }

    /// Board, food and score stay as of the moment of death so the final
    /// position remains on display.
    fn died(self, reason: DeathReason) -> GameState {
        GameState {
            paused: true,
            death_reason: Some(reason),
            highest_score: self.highest_score.max(self.score as i32),
            ..self
        }
    }

    fn handle_key(self, code: &str) -> GameState {
        let Some(key) = KeyCode::parse(code) else {
            return self;
        };

        if key == KeyCode::Space {
            return self.toggle_pause();
        }
        if self.paused {
            return self;
        }
        let Some(turn) = key.direction() else {
            return self;
        };
        if turn.is_opposite(&self.direction) {
            return self;
        }

        // A successful turn advances the board right away, so a second
        // key press inside the same tick window cannot reverse the snake
        // into its own neck before the next collision check.
        let board = self.board.advanced(turn);
        GameState {
            direction: turn,
            board,
            ..self
        }
    }

    fn toggle_pause(self) -> GameState {
        if self.is_game_over() {
            return self;
        }
        GameState {
            paused: !self.paused,
            ..self
        }
    }

    /// Gameplay fields go back to the canonical start; difficulty, sound
    /// and the loaded highest score carry over.
    fn restarted(self, rng: &mut GameRng) -> GameState {
        let board = initial_board();
        let food = rng.food_coordinate(&board);
        GameState {
            board,
            food,
            direction: Direction::Right,
            score: 0,
            paused: false,
            death_reason: None,
            ..self
        }
    }
}

fn in_bounds(coordinate: Coordinate) -> bool {
    (0..=BOARD_WIDTH - STEP_SIZE).contains(&coordinate.x)
        && (0..=BOARD_HEIGHT - STEP_SIZE).contains(&coordinate.y)
}
