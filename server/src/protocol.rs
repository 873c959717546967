use serde::{Deserialize, Serialize};

use common::game::{Coordinate, DeathReason, Difficulty, Direction, GameEvent, GameState};

/// Messages the browser shell may send. Anything with an unknown tag is a
/// decode error, not a silent no-op: a mismatched client deserves a loud
/// answer.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    KeyPress { code: String },
    TogglePause,
    ToggleSound,
    Restart,
    SetDifficulty { difficulty: Difficulty },
}

impl ClientMessage {
    pub fn into_event(self) -> GameEvent {
        match self {
            ClientMessage::KeyPress { code } => GameEvent::KeyPress(code),
            ClientMessage::TogglePause => GameEvent::TogglePause,
            ClientMessage::ToggleSound => GameEvent::ToggleSound,
            ClientMessage::Restart => GameEvent::Restart,
            ClientMessage::SetDifficulty { difficulty } => GameEvent::UpdateDifficulty(difficulty),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    State(StateSnapshot),
    GameOver {
        score: u32,
        highest_score: i32,
        reason: DeathReason,
    },
    HighScore {
        score: u32,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub board: Vec<Coordinate>,
    pub food: Coordinate,
    pub direction: Direction,
    pub score: u32,
    pub highest_score: i32,
    pub paused: bool,
    pub game_over: bool,
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
}

pub fn build_state_message(state: &GameState, tick: u64) -> ServerMessage {
    ServerMessage::State(StateSnapshot {
        tick,
        board: state.board.segments().collect(),
        food: state.food,
        direction: state.direction,
        score: state.score,
        highest_score: state.highest_score,
        paused: state.paused,
        game_over: state.is_game_over(),
        difficulty: state.difficulty,
        sound_enabled: state.sound_enabled,
    })
}

pub fn decode_client_message(text: &str) -> Result<ClientMessage, String> {
    serde_json::from_str(text).map_err(|e| format!("invalid client message: {}", e))
}

pub fn encode_server_message(message: &ServerMessage) -> Result<String, String> {
    serde_json::to_string(message).map_err(|e| format!("failed to encode server message: {}", e))
}
