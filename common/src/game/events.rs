use super::types::Difficulty;

/// Everything that can happen to a running game.
///
/// The enum is closed and the reducer matches it exhaustively, so an
/// unhandled event kind cannot exist past the wire boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// Scheduled tick: advance the snake one step.
    Move,
    /// Logical key code forwarded by the presentation shell.
    KeyPress(String),
    /// Overwrite the highest score once the store lookup resolves.
    SetHighScore(i32),
    Restart,
    TogglePause,
    ToggleSound,
    UpdateDifficulty(Difficulty),
}
