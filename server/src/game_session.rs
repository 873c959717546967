use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;

use common::game::{GameEvent, GameRng, GameState};
use common::{SessionId, log, warn};

use crate::identity::PlayerIdentity;
use crate::protocol::{self, ServerMessage};
use crate::score_store::ScoreStore;

pub const EVENT_CHANNEL_CAPACITY: usize = 128;

/// Owner of the one live tick timer of a session.
///
/// `restart` aborts whatever was running before spawning the replacement,
/// so a difficulty change can never leave a stale-interval timer behind,
/// and dropping the scheduler (session teardown) stops ticking entirely.
pub struct TickScheduler {
    handle: Option<JoinHandle<()>>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn restart(&mut self, tick_interval: Duration, events: mpsc::Sender<GameEvent>) {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            let mut timer = interval(tick_interval);
            // a tokio interval yields immediately on its first tick
            timer.tick().await;
            loop {
                timer.tick().await;
                if events.send(GameEvent::Move).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Serial event loop of one game.
///
/// Ticks and client messages funnel through a single channel and are
/// applied one at a time, each transition fully replacing the state value
/// before the next event is looked at. A state snapshot goes out after
/// every transition; the game-over transition additionally notifies the
/// client and hands the score to the store.
pub async fn run_session(
    session_id: SessionId,
    identity: PlayerIdentity,
    mut state: GameState,
    mut rng: GameRng,
    events_tx: mpsc::Sender<GameEvent>,
    mut events_rx: mpsc::Receiver<GameEvent>,
    outbound: mpsc::Sender<ServerMessage>,
    score_store: Arc<dyn ScoreStore>,
) {
    let mut scheduler = TickScheduler::new();
    scheduler.restart(state.difficulty.tick_interval(), events_tx.clone());

    let mut tick: u64 = 0;
    if outbound
        .send(protocol::build_state_message(&state, tick))
        .await
        .is_err()
    {
        return;
    }

    while let Some(event) = events_rx.recv().await {
        let was_over = state.is_game_over();
        let previous_difficulty = state.difficulty;
        let previous_score = state.score;

        if event == GameEvent::Move {
            tick += 1;
        }
        state = state.apply(event, &mut rng);

        if state.difficulty != previous_difficulty {
            log!(
                "[session:{}] difficulty changed to {:?}",
                session_id,
                state.difficulty
            );
            scheduler.restart(state.difficulty.tick_interval(), events_tx.clone());
        }

        if state.score > previous_score {
            let head = state.board.head();
            log!(
                "[session:{}] ate food at ({}, {}). score: {}",
                session_id,
                head.x,
                head.y,
                state.score
            );
        }

        if !was_over && state.is_game_over() {
            handle_game_over(&session_id, &identity, &state, &outbound, &score_store).await;
        }

        if outbound
            .send(protocol::build_state_message(&state, tick))
            .await
            .is_err()
        {
            break;
        }
    }
}

async fn handle_game_over(
    session_id: &SessionId,
    identity: &PlayerIdentity,
    state: &GameState,
    outbound: &mpsc::Sender<ServerMessage>,
    score_store: &Arc<dyn ScoreStore>,
) {
    let Some(reason) = state.death_reason else {
        return;
    };

    log!(
        "[session:{}] game over ({:?}) with score {}",
        session_id,
        reason,
        state.score
    );

    let _ = outbound
        .send(ServerMessage::GameOver {
            score: state.score,
            highest_score: state.highest_score,
            reason,
        })
        .await;

    let Some(user_id) = identity.user_id() else {
        return;
    };

    // the write runs detached: a slow or failing store must not stall
    // event processing
    let store = Arc::clone(score_store);
    let user_id = user_id.clone();
    let session_id = session_id.clone();
    let score = state.score;
    tokio::spawn(async move {
        if let Err(e) = store.record_score(&user_id, score) {
            warn!(
                "[session:{}] failed to record score for {}: {}",
                session_id, user_id, e
            );
        }
    });
}
