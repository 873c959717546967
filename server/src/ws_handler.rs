use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use common::game::{GameEvent, GameRng, GameState};
use common::id_generator::generate_session_id;
use common::{log, warn};

use crate::game_session::{self, EVENT_CHANNEL_CAPACITY};
use crate::identity::PlayerIdentity;
use crate::protocol::{self, ServerMessage};
use crate::web_server::WebServerState;

pub async fn handle_websocket(socket: WebSocket, state: WebServerState, identity: PlayerIdentity) {
    let session_id = generate_session_id();
    log!("[session:{}] connected as {}", session_id, identity.label());

    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::channel::<ServerMessage>(EVENT_CHANNEL_CAPACITY);

    let send_task = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            match protocol::encode_server_message(&message) {
                Ok(text) => {
                    if ws_sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => warn!("failed to encode server message: {}", e),
            }
        }
    });

    let (events_tx, events_rx) = mpsc::channel::<GameEvent>(EVENT_CHANNEL_CAPACITY);

    let mut rng = GameRng::from_random();
    let game_state = GameState::new(&mut rng);

    // resolve the stored best before the first tick; anonymous players
    // play without persistence
    if let Some(user_id) = identity.user_id() {
        match state.score_store.fetch_high_score(user_id) {
            Ok(score) => {
                let _ = outbound_tx.send(ServerMessage::HighScore { score }).await;
                let _ = events_tx.send(GameEvent::SetHighScore(score as i32)).await;
            }
            Err(e) => warn!(
                "[session:{}] failed to fetch high score for {}: {}",
                session_id, user_id, e
            ),
        }
    }

    let session_task = tokio::spawn(game_session::run_session(
        session_id.clone(),
        identity,
        game_state,
        rng,
        events_tx.clone(),
        events_rx,
        outbound_tx.clone(),
        state.score_store.clone(),
    ));

    while let Some(result) = ws_receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                log!("[session:{}] socket error: {}", session_id, e);
                break;
            }
        };
        let text = match message {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        match protocol::decode_client_message(text.as_str()) {
            Ok(client_message) => {
                if events_tx.send(client_message.into_event()).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                // an unknown message kind is a client/server mismatch, not
                // player input; answer loudly and end the session
                warn!("[session:{}] {}", session_id, e);
                let _ = outbound_tx.send(ServerMessage::Error { message: e }).await;
                break;
            }
        }
    }

    session_task.abort();
    send_task.abort();
    log!("[session:{}] disconnected", session_id);
}
