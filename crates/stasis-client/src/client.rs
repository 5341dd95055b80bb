//! WebSocket session: the single connection and its event loop.
//!
//! One task owns the write half of the socket and drains an unbounded
//! channel of outgoing requests; the main loop multiplexes incoming
//! server events with stdin commands via `select!`. Each branch runs to
//! completion before the next is processed, so the session needs no
//! locking. Requests are fire-and-forget: nothing awaits a matched
//! response, the loop just reacts to whatever event arrives next.

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use stasis_core::{BoardGrid, ClientRequest, GameSession, ServerEvent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{error, info, warn};

use crate::view::{self, Command};

/// Connect to the server and run the interactive session until the
/// connection closes or the user quits.
pub async fn run_client(url: &str) -> anyhow::Result<()> {
    let (ws_stream, _) = connect_async(url)
        .await
        .with_context(|| format!("connecting to {url}"))?;
    info!("Connected to {}", url);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // Writer task owns the sink; dropping the sender ends it, so no
    // handler survives this function (teardown detaches everything).
    let (tx, mut rx) = mpsc::unbounded_channel::<ClientRequest>();
    let send_task = tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            match request.encode() {
                Ok(text) => {
                    if ws_sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("Failed to encode request: {}", e),
            }
        }
        let _ = ws_sender.close().await;
    });

    let mut session = GameSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    view::render_help();

    loop {
        tokio::select! {
            msg = ws_receiver.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match ServerEvent::decode(&text) {
                            Ok(event) => {
                                session.apply(event);
                                flag_collisions(&session);
                                view::render(&session);
                            }
                            Err(e) => warn!("Undecodable server message: {} ({})", text, e),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("Server closed the connection");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                if !handle_line(&line, &mut session, &tx) {
                    break;
                }
            }
        }
    }

    drop(tx);
    let _ = send_task.await;
    Ok(())
}

/// Dispatch one input line. Returns false when the user quits.
fn handle_line(
    line: &str,
    session: &mut GameSession,
    tx: &mpsc::UnboundedSender<ClientRequest>,
) -> bool {
    match view::parse_command(line) {
        Some(Command::Square(sq)) => {
            if let Some(request) = session.click_square(sq) {
                let _ = tx.send(request);
            }
            view::render(session);
        }
        Some(Command::Hand(color, index)) => {
            // Resolve the hand index against the current projection
            let piece_id = session
                .state()
                .and_then(|s| s.hand(color).get(index).map(|p| p.id.clone()));
            match piece_id {
                Some(id) => {
                    session.click_hand(&id);
                    view::render(session);
                }
                None => println!("No piece at {} hand slot {}", color.name(), index),
            }
        }
        Some(Command::EndTurn) => {
            if let Some(request) = session.end_turn() {
                let _ = tx.send(request);
            }
            view::render(session);
        }
        Some(Command::Help) => view::render_help(),
        Some(Command::Quit) => return false,
        None => println!("Unrecognized command: {line} (try 'help')"),
    }
    true
}

/// Surface projection collisions — two pieces on one square means the
/// server pushed an inconsistent snapshot.
fn flag_collisions(session: &GameSession) {
    if let Some(state) = session.state() {
        for sq in BoardGrid::project(&state.pieces).collisions() {
            warn!("Snapshot places multiple pieces on {}", sq);
        }
    }
}
