//! Client session: the reducer over server events plus the click-gesture
//! state machine.
//!
//! `GameSession` holds everything the client knows — the latest snapshot,
//! the selection, the log, the game identifier, and the game-over marker.
//! It is pure: server events go in through [`GameSession::apply`], user
//! clicks go in through the `click_*` methods, and the only outward effect
//! is the occasional [`ClientRequest`] a click returns for the transport
//! to send.
//!
//! Requests are fire-and-forget. There is no correlation between a request
//! and the acknowledgement that eventually clears the selection, so a
//! stray accept can clear a selection it did not cause. The server's
//! in-order delivery is relied on and duplicates are not reconciled.

use crate::board::BoardGrid;
use crate::piece::{Color, Square};
use crate::protocol::{ClientRequest, ServerEvent};
use crate::selection::Selection;
use crate::state::GameState;
use std::collections::VecDeque;

/// All client-side session state for one game.
#[derive(Debug, Default)]
pub struct GameSession {
    state: Option<GameState>,
    selection: Selection,
    /// Newest entries first
    log: VecDeque<String>,
    game_id: Option<String>,
    over: bool,
    winner: Option<Color>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest snapshot, if one has arrived yet
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Event log, newest first
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Server-assigned game identifier for display
    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    /// Whether a terminal event has been received
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Winning side, once the game has ended
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Apply one server event.
    ///
    /// Snapshots replace the held state wholesale. Acceptances and game
    /// end clear the selection; rejections and turn changes only log.
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::Connected { game_id, .. } => {
                self.game_id = Some(game_id);
            }
            ServerEvent::Snapshot(state) => {
                self.state = Some(state);
            }
            ServerEvent::MoveAccepted { r#move: mv, .. } => {
                self.push_log(format!(
                    "Move accepted: {} {} -> {}",
                    mv.piece, mv.from, mv.to
                ));
                self.selection = Selection::Idle;
            }
            ServerEvent::MoveRejected { reason } => {
                self.push_log(format!("Move rejected: {reason}"));
            }
            ServerEvent::DropAccepted { piece, to, .. } => {
                self.push_log(format!("Drop accepted: {piece} at {to}"));
                self.selection = Selection::Idle;
            }
            ServerEvent::DropRejected { reason } => {
                self.push_log(format!("Drop rejected: {reason}"));
            }
            ServerEvent::TurnEnded { turn } => {
                self.push_log(format!("New turn: {}'s move", turn.name()));
            }
            ServerEvent::GameEnd { winner, .. } => {
                self.push_log(format!("Game Over: {} wins!", winner.name()));
                self.over = true;
                self.winner = Some(winner);
                self.selection = Selection::Idle;
            }
        }
    }

    /// Handle a click on board square `sq`.
    ///
    /// Depending on the current selection this selects, deselects, or
    /// returns a move/drop request for the transport to send. A returned
    /// request does not clear the selection — that waits for the accept.
    pub fn click_square(&mut self, sq: Square) -> Option<ClientRequest> {
        if self.over {
            return None;
        }
        let state = self.state.as_ref()?;
        let occupant = BoardGrid::project(&state.pieces).at(sq);

        match self.selection.clone() {
            Selection::Idle => {
                if let Some(piece) = occupant {
                    if piece.color == state.turn {
                        self.selection = Selection::Board {
                            piece_id: piece.id.clone(),
                            color: piece.color,
                            from: sq,
                        };
                    }
                }
                None
            }
            Selection::Board {
                piece_id,
                color,
                from,
            } => {
                if occupant.is_some_and(|p| p.id == piece_id) {
                    self.selection = Selection::Idle;
                    return None;
                }
                // Legality is the server's call; the target may look
                // illegal and the request is still sent.
                Some(ClientRequest::MoveRequest {
                    player_color: color,
                    piece_id,
                    from,
                    to: sq,
                })
            }
            Selection::Hand { piece_id, color } => {
                if occupant.is_some() {
                    // Drops onto occupied squares fail the local precheck;
                    // deselect without a round-trip.
                    self.selection = Selection::Idle;
                    return None;
                }
                Some(ClientRequest::DropRequest {
                    player_color: color,
                    piece_id,
                    to: sq,
                })
            }
        }
    }

    /// Handle a click on a hand piece.
    ///
    /// Selecting an opponent hand piece is refused; re-clicking the
    /// selected piece toggles back to idle; anything else (including an
    /// existing board selection) is replaced.
    pub fn click_hand(&mut self, piece_id: &str) -> Option<ClientRequest> {
        if self.over {
            return None;
        }
        let state = self.state.as_ref()?;
        let piece = state.piece(piece_id)?;
        if piece.color != state.turn {
            return None;
        }
        if self.selection.is_piece(piece_id) {
            self.selection = Selection::Idle;
        } else {
            self.selection = Selection::Hand {
                piece_id: piece.id.clone(),
                color: piece.color,
            };
        }
        None
    }

    /// End the current turn, dropping any selection.
    pub fn end_turn(&mut self) -> Option<ClientRequest> {
        if self.over {
            return None;
        }
        self.selection = Selection::Idle;
        Some(ClientRequest::EndTurn)
    }

    fn push_log(&mut self, entry: String) {
        self.log.push_front(entry);
    }
}
