//! Wire protocol for the client/server event channel.
//!
//! Messages are JSON with a `type` tag naming the event and a `payload`
//! object carrying its fields. Payload shapes are authoritative; framing
//! beyond that (the underlying WebSocket) is not this module's concern.
//!
//! The client is fire-and-forget: it carries no request ids and no
//! correlation between a request and the acknowledgement that answers it.

use crate::piece::{Color, PieceId, Square};
use crate::state::GameState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising at the wire boundary.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Json(#[from] serde_json::Error),
}

/// Messages sent from client to server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientRequest {
    /// Ask the server to move a board piece
    MoveRequest {
        player_color: Color,
        piece_id: PieceId,
        from: Square,
        to: Square,
    },

    /// Ask the server to drop a hand piece onto an empty square
    DropRequest {
        player_color: Color,
        piece_id: PieceId,
        to: Square,
    },

    /// End the current turn
    EndTurn,
}

impl ClientRequest {
    /// Serialize for the wire
    pub fn encode(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Messages pushed from server to client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Session established; `game_id` is the display identifier
    Connected { sid: String, game_id: String },

    /// Full snapshot — always a complete replace, never a merge
    #[serde(rename = "game_state")]
    Snapshot(GameState),

    /// Move applied; echoes the request
    MoveAccepted { by: Color, r#move: MoveEcho },

    /// Move refused; `reason` is the only surfaced field
    MoveRejected { reason: String },

    /// Drop applied; echoes the request
    DropAccepted { by: Color, piece: PieceId, to: Square },

    /// Drop refused
    DropRejected { reason: String },

    /// Turn passed to `turn`
    TurnEnded { turn: Color },

    /// Terminal event; interaction freezes after this
    GameEnd {
        winner: Color,
        #[serde(default)]
        loser: Option<Color>,
        #[serde(default)]
        reason: Option<String>,
    },
}

/// Echo of an accepted move's parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEcho {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

impl ServerEvent {
    /// Parse a wire message
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}
