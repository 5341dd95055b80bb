//! Stasis Chess client core.
//!
//! This crate is the transport-free half of the Stasis Chess client: the
//! game snapshot model, the board and hand projections used for rendering
//! and hit-testing, the selection state machine that turns two-click
//! gestures into move/drop requests, and the wire protocol types.
//!
//! The board is never mutated locally — every snapshot from the server
//! replaces the held state whole, and all rule checking happens
//! server-side. The client's only outputs are the requests a click
//! produces.
//!
//! # Modules
//!
//! - [`piece`]: piece, color, and square types
//! - [`state`]: the snapshot root and hand projection
//! - [`board`]: dense 8x8 board projection
//! - [`selection`]: the tagged selection union
//! - [`protocol`]: wire messages and JSON codec
//! - [`session`]: the event reducer and click state machine

pub mod board;
pub mod piece;
pub mod protocol;
pub mod selection;
pub mod session;
pub mod state;

pub use board::BoardGrid;
pub use piece::{Color, Piece, PieceId, PieceType, Square, BOARD_SIZE};
pub use protocol::{ClientRequest, MoveEcho, ProtocolError, ServerEvent};
pub use selection::Selection;
pub use session::GameSession;
pub use state::GameState;
