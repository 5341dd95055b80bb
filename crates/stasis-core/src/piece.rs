//! Piece and coordinate types shared by the board, hand, and wire protocol.
//!
//! Everything here mirrors what the server sends: pieces are immutable
//! snapshots owned by the server, never mutated locally.

use serde::{Deserialize, Serialize};

/// Board side length. Squares range over 0..8 on both axes.
pub const BOARD_SIZE: u8 = 8;

/// Opaque piece identifier, unique within a game (e.g. `"w_P3"`).
pub type PieceId = String;

/// Side color. Serialized as `"w"`/`"b"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "w")]
    White,
    #[serde(rename = "b")]
    Black,
}

impl Color {
    /// The opposing side
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Human-readable name for display and log entries
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// The six standard piece kinds. Serialized lowercase (`"king"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// Unicode glyph for this piece as the given color
    pub fn glyph(&self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

/// Zero-based board square.
///
/// `x` is the file index (0 = a-file), `y` is the rank index (0 = rank 1).
/// Serialized as a `[x, y]` array to match the wire format. Display
/// reverses the rank axis; the coordinates themselves never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    /// File index, 0-7
    pub x: u8,
    /// Rank index, 0-7
    pub y: u8,
}

impl Square {
    /// Create a new square
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this square lies on the 8x8 board
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl From<(u8, u8)> for Square {
    fn from((x, y): (u8, u8)) -> Self {
        Square { x, y }
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.x, sq.y)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single piece as received in a snapshot.
///
/// `pos` is `None` while the piece sits in a hand. `stun > 0` means the
/// piece cannot act this turn; `move_stack` is the variant's accrual
/// counter. Both are server-owned — the client only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    /// Server-assigned identifier
    pub id: PieceId,
    /// Piece kind
    #[serde(rename = "type")]
    pub kind: PieceType,
    /// Owning side
    pub color: Color,
    /// Board position, absent while captured/in hand
    pub pos: Option<Square>,
    /// Turns remaining during which the piece cannot act
    #[serde(default)]
    pub stun: u32,
    /// Variant-specific accrual counter
    #[serde(default)]
    pub move_stack: u32,
}

impl Piece {
    /// Whether the piece is currently unable to act
    pub fn is_stunned(&self) -> bool {
        self.stun > 0
    }
}
