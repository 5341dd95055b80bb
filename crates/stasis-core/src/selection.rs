//! Local selection state.
//!
//! At most one piece is selected at a time, either from the board or from
//! a hand. The tagged union keeps the two origins distinct — a hand
//! selection has no origin square, a board selection always does.
//! The transition rules live in [`crate::session::GameSession`].

use crate::piece::{Color, PieceId, Square};

/// The client's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// A piece selected on the board; a target click emits a move request
    Board {
        piece_id: PieceId,
        color: Color,
        from: Square,
    },
    /// A captured piece selected from a hand; an empty-square click emits
    /// a drop request
    Hand { piece_id: PieceId, color: Color },
}

impl Selection {
    /// Whether the given piece is the currently selected one
    pub fn is_piece(&self, id: &str) -> bool {
        match self {
            Selection::Idle => false,
            Selection::Board { piece_id, .. } | Selection::Hand { piece_id, .. } => piece_id == id,
        }
    }

    /// Whether anything is selected
    pub fn is_active(&self) -> bool {
        !matches!(self, Selection::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(Selection::default(), Selection::Idle);
        assert!(!Selection::Idle.is_active());
        assert!(!Selection::Idle.is_piece("w_P0"));
    }

    #[test]
    fn test_is_piece_matches_either_origin() {
        let board = Selection::Board {
            piece_id: "w_P0".into(),
            color: Color::White,
            from: Square::new(4, 1),
        };
        let hand = Selection::Hand {
            piece_id: "b_R1".into(),
            color: Color::Black,
        };
        assert!(board.is_piece("w_P0"));
        assert!(!board.is_piece("b_R1"));
        assert!(hand.is_piece("b_R1"));
    }
}
