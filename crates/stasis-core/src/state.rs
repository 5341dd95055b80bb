//! Authoritative game snapshot and the hand projection.
//!
//! A `GameState` is received whole from the server and replaced whole on
//! every push — never merged. The client holds at most one current
//! snapshot at a time.

use crate::piece::{Color, Piece, PieceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full game snapshot as pushed by the server.
///
/// Extra fields the server includes (`id`, `history`) are ignored on
/// decode; the client renders only what is specified here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// All pieces in the game, keyed by id
    pub pieces: HashMap<PieceId, Piece>,
    /// Per-color ordered list of captured piece ids droppable by that side
    pub hands: HashMap<Color, Vec<PieceId>>,
    /// Side whose move it currently is
    pub turn: Color,
}

impl GameState {
    /// Project the droppable pieces for one side, in hand order.
    ///
    /// Ids with no matching entry in `pieces` are stale references
    /// (already resolved server-side) and are skipped, not errors.
    pub fn hand(&self, color: Color) -> Vec<&Piece> {
        self.hands
            .get(&color)
            .map(|ids| ids.iter().filter_map(|id| self.pieces.get(id)).collect())
            .unwrap_or_default()
    }

    /// Look up a piece by id
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{PieceType, Square};

    fn piece(id: &str, kind: PieceType, color: Color, pos: Option<Square>) -> Piece {
        Piece {
            id: id.to_string(),
            kind,
            color,
            pos,
            stun: 0,
            move_stack: 0,
        }
    }

    fn state_with_hand(ids: &[&str]) -> GameState {
        let mut pieces = HashMap::new();
        pieces.insert(
            "w_P0".to_string(),
            piece("w_P0", PieceType::Pawn, Color::White, None),
        );
        pieces.insert(
            "w_R0".to_string(),
            piece("w_R0", PieceType::Rook, Color::White, None),
        );
        let mut hands = HashMap::new();
        hands.insert(
            Color::White,
            ids.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        );
        hands.insert(Color::Black, Vec::new());
        GameState {
            pieces,
            hands,
            turn: Color::White,
        }
    }

    #[test]
    fn test_hand_preserves_order() {
        let state = state_with_hand(&["w_R0", "w_P0"]);
        let hand = state.hand(Color::White);
        assert_eq!(hand.len(), 2);
        assert_eq!(hand[0].id, "w_R0");
        assert_eq!(hand[1].id, "w_P0");
    }

    #[test]
    fn test_hand_skips_stale_ids() {
        let state = state_with_hand(&["w_P0", "w_X9", "w_R0"]);
        let hand = state.hand(Color::White);
        assert_eq!(hand.len(), 2);
        assert!(hand.iter().all(|p| state.pieces.contains_key(&p.id)));
    }

    #[test]
    fn test_hand_for_missing_color_is_empty() {
        let mut state = state_with_hand(&["w_P0"]);
        state.hands.remove(&Color::Black);
        assert!(state.hand(Color::Black).is_empty());
    }

    #[test]
    fn test_snapshot_decodes_with_extra_fields() {
        let json = r#"{
            "id": "ab12cd34",
            "turn": "b",
            "pieces": {
                "b_K0": {"id": "b_K0", "type": "king", "color": "b", "pos": [4, 7]}
            },
            "hands": {"w": [], "b": []},
            "history": []
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.turn, Color::Black);
        assert_eq!(state.pieces.len(), 1);
    }
}
