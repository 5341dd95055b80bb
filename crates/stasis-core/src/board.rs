//! Dense board projection for rendering and hit-testing.
//!
//! The server sends pieces as a sparse id-keyed map; the view and the
//! click handler both want O(1) "what occupies square (x, y)" lookups.
//! `BoardGrid::project` builds that dense 8x8 view. It is a pure function
//! over the snapshot and cheap enough to recompute on every render.

use crate::piece::{Piece, PieceId, Square, BOARD_SIZE};
use std::collections::HashMap;

const N: usize = BOARD_SIZE as usize;

/// Dense 8x8 projection of a piece map, borrowing from the snapshot.
#[derive(Debug)]
pub struct BoardGrid<'a> {
    /// Indexed `cells[y][x]`
    cells: [[Option<&'a Piece>; N]; N],
    /// Squares claimed by more than one piece — an upstream invariant
    /// violation; last writer in map iteration order wins.
    collisions: Vec<Square>,
}

impl<'a> BoardGrid<'a> {
    /// Build the grid from a sparse piece map.
    ///
    /// Only pieces with a defined, in-bounds position occupy a cell;
    /// captured pieces (no position) never appear. O(number of pieces).
    pub fn project(pieces: &'a HashMap<PieceId, Piece>) -> Self {
        let mut cells = [[None; N]; N];
        let mut collisions = Vec::new();

        for piece in pieces.values() {
            let Some(pos) = piece.pos else { continue };
            if !pos.in_bounds() {
                continue;
            }
            let cell = &mut cells[pos.y as usize][pos.x as usize];
            if cell.is_some() {
                collisions.push(pos);
            }
            *cell = Some(piece);
        }

        Self { cells, collisions }
    }

    /// The piece occupying `sq`, if any. Out-of-bounds squares are empty.
    pub fn at(&self, sq: Square) -> Option<&'a Piece> {
        if !sq.in_bounds() {
            return None;
        }
        self.cells[sq.y as usize][sq.x as usize]
    }

    /// Squares where two or more pieces claimed the same cell.
    ///
    /// The projector does not resolve these; callers should surface them.
    pub fn collisions(&self) -> &[Square] {
        &self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceType};

    fn piece(id: &str, pos: Option<Square>) -> Piece {
        Piece {
            id: id.to_string(),
            kind: PieceType::Pawn,
            color: Color::White,
            pos,
            stun: 0,
            move_stack: 0,
        }
    }

    fn map_of(pieces: Vec<Piece>) -> HashMap<PieceId, Piece> {
        pieces.into_iter().map(|p| (p.id.clone(), p)).collect()
    }

    #[test]
    fn test_placed_piece_appears_at_its_square() {
        let pieces = map_of(vec![piece("w_P0", Some(Square::new(4, 1)))]);
        let grid = BoardGrid::project(&pieces);

        assert_eq!(grid.at(Square::new(4, 1)).map(|p| p.id.as_str()), Some("w_P0"));
        assert_eq!(grid.at(Square::new(4, 2)), None);
    }

    #[test]
    fn test_captured_pieces_never_appear() {
        let pieces = map_of(vec![
            piece("w_P0", None),
            piece("w_P1", Some(Square::new(0, 0))),
        ]);
        let grid = BoardGrid::project(&pieces);

        let occupied: usize = (0..8)
            .flat_map(|y| (0..8).map(move |x| Square::new(x, y)))
            .filter(|sq| grid.at(*sq).is_some())
            .count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_out_of_bounds_position_is_excluded() {
        let pieces = map_of(vec![piece("w_P0", Some(Square::new(8, 3)))]);
        let grid = BoardGrid::project(&pieces);
        assert!(grid.collisions().is_empty());

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(grid.at(Square::new(x, y)), None);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_lookup_is_empty() {
        let pieces = map_of(vec![piece("w_P0", Some(Square::new(0, 0)))]);
        let grid = BoardGrid::project(&pieces);
        assert_eq!(grid.at(Square::new(8, 8)), None);
    }

    #[test]
    fn test_colliding_pieces_are_flagged() {
        let sq = Square::new(3, 3);
        let pieces = map_of(vec![piece("w_P0", Some(sq)), piece("w_P1", Some(sq))]);
        let grid = BoardGrid::project(&pieces);

        assert_eq!(grid.collisions(), &[sq]);
        // One of the two still occupies the cell
        assert!(grid.at(sq).is_some());
    }
}
