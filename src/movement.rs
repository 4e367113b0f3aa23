// This file is part of the chessboard library.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Move patterns of the individual piece types.
//!
//! The board does not know how pieces move. [`Board::play()`] asks a
//! [`MoveValidator`] whether the shape of a move is acceptable, after it
//! has checked the destination itself. [`StandardMoves`] implements the
//! usual chess patterns.
//!
//! # Examples
//!
//! ```
//! use chessboard::{movement::{MoveValidator, MovementType, StandardMoves}, Board, Color, Square};
//!
//! let mut board = Board::new();
//! board.add(Color::White.rook(), 0, 0)?;
//! board.add(Color::White.pawn(), 0, 3)?;
//!
//! let rook = Color::White.rook();
//! let from = Square::new(0, 0);
//! assert!(StandardMoves.validate_move(rook, MovementType::Move, from, Square::new(0, 2), &board));
//! // Blocked by the pawn.
//! let to = Square::new(0, 5);
//! assert!(!StandardMoves.validate_move(rook, MovementType::Move, from, to, &board));
//! # Ok::<_, chessboard::PlacementError>(())
//! ```
//!
//! [`Board::play()`]: crate::Board::play

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::{
    bitboard::Bitboard, board::Board, color::Color, role::Role, square::Square, types::Piece,
};

/// Destinations of a single piece. No piece can reach more than 64 cells.
pub type SquareList = ArrayVec<Square, 64>;

/// `Move` to an empty cell, or `Capture` on a cell held by the opponent.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum MovementType {
    Move,
    Capture,
}

impl MovementType {
    pub const fn is_capture(self) -> bool {
        matches!(self, MovementType::Capture)
    }
}

bitflags! {
    /// Lines along which a sliding piece travels.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct Rays: u8 {
        /// Rows and columns.
        const ORTHOGONAL = 1 << 0;
        /// Diagonals.
        const DIAGONAL = 1 << 1;
    }
}

impl Rays {
    /// The rays `role` slides along. Empty for non-sliding pieces.
    pub const fn of(role: Role) -> Rays {
        match role {
            Role::Rook => Rays::ORTHOGONAL,
            Role::Bishop => Rays::DIAGONAL,
            Role::Queen => Rays::ORTHOGONAL.union(Rays::DIAGONAL),
            Role::Pawn | Role::Knight | Role::King => Rays::empty(),
        }
    }

    /// The ray that connects `from` and `to`, if any.
    pub fn between(from: Square, to: Square) -> Rays {
        let (dx, dy) = delta(from, to);
        if dx == 0 && dy == 0 {
            Rays::empty()
        } else if dx == 0 || dy == 0 {
            Rays::ORTHOGONAL
        } else if dx.abs() == dy.abs() {
            Rays::DIAGONAL
        } else {
            Rays::empty()
        }
    }
}

/// Decides whether a piece may travel from one cell to another.
///
/// Implementations only judge the shape of the move. Bounds, occupancy of
/// the destination and the [`MovementType`] matching what stands there are
/// checked by the board before it asks.
pub trait MoveValidator {
    fn validate_move(
        &self,
        piece: Piece,
        movement_type: MovementType,
        from: Square,
        to: Square,
        board: &Board,
    ) -> bool;
}

impl<V: MoveValidator + ?Sized> MoveValidator for &V {
    fn validate_move(
        &self,
        piece: Piece,
        movement_type: MovementType,
        from: Square,
        to: Square,
        board: &Board,
    ) -> bool {
        (**self).validate_move(piece, movement_type, from, to, board)
    }
}

/// Standard chess move patterns.
///
/// * Rooks, bishops and queens slide and are stopped by any piece in between.
/// * Knights jump and ignore blockers.
/// * Kings step once in any direction.
/// * Pawns advance one cell (two from their starting row, through an empty
///   cell) and capture one cell diagonally forward. White advances towards
///   larger `y`.
#[derive(Copy, Clone, Default, Debug)]
pub struct StandardMoves;

impl MoveValidator for StandardMoves {
    fn validate_move(
        &self,
        piece: Piece,
        movement_type: MovementType,
        from: Square,
        to: Square,
        board: &Board,
    ) -> bool {
        if from == to {
            return false;
        }

        let (dx, dy) = delta(from, to);
        match piece.role {
            Role::Pawn => pawn_move(piece.color, movement_type, from, to, board),
            Role::Knight => matches!((dx.abs(), dy.abs()), (1, 2) | (2, 1)),
            Role::King => dx.abs() <= 1 && dy.abs() <= 1,
            Role::Bishop | Role::Rook | Role::Queen => {
                Rays::of(piece.role).intersects(Rays::between(from, to))
                    && (Bitboard::between(from, to) & board.occupied()).is_empty()
            }
        }
    }
}

fn delta(from: Square, to: Square) -> (i32, i32) {
    let (fx, fy) = from.coords();
    let (tx, ty) = to.coords();
    (tx - fx, ty - fy)
}

/// Row a pawn of `color` starts on.
pub fn pawn_start_row(color: Color, board: &Board) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => i32::from(board.height()) - 2,
    }
}

fn pawn_move(
    color: Color,
    movement_type: MovementType,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    let (dx, dy) = delta(from, to);
    let forward = color.forward();
    match movement_type {
        MovementType::Capture => dx.abs() == 1 && dy == forward,
        MovementType::Move => {
            dx == 0
                && (dy == forward
                    || (dy == 2 * forward
                        && from.coords().1 == pawn_start_row(color, board)
                        && (Bitboard::between(from, to) & board.occupied()).is_empty()))
        }
    }
}
