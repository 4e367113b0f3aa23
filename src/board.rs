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

//! Piece placement and occupancy.
//!
//! # Examples
//!
//! ```
//! use chessboard::{Board, Color, Placement, PlacementError, Square};
//!
//! let mut board = Board::new();
//!
//! let pawn = board.add(Color::White.pawn(), 6, 3)?;
//! assert_eq!(board.placement(pawn), Placement::At(Square::new(6, 3)));
//! assert_eq!(board.inventory().white().pawn, 7);
//!
//! assert_eq!(board.add(Color::Black.pawn(), 6, 3), Err(PlacementError::DuplicatePositioning));
//! assert_eq!(board.add(Color::Black.pawn(), 10, 3), Err(PlacementError::InvalidPositioning));
//! assert_eq!(board.inventory().white().pawn, 7);
//! assert_eq!(board.inventory().black().pawn, 8);
//! # Ok::<_, PlacementError>(())
//! ```

use alloc::vec::Vec;
use core::{
    error,
    fmt::{self, Write as _},
};

use tracing::{debug, trace};

use crate::{
    bitboard::Bitboard,
    color::{ByColor, Color},
    inventory::Inventory,
    movement::{MoveValidator, MovementType, SquareList, StandardMoves},
    square::Square,
    types::{Piece, Placement},
};

/// Largest legal `x` coordinate of a standard board.
pub const MAX_BOARD_WIDTH: i32 = 7;

/// Largest legal `y` coordinate of a standard board.
pub const MAX_BOARD_HEIGHT: i32 = 7;

/// Handle of a piece that a [`Board`] has accepted.
///
/// Handles are only meaningful for the board that issued them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct PieceId(u32);

impl PieceId {
    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece that has been accepted by a board, with its current placement.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Man {
    piece: Piece,
    placement: Placement,
}

impl Man {
    #[inline]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Gets `(x, y)`, or `(-1, -1)` once captured.
    #[inline]
    pub const fn coords(&self) -> (i32, i32) {
        self.placement.coords()
    }
}

/// Reason for rejecting [`Board::add()`].
///
/// The checks run in the order of the variants, so at most one applies.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PlacementError {
    /// The coordinates are outside the board.
    InvalidPositioning,
    /// The cell is already occupied.
    DuplicatePositioning,
    /// No more pieces of this color and type may be placed.
    PieceUnavailable,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlacementError::InvalidPositioning => "position is outside the board",
            PlacementError::DuplicatePositioning => "position is already occupied",
            PlacementError::PieceUnavailable => "no more pieces of this kind available",
        })
    }
}

impl error::Error for PlacementError {}

/// Reason for rejecting [`Board::play()`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum PlayError {
    /// The piece is unknown to this board or has been captured.
    NotOnBoard,
    /// The destination is outside the board.
    InvalidPositioning,
    /// The destination holds a piece of the same color.
    DuplicatePositioning,
    /// A plain move onto a cell held by the opponent.
    DestinationOccupied,
    /// A capture onto an empty cell.
    NothingToCapture,
    /// The piece cannot move that way.
    IllegalMove,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayError::NotOnBoard => "piece is not on the board",
            PlayError::InvalidPositioning => "destination is outside the board",
            PlayError::DuplicatePositioning => "destination is occupied by own piece",
            PlayError::DestinationOccupied => "destination is occupied, capture required",
            PlayError::NothingToCapture => "nothing to capture at destination",
            PlayError::IllegalMove => "piece cannot move there",
        })
    }
}

impl error::Error for PlayError {}

/// Error when constructing a board with unsupported dimensions.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct DimensionError {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid board dimensions {}x{} (each side must be in 1..=8)",
            self.width, self.height
        )
    }
}

impl error::Error for DimensionError {}

/// A grid of cells, each empty or holding one piece, together with the
/// [`Inventory`] of pieces that may still be placed.
///
/// The board is the only record of where pieces are. Pieces enter through
/// [`Board::add()`], which hands out a [`PieceId`], and change cells through
/// [`Board::play()`].
#[derive(Clone)]
pub struct Board {
    width: u8,
    height: u8,
    cells: [Option<PieceId>; 64],
    men: Vec<Man>,
    inventory: Inventory,
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// An empty 8x8 board with the standard inventory.
    pub fn new() -> Board {
        Board::with_inventory(Inventory::default())
    }

    /// An empty 8x8 board.
    pub fn with_inventory(inventory: Inventory) -> Board {
        Board {
            width: Square::SPAN,
            height: Square::SPAN,
            cells: [None; 64],
            men: Vec::new(),
            inventory,
        }
    }

    /// An empty board with `width` columns and `height` rows.
    ///
    /// # Errors
    ///
    /// Both dimensions must be in `1..=8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard::{inventory::Inventory, Board};
    ///
    /// let board = Board::with_dimensions(5, 6, Inventory::default())?;
    /// assert!(board.is_legal_board_position(4, 5));
    /// assert!(!board.is_legal_board_position(5, 5));
    ///
    /// assert!(Board::with_dimensions(0, 8, Inventory::default()).is_err());
    /// assert!(Board::with_dimensions(8, 9, Inventory::default()).is_err());
    /// # Ok::<_, chessboard::DimensionError>(())
    /// ```
    pub fn with_dimensions(
        width: u32,
        height: u32,
        inventory: Inventory,
    ) -> Result<Board, DimensionError> {
        let span = u32::from(Square::SPAN);
        if !(1..=span).contains(&width) || !(1..=span).contains(&height) {
            return Err(DimensionError { width, height });
        }
        Ok(Board {
            width: width as u8,
            height: height as u8,
            ..Board::with_inventory(inventory)
        })
    }

    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// The cells that belong to this board.
    pub const fn legal_squares(&self) -> Bitboard {
        Bitboard::rect(self.width, self.height)
    }

    /// Tests if `(x, y)` is a cell of this board.
    ///
    /// For the default board this is `0 <= x <= MAX_BOARD_WIDTH` and
    /// `0 <= y <= MAX_BOARD_HEIGHT`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard::Board;
    ///
    /// let board = Board::new();
    /// assert!(board.is_legal_board_position(0, 0));
    /// assert!(board.is_legal_board_position(7, 7));
    /// assert!(!board.is_legal_board_position(11, 5));
    /// assert!(!board.is_legal_board_position(5, -1));
    /// ```
    pub fn is_legal_board_position(&self, x: i32, y: i32) -> bool {
        self.square_at(x, y).is_some()
    }

    /// Gets the square at `(x, y)` if it is a cell of this board.
    pub fn square_at(&self, x: i32, y: i32) -> Option<Square> {
        Square::from_coords(x, y).filter(|&sq| self.legal_squares().contains(sq))
    }

    /// Tests if the inventory has at least one more `piece` to place.
    pub fn is_piece_available(&self, piece: Piece) -> bool {
        self.inventory.get(piece) > 0
    }

    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Gets a piece previously accepted by this board.
    pub fn get(&self, id: PieceId) -> Option<&Man> {
        self.men.get(id.to_usize())
    }

    /// Where the piece is now. Unknown and captured pieces are
    /// [`Placement::Unplaced`].
    pub fn placement(&self, id: PieceId) -> Placement {
        self.get(id).map_or(Placement::Unplaced, Man::placement)
    }

    pub fn id_at(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.to_usize()]
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.id_at(sq).map(|id| self.men[id.to_usize()].piece)
    }

    /// Pieces currently on the board, in order of placement.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Man)> + '_ {
        self.men().filter(|(_, man)| man.placement.is_placed())
    }

    /// All pieces ever accepted by this board, including captured ones.
    pub fn men(&self) -> impl Iterator<Item = (PieceId, &Man)> + '_ {
        self.men
            .iter()
            .enumerate()
            .map(|(i, man)| (PieceId(i as u32), man))
    }

    /// Occupied cells.
    pub fn occupied(&self) -> Bitboard {
        Square::all()
            .filter(|&sq| self.cells[sq.to_usize()].is_some())
            .collect()
    }

    /// Cells occupied by pieces of `color`.
    pub fn by_color(&self, color: Color) -> Bitboard {
        Square::all()
            .filter(|&sq| self.piece_at(sq).is_some_and(|piece| piece.color == color))
            .collect()
    }

    /// Number of pieces on the board per color.
    pub fn material(&self) -> ByColor<usize> {
        ByColor::new_with(|color| self.by_color(color).count())
    }

    /// Places `piece` at `(x, y)` and takes it out of the inventory.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`PlacementError::InvalidPositioning`] if `(x, y)` is not a cell of
    ///    this board.
    /// 2. [`PlacementError::DuplicatePositioning`] if the cell is occupied.
    /// 3. [`PlacementError::PieceUnavailable`] if the inventory has no more
    ///    pieces of that color and type.
    ///
    /// On error neither the board nor the inventory is changed.
    pub fn add(&mut self, piece: Piece, x: i32, y: i32) -> Result<PieceId, PlacementError> {
        let sq = self.check_placement(piece, x, y).inspect_err(|err| {
            debug!(x, y, %piece, reason = %err, "placement rejected");
        })?;

        let id = PieceId(self.men.len() as u32);
        if !self.inventory.decrement(piece) {
            // check_placement() saw stock for this piece.
            return Err(PlacementError::PieceUnavailable);
        }
        self.men.push(Man {
            piece,
            placement: Placement::At(sq),
        });
        self.cells[sq.to_usize()] = Some(id);

        trace!(%id, %piece, %sq, "piece placed");
        debug_assert!(self.is_consistent());
        Ok(id)
    }

    fn check_placement(&self, piece: Piece, x: i32, y: i32) -> Result<Square, PlacementError> {
        let sq = self
            .square_at(x, y)
            .ok_or(PlacementError::InvalidPositioning)?;
        if self.id_at(sq).is_some() {
            return Err(PlacementError::DuplicatePositioning);
        }
        if !self.is_piece_available(piece) {
            return Err(PlacementError::PieceUnavailable);
        }
        Ok(sq)
    }

    /// Moves the piece `id` to `(x, y)` according to the standard move
    /// patterns. See [`Board::play_with()`].
    pub fn play(
        &mut self,
        id: PieceId,
        movement_type: MovementType,
        x: i32,
        y: i32,
    ) -> Result<Option<PieceId>, PlayError> {
        self.play_with(&StandardMoves, id, movement_type, x, y)
    }

    /// Moves the piece `id` to `(x, y)`, asking `validator` whether the
    /// piece can move that way.
    ///
    /// A [`MovementType::Capture`] removes the opposing piece standing on
    /// the destination and returns its id. The captured piece becomes
    /// [`Placement::Unplaced`] and is not returned to the inventory.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`PlayError::NotOnBoard`] if `id` is unknown or captured.
    /// 2. [`PlayError::InvalidPositioning`] if `(x, y)` is not a cell of this
    ///    board.
    /// 3. [`PlayError::DuplicatePositioning`] if the destination holds a piece
    ///    of the same color.
    /// 4. [`PlayError::DestinationOccupied`] for a move onto an opposing
    ///    piece, [`PlayError::NothingToCapture`] for a capture onto an empty
    ///    cell.
    /// 5. [`PlayError::IllegalMove`] if `validator` rejects the move.
    ///
    /// On error the board is unchanged.
    pub fn play_with<V: MoveValidator + ?Sized>(
        &mut self,
        validator: &V,
        id: PieceId,
        movement_type: MovementType,
        x: i32,
        y: i32,
    ) -> Result<Option<PieceId>, PlayError> {
        let (from, to, victim) = self
            .check_play(validator, id, movement_type, x, y)
            .inspect_err(|err| {
                debug!(%id, x, y, ?movement_type, reason = %err, "move rejected");
            })?;

        if let Some(victim) = victim {
            self.men[victim.to_usize()].placement = Placement::Unplaced;
            trace!(%victim, %to, "piece captured");
        }
        self.cells[from.to_usize()] = None;
        self.cells[to.to_usize()] = Some(id);
        self.men[id.to_usize()].placement = Placement::At(to);

        trace!(%id, %from, %to, "piece moved");
        debug_assert!(self.is_consistent());
        Ok(victim)
    }

    fn check_play<V: MoveValidator + ?Sized>(
        &self,
        validator: &V,
        id: PieceId,
        movement_type: MovementType,
        x: i32,
        y: i32,
    ) -> Result<(Square, Square, Option<PieceId>), PlayError> {
        let man = self.get(id).ok_or(PlayError::NotOnBoard)?;
        let from = man.placement.square().ok_or(PlayError::NotOnBoard)?;
        let to = self.square_at(x, y).ok_or(PlayError::InvalidPositioning)?;

        let victim = match self.id_at(to) {
            Some(other) if self.men[other.to_usize()].piece.color == man.piece.color => {
                return Err(PlayError::DuplicatePositioning);
            }
            Some(_) if !movement_type.is_capture() => return Err(PlayError::DestinationOccupied),
            None if movement_type.is_capture() => return Err(PlayError::NothingToCapture),
            victim => victim,
        };

        if !validator.validate_move(man.piece, movement_type, from, to, self) {
            return Err(PlayError::IllegalMove);
        }

        Ok((from, to, victim))
    }

    /// Every destination that [`Board::play()`] would accept for `id`.
    pub fn destinations(&self, id: PieceId, movement_type: MovementType) -> SquareList {
        self.destinations_with(&StandardMoves, id, movement_type)
    }

    /// Every destination that [`Board::play_with()`] would accept for `id`.
    pub fn destinations_with<V: MoveValidator + ?Sized>(
        &self,
        validator: &V,
        id: PieceId,
        movement_type: MovementType,
    ) -> SquareList {
        self.legal_squares()
            .into_iter()
            .filter(|sq| {
                let (x, y) = sq.coords();
                self.check_play(validator, id, movement_type, x, y).is_ok()
            })
            .collect()
    }

    fn is_consistent(&self) -> bool {
        let cells_agree = Square::all().all(|sq| match self.id_at(sq) {
            Some(id) => self.placement(id) == Placement::At(sq),
            None => true,
        });
        let men_agree = self.men().all(|(id, man)| match man.placement {
            Placement::At(sq) => self.id_at(sq) == Some(id),
            Placement::Unplaced => true,
        });
        cells_agree && men_agree
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                f.write_char(self.piece_at(Square::new(x, y)).map_or('.', Piece::char))?;
                f.write_char(if x + 1 < self.width { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;
    use crate::{inventory::Overrides, role::Role};

    #[test]
    fn test_max_board_size() {
        assert_eq!(MAX_BOARD_WIDTH, 7);
        assert_eq!(MAX_BOARD_HEIGHT, 7);
    }

    #[test]
    fn test_is_legal_board_position() {
        let board = Board::new();
        assert!(board.is_legal_board_position(0, 0));
        assert!(board.is_legal_board_position(5, 5));
        assert!(!board.is_legal_board_position(11, 5));
        assert!(!board.is_legal_board_position(0, 9));
        assert!(!board.is_legal_board_position(11, 0));
        assert!(!board.is_legal_board_position(-1, 5));
        assert!(!board.is_legal_board_position(5, -1));
        for x in 0..=MAX_BOARD_WIDTH {
            for y in 0..=MAX_BOARD_HEIGHT {
                assert!(board.is_legal_board_position(x, y));
            }
        }
    }

    #[test]
    fn test_add() {
        let mut board = Board::new();
        let id = board.add(Color::White.pawn(), 6, 3).unwrap();
        assert_eq!(board.get(id).unwrap().coords(), (6, 3));
        assert_eq!(board.piece_at(Square::new(6, 3)), Some(Color::White.pawn()));
        assert_eq!(board.inventory().white().pawn, 7);
        assert_eq!(board.occupied(), Bitboard::from_square(Square::new(6, 3)));
    }

    #[test]
    fn test_add_duplicate() {
        let mut board = Board::new();
        let first = board.add(Color::Black.pawn(), 6, 3).unwrap();
        assert_eq!(
            board.add(Color::Black.pawn(), 6, 3),
            Err(PlacementError::DuplicatePositioning)
        );
        assert_eq!(board.get(first).unwrap().coords(), (6, 3));
        assert_eq!(board.men().count(), 1);
        assert_eq!(board.inventory().black().pawn, 7);
    }

    #[test]
    fn test_add_invalid() {
        let mut board = Board::new();
        board.add(Color::Black.pawn(), 6, 3).unwrap();
        assert_eq!(
            board.add(Color::Black.pawn(), 10, 3),
            Err(PlacementError::InvalidPositioning)
        );
        assert_eq!(board.men().count(), 1);
        assert_eq!(board.inventory().black().pawn, 7);
    }

    #[test]
    fn test_error_order() {
        let inventory =
            Inventory::with_overrides(&Overrides::new().set(Color::White, Role::King, 0));
        let mut board = Board::with_inventory(inventory);
        board.add(Color::Black.king(), 4, 7).unwrap();

        // Off the board and out of stock: position wins.
        assert_eq!(board.add(Color::White.king(), 8, 0), Err(PlacementError::InvalidPositioning));
        // Occupied and out of stock: occupancy wins.
        assert_eq!(board.add(Color::White.king(), 4, 7), Err(PlacementError::DuplicatePositioning));
        assert_eq!(board.add(Color::White.king(), 4, 0), Err(PlacementError::PieceUnavailable));
    }

    #[test]
    fn test_piece_unavailable() {
        let mut board = Board::new();
        for y in 0..8 {
            board.add(Color::Black.pawn(), 6, y).unwrap();
        }
        assert!(!board.is_piece_available(Color::Black.pawn()));
        assert!(board.is_piece_available(Color::White.pawn()));
        assert_eq!(
            board.add(Color::Black.pawn(), 7, 0),
            Err(PlacementError::PieceUnavailable)
        );
        assert_eq!(board.piece_at(Square::new(7, 0)), None);
        assert_eq!(board.pieces().count(), 8);
    }

    #[test]
    fn test_dimensions() {
        let board = Board::with_dimensions(3, 8, Inventory::default()).unwrap();
        assert!(board.is_legal_board_position(2, 7));
        assert!(!board.is_legal_board_position(3, 0));
        assert_eq!(board.legal_squares().count(), 24);

        assert_eq!(
            Board::with_dimensions(9, 8, Inventory::default()).map(|_| ()),
            Err(DimensionError { width: 9, height: 8 })
        );
        assert!(Board::with_dimensions(4, 0, Inventory::default()).is_err());
    }

    #[test]
    fn test_play_capture() {
        let mut board = Board::new();
        let rook = board.add(Color::White.rook(), 0, 0).unwrap();
        let pawn = board.add(Color::Black.pawn(), 0, 5).unwrap();

        assert_eq!(board.play(rook, MovementType::Move, 0, 5), Err(PlayError::DestinationOccupied));
        assert_eq!(board.play(rook, MovementType::Capture, 0, 5), Ok(Some(pawn)));

        assert_eq!(board.placement(rook), Placement::At(Square::new(0, 5)));
        assert_eq!(board.placement(pawn), Placement::Unplaced);
        assert_eq!(board.get(pawn).unwrap().coords(), (-1, -1));
        assert_eq!(board.piece_at(Square::new(0, 0)), None);
        assert_eq!(board.inventory().black().pawn, 7);
        assert_eq!(board.play(pawn, MovementType::Move, 0, 4), Err(PlayError::NotOnBoard));
    }

    #[test]
    fn test_play_rejections_leave_board_unchanged() {
        let mut board = Board::new();
        let bishop = board.add(Color::White.bishop(), 2, 0).unwrap();
        board.add(Color::White.pawn(), 3, 1).unwrap();
        let before = format!("{board:?}");

        assert_eq!(
            board.play(bishop, MovementType::Move, 3, 1),
            Err(PlayError::DuplicatePositioning)
        );
        assert_eq!(board.play(bishop, MovementType::Move, 5, 3), Err(PlayError::IllegalMove));
        assert_eq!(
            board.play(bishop, MovementType::Move, -1, 1),
            Err(PlayError::InvalidPositioning)
        );
        assert_eq!(
            board.play(bishop, MovementType::Capture, 0, 2),
            Err(PlayError::NothingToCapture)
        );
        assert_eq!(format!("{board:?}"), before);
        assert_eq!(board.play(bishop, MovementType::Move, 0, 2), Ok(None));
    }

    #[test]
    fn test_destinations() {
        let mut board = Board::new();
        let king = board.add(Color::White.king(), 0, 0).unwrap();
        board.add(Color::White.pawn(), 1, 1).unwrap();
        board.add(Color::Black.pawn(), 0, 1).unwrap();

        let moves = board.destinations(king, MovementType::Move);
        assert_eq!(moves.as_slice(), &[Square::new(1, 0)]);
        let captures = board.destinations(king, MovementType::Capture);
        assert_eq!(captures.as_slice(), &[Square::new(0, 1)]);
    }

    #[test]
    fn test_debug() {
        let mut board = Board::with_dimensions(3, 2, Inventory::default()).unwrap();
        board.add(Color::White.king(), 0, 0).unwrap();
        board.add(Color::Black.queen(), 2, 1).unwrap();
        assert_eq!(format!("{board:?}"), ". . q\nK . .\n");
    }
}
