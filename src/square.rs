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

use core::{cmp::max, fmt};

/// A cell of the 8x8 grid, addressed by `x` (column) and `y` (row), both
/// in `0..8`.
///
/// Squares are numbered `x + 8 * y`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(u8);

impl Square {
    /// Number of cells along each axis of the largest supported grid.
    pub const SPAN: u8 = 8;

    /// Gets the square at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in `0..8`.
    #[track_caller]
    pub const fn new(x: u8, y: u8) -> Square {
        assert!(x < Square::SPAN && y < Square::SPAN);
        Square(x + Square::SPAN * y)
    }

    /// Gets the square at `(x, y)`, or `None` if the coordinates lie outside
    /// the 8x8 grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard::Square;
    ///
    /// assert_eq!(Square::from_coords(6, 3), Some(Square::new(6, 3)));
    /// assert_eq!(Square::from_coords(-1, 5), None);
    /// assert_eq!(Square::from_coords(0, 8), None);
    /// ```
    pub const fn from_coords(x: i32, y: i32) -> Option<Square> {
        if 0 <= x && x < Square::SPAN as i32 && 0 <= y && y < Square::SPAN as i32 {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Gets the square with index `index`, or `None` if `index >= 64`.
    pub const fn from_index(index: usize) -> Option<Square> {
        if index < 64 {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % Square::SPAN
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / Square::SPAN
    }

    #[inline]
    pub const fn to_usize(self) -> usize {
        self.0 as usize
    }

    /// Gets the `(x, y)` pair as signed integers.
    #[inline]
    pub const fn coords(self) -> (i32, i32) {
        (self.x() as i32, self.y() as i32)
    }

    /// Steps by `(dx, dy)`, or `None` when leaving the 8x8 grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::from_coords(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Chebyshev (king step) distance between two squares.
    pub fn distance(self, other: Square) -> u32 {
        max(self.x().abs_diff(other.x()), self.y().abs_diff(other.y())).into()
    }

    /// All 64 squares, ordered by index.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.x(), self.y())
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for Square {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Square> {
        u.int_in_range::<u8>(0..=63).map(Square)
    }

    #[inline]
    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (1, Some(1))
    }
}
