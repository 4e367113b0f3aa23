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

//! Sets of squares.

use core::{
    fmt::{self, Write as _},
    iter::FusedIterator,
    ops,
};

use crate::square::Square;

/// A set of [squares](Square) represented by a 64 bit integer mask.
///
/// # Examples
///
/// ```
/// use chessboard::{Bitboard, Square};
///
/// let mask = Bitboard::rect(3, 2);
/// assert!(mask.contains(Square::new(2, 1)));
/// assert!(!mask.contains(Square::new(3, 0)));
/// assert_eq!(mask.count(), 6);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    #[inline]
    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1 << sq.to_usize())
    }

    /// The cells with `x < width` and `y < height`.
    pub const fn rect(width: u8, height: u8) -> Bitboard {
        if width == 0 || height == 0 {
            return Bitboard::EMPTY;
        }
        let width = if width > 8 { 8 } else { width };
        let height = if height > 8 { 8 } else { height };
        let row = if width == 8 { 0xff } else { (1u64 << width) - 1 };
        let mut mask = 0;
        let mut y = 0;
        while y < height {
            mask |= row << (8 * y);
            y += 1;
        }
        Bitboard(mask)
    }

    /// Squares strictly between `a` and `b` if they share a row, column or
    /// diagonal. Empty otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard::{Bitboard, Square};
    ///
    /// let between = Bitboard::between(Square::new(0, 0), Square::new(3, 3));
    /// assert_eq!(between.count(), 2);
    /// assert!(between.contains(Square::new(1, 1)));
    /// assert!(between.contains(Square::new(2, 2)));
    ///
    /// assert!(Bitboard::between(Square::new(0, 0), Square::new(1, 2)).is_empty());
    /// ```
    pub fn between(a: Square, b: Square) -> Bitboard {
        let (ax, ay) = a.coords();
        let (bx, by) = b.coords();
        let (dx, dy) = (bx - ax, by - ay);
        if (dx == 0 && dy == 0) || !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
            return Bitboard::EMPTY;
        }

        let (sx, sy) = (dx.signum(), dy.signum());
        let mut result = Bitboard::EMPTY;
        let mut cur = a.offset(sx, sy);
        while let Some(sq) = cur {
            if sq == b {
                break;
            }
            result.add(sq);
            cur = sq.offset(sx, sy);
        }
        result
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Bitboard::from_square(sq).0 != 0
    }

    #[inline]
    pub fn add(&mut self, sq: Square) {
        self.0 |= Bitboard::from_square(sq).0;
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Square::from_index(self.0.trailing_zeros() as usize)
        }
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::from_square(sq)
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..8).rev() {
            for x in 0..8 {
                f.write_char(if self.contains(Square::new(x, y)) { '1' } else { '.' })?;
                f.write_char(if x < 7 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl ops::Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<T>(iter: T) -> Bitboard
    where
        T: IntoIterator<Item = Square>,
    {
        let mut result = Bitboard::EMPTY;
        for sq in iter {
            result.add(sq);
        }
        result
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> IntoIter {
        IntoIter(self)
    }
}

/// Iterator over the squares of a [`Bitboard`], in index order.
#[derive(Debug, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.0.first();
        self.0 .0 &= self.0 .0.wrapping_sub(1);
        sq
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first() {
        assert_eq!(Bitboard::from_square(Square::new(0, 0)).first(), Some(Square::new(0, 0)));
        assert_eq!(Bitboard::from_square(Square::new(3, 1)).first(), Some(Square::new(3, 1)));
        assert_eq!(Bitboard::EMPTY.first(), None);
    }

    #[test]
    fn test_rect() {
        assert_eq!(Bitboard::rect(8, 8), Bitboard(!0));
        assert_eq!(Bitboard::rect(8, 1), Bitboard(0xff));
        assert_eq!(Bitboard::rect(1, 8), Bitboard(0x0101_0101_0101_0101));
        assert_eq!(Bitboard::rect(0, 5), Bitboard::EMPTY);
    }

    #[test]
    fn test_between() {
        let between = Bitboard::between(Square::new(0, 3), Square::new(5, 3));
        assert_eq!(between.count(), 4);
        assert!(!between.contains(Square::new(0, 3)));
        assert!(!between.contains(Square::new(5, 3)));

        assert!(Bitboard::between(Square::new(4, 4), Square::new(4, 5)).is_empty());
        assert!(Bitboard::between(Square::new(4, 4), Square::new(4, 4)).is_empty());
        assert_eq!(
            Bitboard::between(Square::new(7, 0), Square::new(0, 7)).count(),
            6
        );
    }

    #[test]
    fn test_iter() {
        let bb: Bitboard = [Square::new(7, 7), Square::new(1, 0), Square::new(0, 4)]
            .into_iter()
            .collect();
        let mut it = bb.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(Square::new(1, 0)));
        assert_eq!(it.next(), Some(Square::new(0, 4)));
        assert_eq!(it.next(), Some(Square::new(7, 7)));
        assert_eq!(it.next(), None);
    }
}
