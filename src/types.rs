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

use core::fmt;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        let Some(role) = Role::from_char(ch) else {
            return None;
        };
        Some(role.of(Color::from_white(32 & ch as u8 == 0)))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.char())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PieceVisitor;

        impl serde::de::Visitor<'_> for PieceVisitor {
            type Value = Piece;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("piece letter")
            }

            fn visit_char<E>(self, value: char) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Piece::from_char(value).ok_or_else(|| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Char(value), &self)
                })
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self.visit_char(ch),
                    _ => Err(serde::de::Error::invalid_value(
                        serde::de::Unexpected::Str(value),
                        &self,
                    )),
                }
            }
        }

        deserializer.deserialize_char(PieceVisitor)
    }
}

/// Where a piece is: on a square of the board, or nowhere.
///
/// A piece starts out `Unplaced`, becomes `At` a square when a board accepts
/// it, and returns to `Unplaced` when it is captured.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub enum Placement {
    #[default]
    Unplaced,
    At(Square),
}

impl Placement {
    /// The sentinel coordinate pair used for pieces that are not on a board.
    pub const UNPLACED_COORDS: (i32, i32) = (-1, -1);

    pub const fn square(self) -> Option<Square> {
        match self {
            Placement::Unplaced => None,
            Placement::At(sq) => Some(sq),
        }
    }

    pub const fn is_placed(self) -> bool {
        matches!(self, Placement::At(_))
    }

    /// Gets `(x, y)`, or `(-1, -1)` if unplaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use chessboard::{Placement, Square};
    ///
    /// assert_eq!(Placement::Unplaced.coords(), (-1, -1));
    /// assert_eq!(Placement::At(Square::new(6, 3)).coords(), (6, 3));
    /// ```
    pub const fn coords(self) -> (i32, i32) {
        match self {
            Placement::Unplaced => Placement::UNPLACED_COORDS,
            Placement::At(sq) => (sq.x() as i32, sq.y() as i32),
        }
    }
}

impl From<Square> for Placement {
    fn from(sq: Square) -> Placement {
        Placement::At(sq)
    }
}

impl From<Option<Square>> for Placement {
    fn from(sq: Option<Square>) -> Placement {
        sq.map_or(Placement::Unplaced, Placement::At)
    }
}
