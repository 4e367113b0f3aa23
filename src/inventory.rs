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

//! Remaining placeable pieces per color and piece type.
//!
//! # Examples
//!
//! ```
//! use chessboard::{inventory::{Inventory, Overrides}, Color, Role};
//!
//! let overrides: Overrides = "black.pawn=1".parse()?;
//! let mut inventory = Inventory::with_overrides(&overrides);
//! assert_eq!(inventory.black().pawn, 1);
//! assert_eq!(inventory.white().pawn, 8);
//!
//! assert!(inventory.decrement(Color::Black.pawn()));
//! assert!(!inventory.decrement(Color::Black.pawn()));
//! assert_eq!(inventory.count(Color::Black, Role::Pawn), 0);
//! # Ok::<_, chessboard::inventory::ParseOverridesError>(())
//! ```

use core::{error, fmt, str::FromStr};

use crate::{
    color::{ByColor, Color},
    role::{ByRole, Role},
    types::Piece,
    util::split_once,
};

/// Number of pieces of each type that one side starts a standard game with.
pub const STANDARD_SIDE: ByRole<u8> = ByRole {
    pawn: 8,
    knight: 2,
    bishop: 2,
    rook: 2,
    queen: 1,
    king: 1,
};

/// Per-color, per-type count of pieces that may still be placed.
///
/// Counts only ever go down, one at a time, through
/// [`Inventory::decrement()`]. Captured pieces do not return to stock.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Inventory {
    counts: ByColor<ByRole<u8>>,
}

impl Default for Inventory {
    fn default() -> Inventory {
        Inventory {
            counts: ByColor {
                white: STANDARD_SIDE,
                black: STANDARD_SIDE,
            },
        }
    }
}

impl Inventory {
    /// Standard counts for both sides.
    pub fn new() -> Inventory {
        Inventory::default()
    }

    /// Standard counts, except for the pairs listed in `overrides`.
    ///
    /// Each override applies to exactly one `(color, role)` pair, independent
    /// of all others.
    pub fn with_overrides(overrides: &Overrides) -> Inventory {
        Inventory {
            counts: ByColor::new_with(|color| {
                ByRole::new_with(|role| {
                    overrides
                        .get(color, role)
                        .unwrap_or(*STANDARD_SIDE.get(role))
                })
            }),
        }
    }

    /// An inventory with the given counts.
    pub const fn from_counts(counts: ByColor<ByRole<u8>>) -> Inventory {
        Inventory { counts }
    }

    /// Remaining count for `(color, role)`.
    #[inline]
    pub const fn count(&self, color: Color, role: Role) -> u8 {
        *self.counts.get(color).get(role)
    }

    /// Remaining count for the color and role of `piece`.
    #[inline]
    pub const fn get(&self, piece: Piece) -> u8 {
        self.count(piece.color, piece.role)
    }

    #[inline]
    pub const fn by_color(&self, color: Color) -> &ByRole<u8> {
        self.counts.get(color)
    }

    #[inline]
    pub const fn white(&self) -> &ByRole<u8> {
        &self.counts.white
    }

    #[inline]
    pub const fn black(&self) -> &ByRole<u8> {
        &self.counts.black
    }

    pub const fn counts(&self) -> &ByColor<ByRole<u8>> {
        &self.counts
    }

    /// Sum of all remaining counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|side| side.count()).sum()
    }

    /// Whether `color` has nothing left to place.
    pub fn is_exhausted(&self, color: Color) -> bool {
        self.by_color(color).iter().all(|&n| n == 0)
    }

    /// Takes one `piece` out of stock.
    ///
    /// Returns `false` and leaves the inventory untouched if none are left.
    #[must_use = "a false return means nothing was taken"]
    pub fn decrement(&mut self, piece: Piece) -> bool {
        let count = self.counts.get_mut(piece.color).get_mut(piece.role);
        match count.checked_sub(1) {
            Some(rest) => {
                *count = rest;
                true
            }
            None => false,
        }
    }
}

/// Error when parsing an invalid override list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseOverridesError {
    /// An entry is not of the form `<color>.<role>=<count>`.
    InvalidEntry,
    /// Unknown color name.
    InvalidColor,
    /// Unknown piece name.
    InvalidRole,
    /// Count is not a decimal number in `0..=255`.
    InvalidCount,
}

impl fmt::Display for ParseOverridesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseOverridesError::InvalidEntry => "invalid override entry",
            ParseOverridesError::InvalidColor => "invalid color in override",
            ParseOverridesError::InvalidRole => "invalid piece name in override",
            ParseOverridesError::InvalidCount => "invalid count in override",
        })
    }
}

impl error::Error for ParseOverridesError {}

/// Custom counts for some `(color, role)` pairs.
///
/// # Examples
///
/// ```
/// use chessboard::{inventory::Overrides, Color, Role};
///
/// let overrides = Overrides::new()
///     .set(Color::Black, Role::Pawn, 1)
///     .set(Color::White, Role::Queen, 2);
///
/// assert_eq!(overrides.to_string(), "white.queen=2, black.pawn=1");
/// assert_eq!(overrides.get(Color::White, Role::Pawn), None);
/// ```
#[derive(Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct Overrides {
    counts: ByColor<ByRole<Option<u8>>>,
}

impl Overrides {
    pub fn new() -> Overrides {
        Overrides::default()
    }

    /// Sets the count for `(color, role)`, replacing any earlier value for
    /// the same pair.
    #[must_use]
    pub fn set(mut self, color: Color, role: Role, count: u8) -> Overrides {
        self.insert(color, role, count);
        self
    }

    pub fn insert(&mut self, color: Color, role: Role, count: u8) {
        *self.counts.get_mut(color).get_mut(role) = Some(count);
    }

    pub fn get(&self, color: Color, role: Role) -> Option<u8> {
        *self.counts.get(color).get(role)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterates over the set entries, white before black, pawns before kings.
    pub fn iter(&self) -> impl Iterator<Item = (Color, Role, u8)> + '_ {
        self.counts.iter().zip(Color::ALL).flat_map(|(side, color)| {
            side.zip_role()
                .into_iter()
                .filter_map(move |(role, count)| count.map(|n| (color, role, n)))
        })
    }

    /// Parses entries of the form `<color>.<role>=<count>`, separated by
    /// commas or whitespace.
    pub fn from_ascii(s: &[u8]) -> Result<Overrides, ParseOverridesError> {
        let mut result = Overrides::new();
        for entry in s
            .split(|&ch| ch == b',' || ch.is_ascii_whitespace())
            .filter(|entry| !entry.is_empty())
        {
            let (key, count) = split_once(entry, b'=').ok_or(ParseOverridesError::InvalidEntry)?;
            let (color, role) = split_once(key, b'.').ok_or(ParseOverridesError::InvalidEntry)?;
            let color = Color::from_ascii(color).map_err(|_| ParseOverridesError::InvalidColor)?;
            let role = Role::from_ascii(role).map_err(|_| ParseOverridesError::InvalidRole)?;
            let count = btoi::btou(count).map_err(|_| ParseOverridesError::InvalidCount)?;
            result.insert(color, role, count);
        }
        Ok(result)
    }
}

impl FromStr for Overrides {
    type Err = ParseOverridesError;

    fn from_str(s: &str) -> Result<Overrides, ParseOverridesError> {
        Overrides::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (color, role, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}.{role}={count}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Overrides {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Overrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OverridesVisitor;

        impl serde::de::Visitor<'_> for OverridesVisitor {
            type Value = Overrides;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("inventory overrides")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(OverridesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_default_counts() {
        let inventory = Inventory::default();
        for color in Color::ALL {
            let side = inventory.by_color(color);
            assert_eq!(side.pawn, 8);
            assert_eq!(side.rook, 2);
            assert_eq!(side.knight, 2);
            assert_eq!(side.bishop, 2);
            assert_eq!(side.queen, 1);
            assert_eq!(side.king, 1);
        }
        assert_eq!(inventory.total(), 32);
    }

    #[test]
    fn test_custom_counts() {
        let inventory =
            Inventory::with_overrides(&Overrides::new().set(Color::Black, Role::Pawn, 1));
        assert_eq!(inventory.black().pawn, 1);
        assert_eq!(inventory.white().pawn, 8);
        for role in [Role::Knight, Role::Bishop, Role::Rook, Role::Queen, Role::King] {
            assert_eq!(inventory.count(Color::Black, role), *STANDARD_SIDE.get(role));
            assert_eq!(inventory.count(Color::White, role), *STANDARD_SIDE.get(role));
        }
    }

    #[test]
    fn test_multiple_overrides_are_independent() {
        let overrides = Overrides::new()
            .set(Color::White, Role::Queen, 3)
            .set(Color::Black, Role::Queen, 0)
            .set(Color::Black, Role::Rook, 5)
            .set(Color::Black, Role::Rook, 4);
        let inventory = Inventory::with_overrides(&overrides);
        assert_eq!(inventory.white().queen, 3);
        assert_eq!(inventory.black().queen, 0);
        assert_eq!(inventory.black().rook, 4);
        assert_eq!(inventory.white().rook, 2);
        assert_eq!(inventory.total(), 32 + 2 - 1 + 2);
    }

    #[test]
    fn test_decrement() {
        let mut inventory = Inventory::default();
        assert!(inventory.decrement(Color::White.pawn()));
        assert_eq!(inventory.white().pawn, 7);
        assert_eq!(inventory.black().pawn, 8);
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut inventory =
            Inventory::with_overrides(&Overrides::new().set(Color::Black, Role::Pawn, 1));
        assert!(inventory.decrement(Color::Black.pawn()));
        assert_eq!(inventory.black().pawn, 0);
        assert!(!inventory.decrement(Color::Black.pawn()));
        assert_eq!(inventory.black().pawn, 0);
        assert!(!inventory.is_exhausted(Color::Black));
    }

    #[test]
    fn test_is_exhausted() {
        let mut inventory = Inventory::from_counts(ByColor {
            white: ByRole { king: 1, ..ByRole::default() },
            black: ByRole::default(),
        });
        assert!(inventory.is_exhausted(Color::Black));
        assert!(!inventory.is_exhausted(Color::White));
        assert!(inventory.decrement(Color::White.king()));
        assert!(inventory.is_exhausted(Color::White));
    }

    #[test]
    fn test_parse_overrides() {
        let overrides: Overrides = "black.pawn=1, white.queen=2".parse().unwrap();
        assert_eq!(overrides.get(Color::Black, Role::Pawn), Some(1));
        assert_eq!(overrides.get(Color::White, Role::Queen), Some(2));
        assert_eq!(overrides.iter().count(), 2);

        let spaced: Overrides = "  white.queen=2\nblack.pawn=1 ,".parse().unwrap();
        assert_eq!(spaced, overrides);

        assert!("".parse::<Overrides>().unwrap().is_empty());
    }

    #[test]
    fn test_parse_overrides_errors() {
        assert_eq!("black.pawn".parse::<Overrides>(), Err(ParseOverridesError::InvalidEntry));
        assert_eq!("pawn=1".parse::<Overrides>(), Err(ParseOverridesError::InvalidEntry));
        assert_eq!("red.pawn=1".parse::<Overrides>(), Err(ParseOverridesError::InvalidColor));
        assert_eq!("white.pawns=1".parse::<Overrides>(), Err(ParseOverridesError::InvalidRole));
        assert_eq!("white.pawn=256".parse::<Overrides>(), Err(ParseOverridesError::InvalidCount));
        assert_eq!("white.pawn=-1".parse::<Overrides>(), Err(ParseOverridesError::InvalidCount));
        assert_eq!("white.pawn=".parse::<Overrides>(), Err(ParseOverridesError::InvalidCount));
    }

    #[test]
    fn test_display_is_canonical() {
        let overrides: Overrides = "black.king=0 white.pawn=4 black.pawn=1".parse().unwrap();
        assert_eq!(overrides.to_string(), "white.pawn=4, black.pawn=1, black.king=0");
        assert_eq!(overrides.to_string().parse::<Overrides>(), Ok(overrides));
    }
}
