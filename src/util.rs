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

use core::num::TryFromIntError;

pub(crate) fn out_of_range_error() -> TryFromIntError {
    // TryFromIntError has a private constructor. Provoke one from a
    // conversion that can never succeed.
    u8::try_from(u16::MAX).unwrap_err()
}

/// Splits `s` at the first occurrence of `sep`.
pub(crate) fn split_once(s: &[u8], sep: u8) -> Option<(&[u8], &[u8])> {
    let idx = s.iter().position(|&ch| ch == sep)?;
    Some((&s[..idx], &s[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_once() {
        assert_eq!(split_once(b"black.pawn", b'.'), Some((&b"black"[..], &b"pawn"[..])));
        assert_eq!(split_once(b"pawn=", b'='), Some((&b"pawn"[..], &b""[..])));
        assert_eq!(split_once(b"pawn", b'='), None);
    }
}
