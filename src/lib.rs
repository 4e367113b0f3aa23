//! A library for chess board occupancy, placement legality and piece
//! inventories.
//!
//! # Examples
//!
//! Place pieces on a standard board:
//!
//! ```
//! use chessboard::{Board, Color, PlacementError};
//!
//! let mut board = Board::new();
//! let pawn = board.add(Color::White.pawn(), 6, 3)?;
//! assert_eq!(board.get(pawn).map(|man| man.coords()), Some((6, 3)));
//! assert_eq!(board.inventory().white().pawn, 7);
//!
//! // Cells hold at most one piece.
//! assert_eq!(board.add(Color::Black.pawn(), 6, 3), Err(PlacementError::DuplicatePositioning));
//! # Ok::<_, PlacementError>(())
//! ```
//!
//! Limit the number of pieces:
//!
//! ```
//! use chessboard::{inventory::{Inventory, Overrides}, Board, Color, PlacementError};
//!
//! let overrides: Overrides = "black.pawn=1".parse()?;
//! let mut board = Board::with_inventory(Inventory::with_overrides(&overrides));
//! board.add(Color::Black.pawn(), 0, 6)?;
//! assert_eq!(board.add(Color::Black.pawn(), 1, 6), Err(PlacementError::PieceUnavailable));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Move pieces around:
//!
//! ```
//! use chessboard::{movement::MovementType, Board, Color, Placement};
//!
//! let mut board = Board::new();
//! let knight = board.add(Color::White.knight(), 1, 0)?;
//! let pawn = board.add(Color::Black.pawn(), 2, 2)?;
//!
//! assert_eq!(board.play(knight, MovementType::Capture, 2, 2)?, Some(pawn));
//! assert_eq!(board.placement(pawn), Placement::Unplaced);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! * `std`: Enabled by default. Lets dependencies use the standard library.
//!   For `no_std` environments (with `alloc`), this must be disabled with
//!   `default-features = false`.
//! * `arbitrary`: Implements [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//! * `serde`: Implements [`serde`](https://docs.rs/serde/1)
//!   serialization/deserialization for types with unique natural
//!   representations.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! Rejected placements and moves are reported as `DEBUG` events, accepted
//! ones as `TRACE` events, through [`tracing`](https://docs.rs/tracing/0.1).

#![no_std]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod color;
mod role;
mod square;
mod types;
mod util;

pub mod bitboard;
pub mod board;
pub mod inventory;
pub mod movement;

pub use bitboard::Bitboard;
pub use board::{
    Board, DimensionError, Man, PieceId, PlacementError, PlayError, MAX_BOARD_HEIGHT,
    MAX_BOARD_WIDTH,
};
pub use color::{ByColor, Color, ParseColorError};
pub use inventory::Inventory;
pub use role::{ByRole, ParseRoleError, Role};
pub use square::Square;
pub use types::{Piece, Placement};

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for PieceId {}
