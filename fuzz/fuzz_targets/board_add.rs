#![no_main]

use arbitrary::Arbitrary;
use chessboard::{Board, Piece, PlacementError};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    placements: Vec<(Piece, i32, i32)>,
}

fuzz_target!(|data: Data| {
    let mut board = Board::new();
    for (piece, x, y) in data.placements {
        let before = board.inventory().get(piece);
        let legal = board.is_legal_board_position(x, y);
        match board.add(piece, x, y) {
            Ok(id) => {
                assert!(legal);
                assert_eq!(board.get(id).map(|man| man.coords()), Some((x, y)));
                assert_eq!(board.inventory().get(piece), before - 1);
            }
            Err(err) => {
                assert_eq!(err == PlacementError::InvalidPositioning, !legal);
                assert_eq!(board.inventory().get(piece), before);
            }
        }
    }
    assert_eq!(board.occupied().count(), board.pieces().count());
});
