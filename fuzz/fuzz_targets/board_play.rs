#![no_main]

use arbitrary::Arbitrary;
use chessboard::{movement::MovementType, Board, Piece, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    setup: Vec<(Piece, Square)>,
    moves: Vec<(u8, MovementType, Square)>,
}

fuzz_target!(|data: Data| {
    let mut board = Board::new();
    for (piece, sq) in data.setup {
        let (x, y) = sq.coords();
        let _ = board.add(piece, x, y);
    }
    let ids: Vec<_> = board.men().map(|(id, _)| id).collect();
    if ids.is_empty() {
        return;
    }

    for (index, movement_type, to) in data.moves {
        let id = ids[usize::from(index) % ids.len()];
        let listed = board.destinations(id, movement_type).contains(&to);
        let (x, y) = to.coords();
        let inventory = board.inventory().clone();
        assert_eq!(board.play(id, movement_type, x, y).is_ok(), listed);
        assert_eq!(board.inventory(), &inventory);
        assert_eq!(board.occupied().count(), board.pieces().count());
    }
});
