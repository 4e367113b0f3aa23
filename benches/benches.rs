use chessboard::{
    inventory::{Inventory, Overrides},
    movement::{MoveValidator, MovementType, StandardMoves},
    Board, Color, Piece, Role, Square,
};
use iai::black_box;

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

fn standard_setup() -> Board {
    let mut board = Board::new();
    for color in Color::ALL {
        let (back, front) = color.fold_wb((0, 1), (7, 6));
        for (x, role) in BACK_RANK.into_iter().enumerate() {
            board
                .add(Piece { color, role }, x as i32, back)
                .expect("back rank");
            board.add(color.pawn(), x as i32, front).expect("pawn rank");
        }
    }
    board
}

fn bench_standard_setup() -> Board {
    black_box(standard_setup())
}

fn bench_fill_board() -> Board {
    let overrides = Overrides::new()
        .set(Color::White, Role::Pawn, 32)
        .set(Color::Black, Role::Pawn, 32);
    let mut board = Board::with_inventory(Inventory::with_overrides(&overrides));
    for sq in Square::all() {
        let (x, y) = sq.coords();
        let color = Color::from_white(y < 4);
        board.add(black_box(color.pawn()), x, y).expect("empty cell");
    }
    board
}

fn bench_validate_moves() -> usize {
    let mut board = Board::new();
    board.add(Color::White.queen(), 3, 3).expect("empty cell");
    board.add(Color::Black.knight(), 5, 5).expect("empty cell");
    board.add(Color::White.pawn(), 3, 1).expect("empty cell");

    let queen = Color::White.queen();
    let from = Square::new(3, 3);
    Square::all()
        .filter(|&to| {
            StandardMoves.validate_move(
                black_box(queen),
                MovementType::Move,
                from,
                to,
                black_box(&board),
            )
        })
        .count()
}

fn bench_destinations() -> usize {
    let board = standard_setup();
    board
        .pieces()
        .map(|(id, _)| {
            black_box(&board).destinations(id, MovementType::Move).len()
                + black_box(&board).destinations(id, MovementType::Capture).len()
        })
        .sum()
}

fn bench_parse_overrides() -> Overrides {
    black_box("white.pawn=4, white.queen=3 black.knight=0,black.king=1")
        .parse()
        .expect("valid overrides")
}

iai::main!(
    bench_standard_setup,
    bench_fill_board,
    bench_validate_moves,
    bench_destinations,
    bench_parse_overrides,
);
