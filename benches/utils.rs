use capture_chess::{Board, Color, Game, Piece, PieceType, Square};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const QUEEN_HUNT: [(&str, &str); 7] = [
    ("e2", "e4"),
    ("d7", "d5"),
    ("e4", "d5"),
    ("d8", "d5"),
    ("b1", "c3"),
    ("a7", "a6"),
    ("c3", "d5"),
];

fn all_legal_targets(board: &Board, color: Color) -> usize {
    board
        .iter_pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(from, piece)| {
            Square::all()
                .filter(|to| {
                    *to != from
                        && board.get(*to).map_or(true, |target| target.color != color)
                        && piece.can_move(from, *to, board)
                })
                .count()
        })
        .sum()
}

fn open_queen_sweep(board: &Board) -> usize {
    let queen = Piece::new(PieceType::Queen, Color::White);
    let from = Square::resolve("d4").expect("d4 is on the board");
    Square::all()
        .filter(|to| *to != from && queen.can_move(from, *to, board))
        .count()
}

fn queen_hunt() -> Game {
    let mut game = Game::new();
    for (start, end) in QUEEN_HUNT {
        game.make_move(start, end);
    }
    game
}

fn criterion_benchmark(c: &mut Criterion) {
    let initial = Board::default();
    c.bench_function("initial legal targets", |b| {
        b.iter(|| all_legal_targets(black_box(&initial), Color::White))
    });
    let empty = Board::empty();
    c.bench_function("queen sweep empty board", |b| {
        b.iter(|| open_queen_sweep(black_box(&empty)))
    });
    c.bench_function("resolve all squares", |b| {
        b.iter(|| {
            Square::all()
                .map(|square| Square::resolve(black_box(&square.to_string())))
                .filter(Option::is_some)
                .count()
        })
    });
    c.bench_function("queen hunt game", |b| b.iter(queen_hunt));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
