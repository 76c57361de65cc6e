use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_pawns::rules::random_match;
use rust_pawns::{GameRng, PawnGame, PieceId, PlayerId, Position};

fn bench_random_match(c: &mut Criterion) {
    let game = PawnGame::default();

    c.bench_function("random_match", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| random_match(black_box(&game), &mut rng))
    });
}

fn bench_select_and_move(c: &mut Criterion) {
    let game = PawnGame::default();
    let state = game.create_initial_state(PlayerId::One);
    let piece: PieceId = "p1-2".parse().unwrap();

    c.bench_function("select_and_move", |b| {
        b.iter(|| {
            let selected = game.select_piece(black_box(&state), piece);
            game.move_piece(&selected, Position::new(3, 2))
        })
    });
}

criterion_group!(benches, bench_random_match, bench_select_and_move);
criterion_main!(benches);
