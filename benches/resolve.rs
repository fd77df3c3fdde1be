use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fiery_dragons::board::{Board, CaveId, Dragon, DragonId, Position};
use fiery_dragons::core::{GameConfig, PlayerId};
use fiery_dragons::game::{play_out, Game};
use fiery_dragons::movement::{MoveRule, Movement};
use fiery_dragons::GameRng;

/// A 24-tile board with dragons on every tile from 1 to `crowd`.
fn crowded(crowd: usize) -> (Board, Vec<Dragon>) {
    let mut board = Board::new(&GameConfig::new(2)).unwrap();
    let dragons = (1..=crowd)
        .map(|tile| {
            let id = tile as u32;
            let mut d = Dragon::new(DragonId(id), PlayerId(0), CaveId(0), 20);
            d.move_to(Position::Volcano(tile), &mut board);
            d
        })
        .collect();
    (board, dragons)
}

fn bench_resolve_forward(c: &mut Criterion) {
    let (board, dragons) = crowded(8);
    c.bench_function("resolve_forward", |b| {
        b.iter(|| Movement::resolve(MoveRule::Forward, black_box(&dragons[3]), black_box(2), &board))
    });
}

fn bench_special_backward_slide(c: &mut Criterion) {
    let (board, dragons) = crowded(20);
    let mover = &dragons[19];
    c.bench_function("special_backward_slide_20", |b| {
        b.iter_batched(
            || (board.clone(), mover.clone()),
            |(mut board, mut dragon)| {
                Movement::resolve(MoveRule::SpecialBackward, &dragon, 1, &board)
                    .execute(&mut dragon, &mut board)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_teleport_scan(c: &mut Criterion) {
    let (board, dragons) = crowded(23);
    c.bench_function("teleport_scan_23", |b| {
        b.iter(|| Movement::resolve(MoveRule::TeleportToCave, black_box(&dragons[22]), 1, &board))
    });
}

fn bench_playout(c: &mut Criterion) {
    let game = Game::new(GameConfig::new(4).with_seed(3)).unwrap();
    c.bench_function("playout_4_players", |b| {
        b.iter_batched(
            || (game.clone(), GameRng::new(3)),
            |(mut game, mut rng)| play_out(&mut game, &mut rng, 2_000),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_resolve_forward,
    bench_special_backward_slide,
    bench_teleport_scan,
    bench_playout
);
criterion_main!(benches);
