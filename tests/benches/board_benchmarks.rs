//! # Verifiable-2048 Benchmarks
//!
//! | Component | Operation | Expectation |
//! |-----------|-----------|-------------|
//! | Board engine | `slide` | constant cost regardless of board contents |
//! | Board engine | `add_tile` | constant cost regardless of target |
//! | Player state | signed move | dominated by Ed25519 verification |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ed25519_dalek::SigningKey;
use g48_01_board_engine::{add_tile, slide, Direction, PackedBoard, TilePosition};
use g48_02_player_state::{CallHandler, ControllerConfig, GameController, InMemoryPlayerStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{GameCall, SignedCall};
use std::sync::Arc;

fn random_boards(count: usize) -> Vec<PackedBoard> {
    let mut rng = StdRng::seed_from_u64(2048);
    (0..count)
        .map(|_| {
            let mut grid = [[0u8; 4]; 4];
            for cell in grid.iter_mut().flatten() {
                *cell = if rng.gen_ratio(1, 3) { 0 } else { rng.gen_range(1..=12) };
            }
            PackedBoard::from_grid(&grid)
        })
        .collect()
}

fn bench_slide(c: &mut Criterion) {
    let mut group = c.benchmark_group("g48-01-slide");
    let boards = random_boards(1_024);

    // constant shape: an empty board should cost the same as a full one
    let fixtures = [
        ("empty", PackedBoard::EMPTY),
        ("full", PackedBoard::from_raw(0x1234_4321_1234_4321)),
    ];
    for (name, board) in fixtures {
        for direction in Direction::ALL {
            group.bench_with_input(
                BenchmarkId::new(name, direction),
                &board,
                |b, board| b.iter(|| slide(black_box(*board), black_box(direction))),
            );
        }
    }

    group.throughput(Throughput::Elements(boards.len() as u64));
    group.bench_function("random_batch_left", |b| {
        b.iter(|| {
            boards
                .iter()
                .map(|board| slide(*board, Direction::Left).raw())
                .fold(0u64, |acc, raw| acc ^ raw)
        })
    });

    group.finish();
}

fn bench_add_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("g48-01-add-tile");
    let board = random_boards(1)[0];

    for (row, col) in [(0, 0), (3, 3)] {
        let pos = TilePosition::new(row, col).unwrap();
        group.bench_with_input(
            BenchmarkId::new("cell", format!("{row},{col}")),
            &pos,
            |b, pos| b.iter(|| add_tile(black_box(board), black_box(*pos))),
        );
    }

    group.finish();
}

fn bench_signed_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("g48-02-signed-call");
    let key = SigningKey::from_bytes(&[7; 32]);
    let call = SignedCall::sign(&key, GameCall::MoveLeft);

    for verify_signatures in [true, false] {
        let handler = CallHandler::new(
            GameController::new(Arc::new(InMemoryPlayerStore::new())),
            ControllerConfig { verify_signatures },
        );
        let label = if verify_signatures { "verified" } else { "unverified" };
        group.bench_function(label, |b| b.iter(|| handler.handle(black_box(&call)).is_ok()));
    }

    group.finish();
}

criterion_group!(benches, bench_slide, bench_add_tile, bench_signed_move);
criterion_main!(benches);
