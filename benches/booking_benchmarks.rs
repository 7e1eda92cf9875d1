//! Micro-benchmarks for the derived-state hot paths: pricing totals,
//! selection churn, and the per-frame grid classification sweep.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use booking_engine::{
    all_seats, load_show, seat_price, total_price, BookingSession, MovieCatalog, SeatId,
};

fn fresh_session() -> BookingSession {
    let catalog = MovieCatalog::builtin();
    BookingSession::new(load_show(&catalog, "m1", "show-1", None).unwrap())
}

fn bench_total_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("TotalPrice");

    for size in [8, 56, 140] {
        let seats: Vec<SeatId> = all_seats().take(size).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &seats, |b, seats| {
            b.iter(|| black_box(total_price(black_box(seats), 100_000)))
        });
    }
    group.finish();
}

fn bench_toggle_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("SelectionToggle");

    for toggles in [100usize, 1_000] {
        group.throughput(Throughput::Elements(toggles as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(toggles),
            &toggles,
            |b, &toggles| {
                b.iter_batched(
                    || {
                        let session = fresh_session();
                        let free: Vec<SeatId> = all_seats()
                            .filter(|s| !session.occupied().is_occupied(*s))
                            .collect();
                        let mut rng = rand::thread_rng();
                        let sequence: Vec<SeatId> = (0..toggles)
                            .map(|_| free[rng.gen_range(0..free.len())])
                            .collect();
                        (session, sequence)
                    },
                    |(mut session, sequence)| {
                        for seat in sequence {
                            // Limit rejections are part of the measured path.
                            let _ = session.toggle_seat(seat);
                        }
                        black_box(session.selected().len())
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_grid_sweep(c: &mut Criterion) {
    // What the renderer derives each frame: kind and price for all 140 seats.
    let mut group = c.benchmark_group("GridSweep");
    group.throughput(Throughput::Elements(140));
    group.bench_function("classify_and_price", |b| {
        b.iter(|| {
            let total: u64 = all_seats()
                .map(|s| seat_price(s, black_box(100_000)))
                .sum();
            black_box(total)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_total_price, bench_toggle_churn, bench_grid_sweep);
criterion_main!(benches);
