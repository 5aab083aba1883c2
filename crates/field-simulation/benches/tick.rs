//! Frame cost at the particle cap.
//!
//! Linking is quadratic in the population, so the capped 100-particle field is the
//! worst case a frame can hit regardless of window size.
//!
//! Run with: `cargo bench -p field-simulation`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use field_simulation::{FieldParams, ParticleField, RecordingCanvas};
use rand::{rngs::StdRng, SeedableRng};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for (width, height) in [(300, 300), (1280, 720), (3840, 2160)] {
        let mut field = ParticleField::with_rng(
            FieldParams::default(),
            width,
            height,
            StdRng::seed_from_u64(0xF1E1D),
        );
        let mut canvas = RecordingCanvas::new(width, height);

        group.bench_function(format!("{}x{} ({} particles)", width, height, field.len()), |b| {
            b.iter(|| black_box(field.tick(&mut canvas)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
