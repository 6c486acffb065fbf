use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use morphblob::animation::{Choreography, BreakPhase};
use morphblob::options::BlobOptions;
use morphblob::scene::{MainBlob, MeshId};

fn main_blob_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("main_blob_update");

    for segments in [32, 80, 128] {
        let options = BlobOptions {
            segments,
            ..BlobOptions::default()
        };
        let mut blob = MainBlob::build(MeshId(0), &options);
        let mut t = 0.0_f32;

        group.bench_function(format!("{segments}_segments"), |b| {
            b.iter(|| {
                t += 0.008;
                blob.update(&options, black_box(t), 0.85, Vec2::ZERO);
            });
        });
    }
    group.finish();
}

fn choreography_benchmark(c: &mut Criterion) {
    let choreography = Choreography::default();
    c.bench_function("satellite_presence_table", |b| {
        b.iter(|| {
            for phase in BreakPhase::ALL {
                for i in 0..5 {
                    let _ = black_box(choreography.satellite_presence(
                        phase,
                        black_box(0.37),
                        i,
                    ));
                }
            }
        });
    });
}

criterion_group!(benches, main_blob_update_benchmark, choreography_benchmark);
criterion_main!(benches);
