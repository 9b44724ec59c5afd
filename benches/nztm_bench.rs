use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rayon::prelude::*;

use nztm::proj::common::{foot_point_latitude, meridian_arc};
use nztm::proj::config::NZTM;
use nztm::proj::ellipsoid::GRS80;
use nztm::proj::transverse_mercator::TransverseMercator;
use nztm::{convert_geodesic_to_projected, convert_projected_to_geodesic};

/// Regular lat/lon grid over the NZ mainland.
fn make_grid(size: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let lat = -47.5 + 13.0 * row as f64 / size as f64;
            let lon = 166.5 + 12.0 * col as f64 / size as f64;
            points.push((lat, lon));
        }
    }
    points
}

fn bench_series(c: &mut Criterion) {
    let phi = (-41.0_f64).to_radians();
    let arc = meridian_arc(&GRS80, phi);

    c.bench_function("meridian_arc", |b| {
        b.iter(|| black_box(meridian_arc(&GRS80, black_box(phi))))
    });
    c.bench_function("foot_point_latitude", |b| {
        b.iter(|| black_box(foot_point_latitude(&GRS80, black_box(arc))))
    });
}

fn bench_single_point(c: &mut Criterion) {
    c.bench_function("geodesic_to_projected", |b| {
        b.iter(|| black_box(convert_geodesic_to_projected(black_box(-41.2865), black_box(174.7762))))
    });
    c.bench_function("projected_to_geodesic", |b| {
        b.iter(|| {
            black_box(convert_projected_to_geodesic(
                black_box(1_748_735.553),
                black_box(5_427_916.479),
            ))
        })
    });
    c.bench_function("build_projection", |b| {
        b.iter(|| black_box(TransverseMercator::from_config(black_box(&NZTM)).unwrap()))
    });
}

fn bench_grid(c: &mut Criterion) {
    let sizes = [64, 256, 1024];
    let mut group = c.benchmark_group("grid");
    for &size in &sizes {
        let grid = make_grid(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_function(format!("sequential_{size}x{size}"), |b| {
            b.iter(|| {
                let out: Vec<_> = grid
                    .iter()
                    .map(|&(lat, lon)| convert_geodesic_to_projected(lat, lon))
                    .collect();
                black_box(out)
            });
        });

        group.bench_function(format!("rayon_{size}x{size}"), |b| {
            b.iter(|| {
                let out: Vec<_> = grid
                    .par_iter()
                    .map(|&(lat, lon)| convert_geodesic_to_projected(lat, lon))
                    .collect();
                black_box(out)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_series, bench_single_point, bench_grid);
criterion_main!(benches);
