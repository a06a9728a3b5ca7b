use pcg_blocks_core::prelude::*;
use pcg_blocks_storage::{component::*, prelude::*};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn points_write_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("points_write_positions");
    for size in POINT_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_setup(
                || StandardPcgPoints::with_extensions(size, 2),
                |mut points| {
                    points.process(
                        &mut |layout: &PointLayout, buffer: &mut [f32], start: usize, end: usize| {
                            for i in layout.records(start, end) {
                                apply_position(buffer, i, 1.0, 2.0, 3.0);
                                apply_is_visible(buffer, i, true);
                            }
                        },
                    );
                    black_box(points);
                },
            );
        });
    }
    group.finish();
}

fn points_read_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("points_read_positions");
    for size in POINT_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_setup(
                || StandardPcgPoints::new(size),
                |points| {
                    let mut p = Point3f::ZERO;
                    for index in 0..points.count() {
                        black_box(points.position(index, &mut p));
                    }
                },
            );
        });
    }
    group.finish();
}

fn voxels_process_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("voxels_process_positions");
    for size in GRID_SIZES.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_setup(
                || StandardPcgVoxels::new(size, size, size, Point3f::ZERO),
                |mut voxels| {
                    voxels.process_positions(
                        &mut |_: &VoxelGridLayout,
                              buffer: &mut [i32],
                              x: f32,
                              _y: f32,
                              _z: f32,
                              index: usize| {
                            buffer[index] = x as i32;
                        },
                    );
                    black_box(voxels);
                },
            );
        });
    }
    group.finish();
}

fn sdf_get_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("sdf_get_min");
    for size in SPHERE_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_with_setup(
                || {
                    let mut sdf = StandardPcgSdf::new(size);
                    for i in 0..size {
                        sdf.add_sphere(i as f32 * 4.0, 0.0, 0.0, 1.0);
                    }

                    sdf
                },
                // Outside every sphere, so no early exit.
                |sdf| black_box(sdf.get_min(0.0, 10.0, 0.0)),
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    points_write_positions,
    points_read_positions,
    voxels_process_positions,
    sdf_get_min
);
criterion_main!(benches);

const POINT_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];
const GRID_SIZES: [usize; 3] = [16, 32, 64];
const SPHERE_COUNTS: [usize; 3] = [8, 64, 512];
