use pcg_blocks_core::prelude::*;
use pcg_blocks_storage::{StandardPcgSdf, StandardPcgVoxels};

/// `count` spheres of `radius` spaced `spacing` apart along +X, starting at the origin.
pub fn sphere_row_sdf(count: usize, spacing: f32, radius: f32) -> StandardPcgSdf {
    let mut sdf = StandardPcgSdf::new(count);
    for i in 0..count {
        sdf.add_sphere(i as f32 * spacing, 0.0, 0.0, radius);
    }

    sdf
}

/// A cubic grid centered on the origin. Cells whose world position is at most `edge_length / 2 - 1`
/// from the origin hold `inner_value`, the rest hold `outer_value`. Returns the grid and that
/// radius.
pub fn sphere_voxel_grid(
    edge_length: usize,
    inner_value: i32,
    outer_value: i32,
) -> (StandardPcgVoxels, f32) {
    let array_radius = (edge_length / 2) as f32;
    let sphere_radius = array_radius - 1.0;
    let mut voxels = StandardPcgVoxels::new(
        edge_length,
        edge_length,
        edge_length,
        Point3f::fill(-array_radius),
    );

    for x in 0..edge_length {
        for y in 0..edge_length {
            for z in 0..edge_length {
                let p = voxels
                    .layout()
                    .world_position(x as f32, y as f32, z as f32);
                let value = if p.norm_squared() <= sphere_radius * sphere_radius {
                    inner_value
                } else {
                    outer_value
                };
                voxels.set(x, y, z, value);
            }
        }
    }

    (voxels, sphere_radius)
}
