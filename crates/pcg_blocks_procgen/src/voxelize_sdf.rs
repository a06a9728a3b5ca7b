use pcg_blocks_storage::{StandardPcgSdf, VoxelGridLayout, VoxelPositionProcessor};

/// Writes `fill` into every cell whose world position has a distance estimate from `sdf` of at most
/// `threshold`. Other cells keep their value, so several passes can be layered onto one grid.
#[derive(Clone, Copy, Debug)]
pub struct VoxelizeSdf<'a> {
    sdf: &'a StandardPcgSdf,
    fill: i32,
    threshold: f32,
}

impl<'a> VoxelizeSdf<'a> {
    pub fn new(sdf: &'a StandardPcgSdf, fill: i32, threshold: f32) -> Self {
        Self {
            sdf,
            fill,
            threshold,
        }
    }
}

impl VoxelPositionProcessor for VoxelizeSdf<'_> {
    #[inline]
    fn process(
        &mut self,
        layout: &VoxelGridLayout,
        buffer: &mut [i32],
        x: f32,
        y: f32,
        z: f32,
        index: usize,
    ) {
        let p = layout.world_position(x, y, z);
        if self.sdf.get_min_point(&p) <= self.threshold {
            buffer[index] = self.fill;
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use pcg_blocks_core::prelude::*;
    use pcg_blocks_storage::StandardPcgVoxels;
    use pretty_assertions::assert_eq;
    use utilities::data_sets::sphere_voxel_grid;

    #[test]
    fn voxelized_sphere_matches_reference_grid() {
        for &edge_length in &[4, 8, 16] {
            let (expected, radius) = sphere_voxel_grid(edge_length, 7, 0);

            let mut sdf = StandardPcgSdf::new(1);
            sdf.add_sphere(0.0, 0.0, 0.0, radius);

            let mut voxels = StandardPcgVoxels::with_layout(*expected.layout());
            voxels.process_positions(&mut VoxelizeSdf::new(&sdf, 7, 0.0));

            assert_eq!(voxels, expected);
        }
    }

    #[test]
    fn passes_layer_without_clearing() {
        let mut near = StandardPcgSdf::new(1);
        near.add_sphere(0.0, 0.0, 0.0, 1.5);
        let mut far = StandardPcgSdf::new(1);
        far.add_sphere(3.0, 0.0, 0.0, 1.0);

        let mut voxels = StandardPcgVoxels::new(5, 1, 1, Point3f::ZERO);
        voxels.process_positions(&mut VoxelizeSdf::new(&near, 1, 0.0));
        voxels.process_positions(&mut VoxelizeSdf::new(&far, 2, 0.0));

        assert_eq!(voxels.values_slice(), &[1, 1, 2, 2, 2]);
    }

    #[test]
    fn origin_shifts_the_sampled_positions() {
        let mut sdf = StandardPcgSdf::new(1);
        sdf.add_sphere(10.0, 10.0, 10.0, 0.5);

        let mut voxels = StandardPcgVoxels::new(3, 3, 3, Point3f::fill(9.0));
        voxels.process_positions(&mut VoxelizeSdf::new(&sdf, -1, 0.0));

        assert_eq!(voxels.get(1, 1, 1), -1);
        assert_eq!(voxels.values_slice().iter().filter(|&&v| v == -1).count(), 1);
    }
}
