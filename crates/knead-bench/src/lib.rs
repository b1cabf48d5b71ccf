//! Benchmark profiles for the knead deformation engine.
//!
//! Provides pre-built grids and requests shared by the criterion benches:
//!
//! - [`reference_grid`]: a cube lattice of the given side at 1 mm spacing
//! - [`reference_request`]: a center push absorbed after a few layers
//! - [`rigid_request`]: a zero-stiffness push that floods the whole grid

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use knead_core::{Point3, Vec3};
use knead_deform::DeformRequest;
use knead_lattice::VoxelGrid;

/// Build a `side³` cube lattice at 1 mm spacing, ordered z, then y, then x.
pub fn reference_grid(side: u32) -> VoxelGrid {
    let mut positions = Vec::with_capacity((side as usize).pow(3));
    for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                positions.push(Point3::new(f64::from(x), f64::from(y), f64::from(z)));
            }
        }
    }
    VoxelGrid::new(positions).expect("reference grid is non-empty")
}

/// A central lattice position of a reference grid.
pub fn grid_center(side: u32) -> Point3 {
    let mid = f64::from(side / 2);
    Point3::new(mid, mid, mid)
}

/// A 1 mm center push at stiffness 0.25: the wave dies after four layers,
/// exercising the damped steady-state path.
pub fn reference_request(side: u32) -> DeformRequest {
    DeformRequest::builder()
        .source(grid_center(side))
        .displacement(Vec3::new(1.0, 0.0, 0.0))
        .influence_radius(1)
        .stiffness(0.25)
        .build()
        .expect("reference request is valid")
}

/// A rigid center push: stiffness 0 floods every voxel in the grid, the
/// worst case for the propagator.
pub fn rigid_request(side: u32) -> DeformRequest {
    DeformRequest::builder()
        .source(grid_center(side))
        .displacement(Vec3::new(1.0, 0.0, 0.0))
        .build()
        .expect("rigid request is valid")
}
