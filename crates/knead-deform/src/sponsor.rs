//! The sponsor-region builder: layered surface BFS around the source.

use crate::error::DeformError;
use indexmap::IndexSet;
use knead_core::{Point3, Vec3, VoxelIndex};
use knead_lattice::{NeighbourScope, PositionIndex, VoxelGrid};

/// A voxel whose position has been fixed and that may drag unvisited
/// neighbours during propagation.
///
/// `origin_index` identifies the voxel in the *original* grid ordering;
/// `position` is where it sits now. The two never swap roles; a
/// neighbour's direction code lives on
/// [`NeighbourCandidate`](knead_lattice::NeighbourCandidate) instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SponsorEntry {
    /// Index of the voxel in the original grid.
    pub origin_index: VoxelIndex,
    /// Current (displaced) position of the voxel.
    pub position: Point3,
}

/// Collect the rigid anchor region around the source voxel.
///
/// Performs a layer-by-layer breadth-first expansion over surface (x/y
/// plane) neighbours, `radius` layers deep; layer 0 is the source alone.
/// Every voxel discovered is marked visited immediately, so a voxel found
/// at layer *k* cannot be rediscovered at layer *k + 1*. The expansion
/// stops early if a layer adds nothing (the surface is exhausted).
///
/// All collected voxels, the source included, are then translated by the
/// full `displacement`, rigid-body style: distance from the source does
/// not attenuate the anchor region.
///
/// Returns the sponsor list in discovery order, paired with the visited
/// set seeded with every sponsor index. Stiffness plays no role here; the
/// anchor region moves unconditionally.
pub fn build_sponsor_region(
    grid: &VoxelGrid,
    index: &PositionIndex,
    source: VoxelIndex,
    displacement: Vec3,
    step: f64,
    radius: u32,
) -> Result<(Vec<SponsorEntry>, IndexSet<VoxelIndex>), DeformError> {
    let mut visited: IndexSet<VoxelIndex> = IndexSet::new();
    visited.insert(source);

    let mut region = vec![source];
    let mut frontier = vec![source];
    for _ in 0..radius {
        let mut next_layer = Vec::new();
        for &voxel in &frontier {
            let origin = grid.position(voxel);
            for candidate in grid.neighbours(&origin, step, NeighbourScope::Surface) {
                let neighbour = index.find(&candidate.position)?;
                if visited.insert(neighbour) {
                    next_layer.push(neighbour);
                }
            }
        }
        if next_layer.is_empty() {
            break;
        }
        region.extend(next_layer.iter().copied());
        frontier = next_layer;
    }

    let sponsors = region
        .into_iter()
        .map(|voxel| SponsorEntry {
            origin_index: voxel,
            position: grid.position(voxel) + displacement,
        })
        .collect();

    Ok((sponsors, visited))
}
