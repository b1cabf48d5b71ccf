//! The [`PositionIndex`]: exact-match position lookup compiled from a grid.
//!
//! The deformation engine resolves every neighbour candidate back to its
//! voxel index, once per examined voxel. A linear scan per lookup would
//! make each wavefront step O(n); compiling the grid into a keyed map once
//! per call keeps the exact-match contract while making each lookup O(1).

use crate::error::LatticeError;
use crate::grid::VoxelGrid;
use indexmap::IndexMap;
use knead_core::{Point3, VoxelIndex};

/// Exact-match lookup table from position to [`VoxelIndex`].
///
/// Keys are the raw bit patterns of the three coordinates, so a hit
/// requires exact equality on every axis; there is no tolerance, and a
/// position one ulp off a lattice point is a miss. The only normalization
/// applied is `-0.0` → `0.0`, which keeps the keying consistent with
/// `f64` equality for the one value pair where bits and equality disagree.
#[derive(Debug, Clone)]
pub struct PositionIndex {
    map: IndexMap<[u64; 3], VoxelIndex>,
}

impl PositionIndex {
    /// Compile the lookup table for `grid`.
    ///
    /// Returns `Err(LatticeError::DuplicatePosition)` if two voxels share a
    /// position: exact-match lookup must resolve to a unique index.
    pub fn build(grid: &VoxelGrid) -> Result<Self, LatticeError> {
        let mut map = IndexMap::with_capacity(grid.len());
        for (i, position) in grid.positions().iter().enumerate() {
            let index = VoxelIndex(i);
            if let Some(first) = map.insert(key(position), index) {
                return Err(LatticeError::DuplicatePosition {
                    position: *position,
                    first,
                    second: index,
                });
            }
        }
        Ok(Self { map })
    }

    /// Resolve a position to its unique voxel index.
    ///
    /// Returns `Err(LatticeError::PositionNotFound)` on a miss, never a
    /// default index. Callers must only query lattice points derived from
    /// positions known to be in the grid.
    pub fn find(&self, position: &Point3) -> Result<VoxelIndex, LatticeError> {
        self.map
            .get(&key(position))
            .copied()
            .ok_or(LatticeError::PositionNotFound {
                position: *position,
            })
    }

    /// Number of indexed positions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Always returns `false` — the source grid is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Bit-pattern key for a position, with `-0.0` normalized to `0.0`.
fn key(position: &Point3) -> [u64; 3] {
    [norm(position.x), norm(position.y), norm(position.z)]
}

fn norm(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}
