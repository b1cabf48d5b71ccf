//! The [`VoxelGrid`]: ordered voxel positions with cube-bound neighbour
//! enumeration.

use crate::error::LatticeError;
use crate::neighbour::{NeighbourCandidate, NeighbourScope};
use knead_core::{Point3, VoxelIndex};
use smallvec::SmallVec;

/// An ordered, fixed-size collection of voxel positions in millimetres.
///
/// Logically a cube of side `N = count^(1/3)` with physical spacing `step`
/// between axis-adjacent voxels; the spacing is a property of each request,
/// not of the grid, so it is passed to the methods that need it. A grid is
/// never resized: deformation produces a new grid of identical length and
/// ordering.
///
/// Deformed positions may leave the cube bound; the bound only gates
/// which lattice points count as neighbours of an undeformed voxel.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    positions: Vec<Point3>,
}

impl VoxelGrid {
    /// Create a grid from an ordered list of positions.
    ///
    /// Returns `Err(LatticeError::EmptyGrid)` if `positions` is empty.
    /// Duplicate positions are accepted here (a deformed grid may contain
    /// coincident voxels) and rejected only when an exact-match
    /// [`PositionIndex`](crate::PositionIndex) is compiled from the grid.
    pub fn new(positions: Vec<Point3>) -> Result<Self, LatticeError> {
        if positions.is_empty() {
            return Err(LatticeError::EmptyGrid);
        }
        Ok(Self { positions })
    }

    /// Number of voxels in the grid.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All positions in grid order.
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Position of the voxel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Indices obtained from a
    /// [`PositionIndex`](crate::PositionIndex) compiled from this grid are
    /// always in bounds.
    pub fn position(&self, index: VoxelIndex) -> Point3 {
        self.positions[index.0]
    }

    /// Upper cube bound on each axis: `ceil(count^(1/3) * step)`.
    ///
    /// A lattice point is inside the cube when each coordinate lies in
    /// `[0, extent)`.
    pub fn extent(&self, step: f64) -> f64 {
        // powf with the rounded-down 1/3 exponent lands a hair below the
        // exact root for perfect cubes; ceil must never see a value that
        // crept above the integer side length.
        ((self.positions.len() as f64).powf(1.0 / 3.0) * step).ceil()
    }

    /// Enumerate the geometric neighbours of `origin` at spacing `step`.
    ///
    /// For each direction in the scope's fixed order, the candidate one
    /// `step` away is included unless it falls outside the cube bound on
    /// the moving axis: positive directions must stay below
    /// [`extent`](VoxelGrid::extent), negative directions at or above zero.
    ///
    /// Candidates are geometric only: whether a candidate is an actual
    /// lattice point of this grid, and whether a traversal has already
    /// claimed it, is resolved by the caller.
    pub fn neighbours(
        &self,
        origin: &Point3,
        step: f64,
        scope: NeighbourScope,
    ) -> SmallVec<[NeighbourCandidate; 6]> {
        let extent = self.extent(step);
        let mut result = SmallVec::new();
        for &direction in scope.directions() {
            let moved = origin.axis(direction.axis()) + direction.sign() * step;
            let inside = if direction.sign() > 0.0 {
                moved < extent
            } else {
                moved >= 0.0
            };
            if !inside {
                continue;
            }
            result.push(NeighbourCandidate {
                position: *origin + direction.offset(step),
                direction,
            });
        }
        result
    }
}
