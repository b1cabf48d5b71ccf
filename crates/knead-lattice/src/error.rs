//! Error types for lattice operations.

use knead_core::{Point3, VoxelIndex};
use std::fmt;

/// Errors arising from grid construction or position lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Attempted to construct a grid with zero voxels.
    EmptyGrid,
    /// Two voxels share the same position, making exact-match lookup
    /// ambiguous.
    DuplicatePosition {
        /// The repeated position.
        position: Point3,
        /// Index of the first occurrence.
        first: VoxelIndex,
        /// Index of the second occurrence.
        second: VoxelIndex,
    },
    /// A queried position is not a lattice point of the grid.
    ///
    /// Lookups are exact-match preconditions, so this is a caller bug:
    /// query positions must be derived by offsetting known lattice points.
    PositionNotFound {
        /// The position that failed to resolve.
        position: Point3,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must contain at least one voxel"),
            Self::DuplicatePosition {
                position,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate position {position} at indices {first} and {second}"
                )
            }
            Self::PositionNotFound { position } => {
                write!(f, "position {position} not found in grid")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
