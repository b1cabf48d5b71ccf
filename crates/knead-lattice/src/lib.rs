//! Spatial layer for the knead deformation engine.
//!
//! Defines the [`VoxelGrid`], an ordered, fixed-size collection of voxel
//! positions that is logically a cube, together with the [`Direction`] codes of
//! the six axis-aligned neighbour offsets, geometric neighbour enumeration,
//! and the [`PositionIndex`] compiled from a grid for O(1) exact-match
//! lookups during traversal.
//!
//! The lattice layer is pure topology: it never tracks which voxels a
//! traversal has already claimed. Visited filtering belongs to the
//! deformation engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;
pub mod index;
pub mod neighbour;

pub use direction::Direction;
pub use error::LatticeError;
pub use grid::VoxelGrid;
pub use index::PositionIndex;
pub use neighbour::{NeighbourCandidate, NeighbourScope};
