//! Neighbour candidate records and enumeration scope.

use crate::direction::Direction;
use knead_core::Point3;

/// Which of the six directions a neighbour enumeration covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighbourScope {
    /// Only the four x/y-plane directions. Used when collecting the rigid
    /// sponsor region, which spreads across the surface, not into depth.
    Surface,
    /// All six directions, including down and up.
    Full,
}

impl NeighbourScope {
    /// The directions covered by this scope, in fixed enumeration order.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            NeighbourScope::Surface => &Direction::SURFACE,
            NeighbourScope::Full => &Direction::ALL,
        }
    }
}

/// A geometric neighbour produced by enumeration: the lattice position one
/// `step` away from the origin voxel, plus the direction it was reached
/// from.
///
/// The direction code lives here and only here; once the deformation engine
/// resolves the candidate to a [`VoxelIndex`](knead_core::VoxelIndex), it
/// carries the index on a separate record instead of reusing this field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeighbourCandidate {
    /// Undeformed lattice position of the neighbour.
    pub position: Point3,
    /// Direction from the origin voxel to this neighbour.
    pub direction: Direction,
}
