//! The [`VoxelIndex`] identity type.

use std::fmt;

/// Position of a voxel within a grid's ordering.
///
/// The index is the stable identity of a voxel: positions change as the
/// material deforms, indices never do. Visited tracking and output writes
/// are keyed on this type rather than on coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VoxelIndex(pub usize);

impl fmt::Display for VoxelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VoxelIndex {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
