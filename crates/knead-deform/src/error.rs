//! Error types for the deformation engine.

use knead_core::Point3;
use knead_lattice::LatticeError;
use std::error::Error;
use std::fmt;

/// Errors from a [`deform`](crate::deform) call.
///
/// The engine never returns partial results: any failure, whether a
/// malformed request or a lookup miss mid-traversal, aborts the whole
/// call and leaves the input grid untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DeformError {
    /// The requested source position is not an element of the grid.
    SourceNotFound {
        /// The position named by the request.
        position: Point3,
    },
    /// A lattice operation failed: the grid could not be indexed, or a
    /// neighbour candidate did not resolve to a lattice point.
    Lattice(LatticeError),
}

impl fmt::Display for DeformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceNotFound { position } => {
                write!(f, "source position {position} is not in the grid")
            }
            Self::Lattice(err) => write!(f, "lattice error: {err}"),
        }
    }
}

impl Error for DeformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(err) => Some(err),
            Self::SourceNotFound { .. } => None,
        }
    }
}

impl From<LatticeError> for DeformError {
    fn from(err: LatticeError) -> Self {
        Self::Lattice(err)
    }
}
