//! Knead: quasi-elastic deformation of 3D voxel lattices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the knead sub-crates. For most users, adding `knead` as a single
//! dependency is sufficient.
//!
//! A grid of voxel positions (1 voxel = 1 mm) is deformed by displacing
//! one voxel and letting the displacement spread: voxels within the
//! request's influence radius move rigidly with the source, and everything
//! beyond follows as far as the material's stiffness allows, layer by
//! layer, until the wave is fully absorbed.
//!
//! # Quick start
//!
//! ```rust
//! use knead::prelude::*;
//!
//! // A 3×3×3 lattice at 1 mm spacing, ordered z, then y, then x.
//! let mut positions = Vec::new();
//! for z in 0..3 {
//!     for y in 0..3 {
//!         for x in 0..3 {
//!             positions.push(Point3::new(x as f64, y as f64, z as f64));
//!         }
//!     }
//! }
//! let grid = VoxelGrid::new(positions).unwrap();
//!
//! // Push the center voxel half a millimetre along +x. The material
//! // stiffness absorbs the whole displacement within one layer.
//! let request = DeformRequest::builder()
//!     .source(Point3::new(1.0, 1.0, 1.0))
//!     .displacement(Vec3::new(0.5, 0.0, 0.0))
//!     .stiffness(0.5)
//!     .build()
//!     .unwrap();
//!
//! let deformed = deform(&request, &grid).unwrap();
//! assert_eq!(deformed.positions()[13], Point3::new(1.5, 1.0, 1.0));
//! // Every other voxel already satisfied the constraint and kept its
//! // position.
//! assert_eq!(deformed.positions()[0], Point3::new(0.0, 0.0, 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `knead-core` | Geometry primitives and the voxel identity type |
//! | [`lattice`] | `knead-lattice` | Voxel grid, direction codes, position index |
//! | [`engine`] | `knead-deform` | Requests, constraints, and the propagator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Geometry primitives and identifiers (`knead-core`).
///
/// Contains [`types::Point3`], [`types::Vec3`], [`types::Axis`], and
/// [`types::VoxelIndex`].
pub use knead_core as types;

/// Voxel grid and neighbour topology (`knead-lattice`).
///
/// Provides [`lattice::VoxelGrid`], the [`lattice::Direction`] codes,
/// and the [`lattice::PositionIndex`] compiled for exact-match lookups.
pub use knead_lattice as lattice;

/// The deformation engine (`knead-deform`).
///
/// Provides [`engine::DeformRequest`], the directional constraint
/// functions, the sponsor-region builder, and the wavefront propagator.
pub use knead_deform as engine;

pub use knead_deform::deform;

/// Common imports for typical knead usage.
///
/// ```rust
/// use knead::prelude::*;
/// ```
pub mod prelude {
    // Geometry and identity
    pub use knead_core::{Axis, Point3, Vec3, VoxelIndex};

    // Lattice
    pub use knead_lattice::{
        Direction, NeighbourCandidate, NeighbourScope, PositionIndex, VoxelGrid,
    };

    // Errors
    pub use knead_deform::DeformError;
    pub use knead_lattice::LatticeError;

    // Engine
    pub use knead_deform::{deform, DeformRequest, SponsorEntry};
}
