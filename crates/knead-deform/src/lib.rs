//! Displacement-propagation engine for quasi-elastic voxel lattices.
//!
//! Given a grid of voxel positions and a request that displaces one voxel
//! (the source) by a vector, the engine computes the deformed grid in two
//! stages:
//!
//! 1. The **sponsor-region builder** collects the voxels within
//!    `influence_radius` surface layers of the source and moves them
//!    rigidly by the full displacement: the anchor region.
//! 2. The **propagator** spreads the displacement outward as a FIFO
//!    wavefront over full 3D neighbours. Each examined voxel is clamped
//!    toward its sponsor by a direction-specific constraint; a voxel whose
//!    position already satisfies the constraint absorbs the wave and
//!    propagates no further.
//!
//! Each voxel is examined at most once per call, so the wave terminates on
//! any finite grid. The whole computation is deterministic and allocates a
//! fresh output grid per call.
//!
//! # Quick start
//!
//! ```
//! use knead_core::{Point3, Vec3};
//! use knead_deform::{deform, DeformRequest};
//! use knead_lattice::VoxelGrid;
//!
//! // A 2×2×2 lattice at 1 mm spacing.
//! let mut positions = Vec::new();
//! for z in 0..2 {
//!     for y in 0..2 {
//!         for x in 0..2 {
//!             positions.push(Point3::new(x as f64, y as f64, z as f64));
//!         }
//!     }
//! }
//! let grid = VoxelGrid::new(positions).unwrap();
//!
//! let request = DeformRequest::builder()
//!     .source(Point3::new(0.0, 0.0, 0.0))
//!     .displacement(Vec3::new(0.25, 0.0, 0.0))
//!     .stiffness(0.5)
//!     .build()
//!     .unwrap();
//!
//! let deformed = deform(&request, &grid).unwrap();
//! assert_eq!(deformed.len(), grid.len());
//! assert_eq!(deformed.positions()[0], Point3::new(0.25, 0.0, 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constraint;
pub mod error;
pub mod propagate;
pub mod request;
pub mod sponsor;

pub use constraint::deform_neighbour;
pub use error::DeformError;
pub use propagate::{deform, propagate};
pub use request::{DeformRequest, DeformRequestBuilder};
pub use sponsor::{build_sponsor_region, SponsorEntry};
