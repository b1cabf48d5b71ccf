//! Core types for the knead deformation engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! geometric primitives shared by the lattice and deformation crates
//! (millimetre-scale points and vectors, axis selectors) and the stable
//! voxel identity type used for visited tracking.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod geometry;
pub mod id;

pub use geometry::{Axis, Point3, Vec3};
pub use id::VoxelIndex;
