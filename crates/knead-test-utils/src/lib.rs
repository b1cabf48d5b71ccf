//! Test fixtures for knead development.
//!
//! Provides cube-lattice builders shared by unit, integration, and
//! property tests, plus small helpers for addressing voxels by their
//! integer lattice coordinates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use knead_core::Point3;
use knead_lattice::VoxelGrid;

/// Build a `side³` cube lattice with the given spacing.
///
/// Positions are ordered z, then y, then x: the flat index of lattice
/// coordinate `(x, y, z)` is `z * side² + y * side + x` (see
/// [`flat_index`]).
pub fn cube_grid(side: u32, step: f64) -> VoxelGrid {
    let mut positions = Vec::with_capacity((side as usize).pow(3));
    for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                positions.push(Point3::new(
                    f64::from(x) * step,
                    f64::from(y) * step,
                    f64::from(z) * step,
                ));
            }
        }
    }
    VoxelGrid::new(positions).expect("cube grid is non-empty")
}

/// Flat index of lattice coordinate `(x, y, z)` in a [`cube_grid`] of the
/// given side.
pub fn flat_index(side: u32, x: u32, y: u32, z: u32) -> usize {
    (z as usize * side as usize + y as usize) * side as usize + x as usize
}

/// Center position of an odd-sided [`cube_grid`].
pub fn center(side: u32, step: f64) -> Point3 {
    let mid = f64::from(side / 2) * step;
    Point3::new(mid, mid, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_matches_grid_order() {
        let g = cube_grid(3, 1.0);
        for z in 0..3 {
            for y in 0..3 {
                for x in 0..3 {
                    let i = flat_index(3, x, y, z);
                    assert_eq!(
                        g.positions()[i],
                        Point3::new(f64::from(x), f64::from(y), f64::from(z))
                    );
                }
            }
        }
    }

    #[test]
    fn center_of_odd_cube() {
        assert_eq!(center(3, 1.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(center(5, 2.0), Point3::new(4.0, 4.0, 4.0));
    }
}
