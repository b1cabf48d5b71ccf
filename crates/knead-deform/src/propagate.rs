//! The deformation propagator: FIFO wavefront with visit-once damping.

use crate::constraint::deform_neighbour;
use crate::error::DeformError;
use crate::request::DeformRequest;
use crate::sponsor::{build_sponsor_region, SponsorEntry};
use indexmap::IndexSet;
use knead_core::{Point3, VoxelIndex};
use knead_lattice::{NeighbourScope, PositionIndex, VoxelGrid};
use std::collections::VecDeque;

/// Spread the sponsor region's displacement through the grid.
///
/// The wavefront is a strict FIFO over active sponsors. For each sponsor
/// popped, the full 3D neighbours of its *original* lattice position are
/// enumerated in direction order; every candidate is resolved against the
/// original grid and marked visited the moment it is examined, so a voxel
/// is constrained by at most one sponsor (the first to reach it) no
/// matter how many wavefronts converge on it.
///
/// A constrained candidate that actually moved is committed to the output
/// and enqueued as a new sponsor; one that was already in band keeps its
/// original position and absorbs the wave. The queue drains in finite time
/// because the visited set only grows and every enqueue corresponds to a
/// newly visited index.
///
/// `grid` stays untouched: sponsors and candidates are always compared in
/// original lattice coordinates (plus the sponsor's current displaced
/// position), never against the evolving output. A lookup miss aborts the
/// whole call; skipping a voxel would silently break the visit-once
/// bookkeeping.
pub fn propagate(
    grid: &VoxelGrid,
    index: &PositionIndex,
    sponsors: Vec<SponsorEntry>,
    mut visited: IndexSet<VoxelIndex>,
    step: f64,
    stiffness: f64,
) -> Result<Vec<Point3>, DeformError> {
    let mut output = grid.positions().to_vec();
    for sponsor in &sponsors {
        output[sponsor.origin_index.0] = sponsor.position;
    }

    let mut queue: VecDeque<SponsorEntry> = sponsors.into();
    while let Some(active) = queue.pop_front() {
        let origin = grid.position(active.origin_index);
        for candidate in grid.neighbours(&origin, step, NeighbourScope::Full) {
            let neighbour = index.find(&candidate.position)?;
            if !visited.insert(neighbour) {
                continue;
            }
            if let Some(adjusted) = deform_neighbour(
                candidate.direction,
                active.position,
                candidate.position,
                step,
                stiffness,
            ) {
                output[neighbour.0] = adjusted;
                queue.push_back(SponsorEntry {
                    origin_index: neighbour,
                    position: adjusted,
                });
            }
        }
    }

    Ok(output)
}

/// Deform `grid` according to `request`.
///
/// The single entry point of the engine: builds the rigid sponsor region
/// around the request's source voxel, propagates the displacement outward,
/// and returns a new grid of identical length and ordering. Voxels the
/// wave never moved keep their exact original positions.
///
/// # Errors
///
/// - [`DeformError::SourceNotFound`] if the source position is not an
///   exact element of the grid.
/// - [`DeformError::Lattice`] if the grid contains duplicate positions, or
///   a neighbour candidate fails to resolve mid-traversal. No partial
///   result is returned.
///
/// A zero displacement short-circuits to an identical copy of the input:
/// nothing can move, so no voxel is ever marked as changed.
pub fn deform(request: &DeformRequest, grid: &VoxelGrid) -> Result<VoxelGrid, DeformError> {
    let index = PositionIndex::build(grid)?;
    let source = index
        .find(&request.source())
        .map_err(|_| DeformError::SourceNotFound {
            position: request.source(),
        })?;

    if request.displacement().is_zero() {
        return Ok(grid.clone());
    }

    let (sponsors, visited) = build_sponsor_region(
        grid,
        &index,
        source,
        request.displacement(),
        request.spacing(),
        request.influence_radius(),
    )?;
    let positions = propagate(
        grid,
        &index,
        sponsors,
        visited,
        request.spacing(),
        request.stiffness(),
    )?;

    Ok(VoxelGrid::new(positions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use knead_core::Vec3;
    use knead_test_utils::{cube_grid, flat_index};

    fn request(source: Point3, displacement: Vec3, radius: u32, stiffness: f64) -> DeformRequest {
        DeformRequest::builder()
            .source(source)
            .displacement(displacement)
            .influence_radius(radius)
            .stiffness(stiffness)
            .build()
            .unwrap()
    }

    // ── Entry-point validation ──────────────────────────────────

    #[test]
    fn source_outside_grid_is_rejected() {
        let grid = cube_grid(3, 1.0);
        let bad = request(Point3::new(9.0, 9.0, 9.0), Vec3::new(1.0, 0.0, 0.0), 0, 0.0);
        assert_eq!(
            deform(&bad, &grid).unwrap_err(),
            DeformError::SourceNotFound {
                position: Point3::new(9.0, 9.0, 9.0)
            }
        );
    }

    #[test]
    fn zero_displacement_returns_identical_grid() {
        let grid = cube_grid(3, 1.0);
        let noop = request(Point3::new(1.0, 1.0, 1.0), Vec3::ZERO, 2, 0.5);
        let result = deform(&noop, &grid).unwrap();
        assert_eq!(result, grid);
    }

    #[test]
    fn duplicate_grid_positions_are_rejected_before_traversal() {
        let mut positions = cube_grid(2, 1.0).positions().to_vec();
        positions[7] = positions[0];
        let grid = VoxelGrid::new(positions).unwrap();
        let req = request(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0, 0.0);
        assert!(matches!(
            deform(&req, &grid).unwrap_err(),
            DeformError::Lattice(knead_lattice::LatticeError::DuplicatePosition { .. })
        ));
    }

    // ── Propagation behaviour ───────────────────────────────────

    #[test]
    fn output_grid_matches_input_shape() {
        let grid = cube_grid(4, 1.0);
        let req = request(Point3::new(1.0, 2.0, 1.0), Vec3::new(0.25, 0.0, 0.0), 1, 0.5);
        let result = deform(&req, &grid).unwrap();
        assert_eq!(result.len(), grid.len());
    }

    #[test]
    fn input_grid_is_not_mutated() {
        let grid = cube_grid(3, 1.0);
        let before = grid.clone();
        let req = request(Point3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0), 1, 0.0);
        deform(&req, &grid).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn wave_stops_at_satisfied_voxels() {
        // Stiffness 0.5 absorbs a 0.5 mm displacement within one layer:
        // the first shell is examined but already in band, so nothing
        // beyond the source moves.
        let grid = cube_grid(3, 1.0);
        let req = request(Point3::new(1.0, 1.0, 1.0), Vec3::new(0.5, 0.0, 0.0), 0, 0.5);
        let result = deform(&req, &grid).unwrap();
        let center = flat_index(3, 1, 1, 1);
        for (i, (out, orig)) in result
            .positions()
            .iter()
            .zip(grid.positions())
            .enumerate()
        {
            if i == center {
                assert_eq!(*out, Point3::new(1.5, 1.0, 1.0));
            } else {
                assert_eq!(out, orig, "voxel {i} should not have moved");
            }
        }
    }

    #[test]
    fn shared_neighbour_is_claimed_once_by_the_first_sponsor() {
        // With radius 1 the right and top sponsors both border the
        // diagonal voxel (2, 2, 1). FIFO order makes the right sponsor
        // reach it first (via Top); the claim must stick and the result
        // must stay deterministic.
        let grid = cube_grid(3, 1.0);
        let index = PositionIndex::build(&grid).unwrap();
        let source = VoxelIndex(flat_index(3, 1, 1, 1));
        let (sponsors, visited) = build_sponsor_region(
            &grid,
            &index,
            source,
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            1,
        )
        .unwrap();
        let output = propagate(&grid, &index, sponsors, visited, 1.0, 0.25).unwrap();

        // Right sponsor sits displaced at (3, 1, 1); its Top constraint
        // drags the diagonal voxel's x into the shear band: 3 − 0.25.
        assert_eq!(
            output[flat_index(3, 2, 2, 1)],
            Point3::new(2.75, 2.0, 1.0)
        );
    }

    #[test]
    fn propagation_reaches_into_depth() {
        // The sponsor region is surface-only, but the wave itself moves in
        // all six directions, including z.
        let grid = cube_grid(3, 1.0);
        let req = request(Point3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0), 0, 0.0);
        let result = deform(&req, &grid).unwrap();
        assert_eq!(
            result.positions()[flat_index(3, 1, 1, 0)],
            Point3::new(2.0, 1.0, 0.0)
        );
        assert_eq!(
            result.positions()[flat_index(3, 1, 1, 2)],
            Point3::new(2.0, 1.0, 2.0)
        );
    }
}
