//! The six directional constraint functions and their dispatch.
//!
//! Each function bounds how far a neighbour may trail its sponsor. With
//! rest spacing `step` and stiffness `s`, the offset from the sponsor along
//! the direction's primary axis (signed with the direction) is clamped to
//! `[step − s, step + s]`, and the offsets on the two perpendicular axes
//! (the shear) are clamped to `[−s, +s]`. All bounds are measured from the
//! sponsor's *current* position, so a displaced sponsor drags its
//! neighbours with it.
//!
//! A candidate already inside all three bands returns `None`: the material
//! is stiff enough at that voxel, the position stands, and the wavefront
//! stops there. This is the propagation's only damping mechanism.

use knead_core::Point3;
use knead_lattice::Direction;

/// Clamp `candidate` into the constraint bands around `sponsor` for the
/// given direction. Shared core of all six directional functions.
fn clamp_to_sponsor(
    direction: Direction,
    sponsor: Point3,
    candidate: Point3,
    step: f64,
    stiffness: f64,
) -> Option<Point3> {
    let axis = direction.axis();
    let sign = direction.sign();
    let mut adjusted = candidate;

    // Primary-axis clamp: signed offset must lie in [step − s, step + s].
    let offset = (candidate.axis(axis) - sponsor.axis(axis)) * sign;
    let minimum = step - stiffness;
    let maximum = step + stiffness;
    if offset < minimum {
        adjusted = adjusted.with_axis(axis, sponsor.axis(axis) + sign * minimum);
    } else if offset > maximum {
        adjusted = adjusted.with_axis(axis, sponsor.axis(axis) + sign * maximum);
    }

    // Shear clamp on the two perpendicular axes: offset in [−s, +s].
    for shear_axis in axis.perpendicular() {
        let shear = candidate.axis(shear_axis) - sponsor.axis(shear_axis);
        if shear < -stiffness {
            adjusted = adjusted.with_axis(shear_axis, sponsor.axis(shear_axis) - stiffness);
        } else if shear > stiffness {
            adjusted = adjusted.with_axis(shear_axis, sponsor.axis(shear_axis) + stiffness);
        }
    }

    if adjusted == candidate {
        None
    } else {
        Some(adjusted)
    }
}

/// Constrain the right (+x) neighbour of `sponsor`.
pub fn deform_right(sponsor: Point3, candidate: Point3, step: f64, stiffness: f64) -> Option<Point3> {
    clamp_to_sponsor(Direction::Right, sponsor, candidate, step, stiffness)
}

/// Constrain the left (−x) neighbour of `sponsor`.
pub fn deform_left(sponsor: Point3, candidate: Point3, step: f64, stiffness: f64) -> Option<Point3> {
    clamp_to_sponsor(Direction::Left, sponsor, candidate, step, stiffness)
}

/// Constrain the top (+y) neighbour of `sponsor`.
pub fn deform_top(sponsor: Point3, candidate: Point3, step: f64, stiffness: f64) -> Option<Point3> {
    clamp_to_sponsor(Direction::Top, sponsor, candidate, step, stiffness)
}

/// Constrain the bottom (−y) neighbour of `sponsor`.
pub fn deform_bottom(
    sponsor: Point3,
    candidate: Point3,
    step: f64,
    stiffness: f64,
) -> Option<Point3> {
    clamp_to_sponsor(Direction::Bottom, sponsor, candidate, step, stiffness)
}

/// Constrain the down (−z) neighbour of `sponsor`.
pub fn deform_down(sponsor: Point3, candidate: Point3, step: f64, stiffness: f64) -> Option<Point3> {
    clamp_to_sponsor(Direction::Down, sponsor, candidate, step, stiffness)
}

/// Constrain the up (+z) neighbour of `sponsor`.
pub fn deform_up(sponsor: Point3, candidate: Point3, step: f64, stiffness: f64) -> Option<Point3> {
    clamp_to_sponsor(Direction::Up, sponsor, candidate, step, stiffness)
}

/// Apply the constraint function for `direction` to a neighbour candidate.
///
/// Returns the adjusted position, or `None` when the candidate already
/// satisfies the constraint and must not be treated as newly deformed.
pub fn deform_neighbour(
    direction: Direction,
    sponsor: Point3,
    candidate: Point3,
    step: f64,
    stiffness: f64,
) -> Option<Point3> {
    match direction {
        Direction::Right => deform_right(sponsor, candidate, step, stiffness),
        Direction::Left => deform_left(sponsor, candidate, step, stiffness),
        Direction::Top => deform_top(sponsor, candidate, step, stiffness),
        Direction::Bottom => deform_bottom(sponsor, candidate, step, stiffness),
        Direction::Down => deform_down(sponsor, candidate, step, stiffness),
        Direction::Up => deform_up(sponsor, candidate, step, stiffness),
    }
}
