//! The six axis-aligned neighbour directions and their wire codes.

use knead_core::{Axis, Vec3};

/// Direction from a voxel to one of its six axis-aligned neighbours.
///
/// The discriminants are the stable codes recorded when a neighbour is
/// enumerated: right 0, left 1, top 2, bottom 3, down 4, up 5. Orientation
/// follows the millimetre convention: top has a larger y than bottom,
/// right a larger x than left, down a smaller z than up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x neighbour (code 0).
    Right = 0,
    /// −x neighbour (code 1).
    Left = 1,
    /// +y neighbour (code 2).
    Top = 2,
    /// −y neighbour (code 3).
    Bottom = 3,
    /// −z neighbour (code 4).
    Down = 4,
    /// +z neighbour (code 5).
    Up = 5,
}

impl Direction {
    /// All six directions in fixed enumeration order (codes 0..=5).
    ///
    /// Neighbour lists preserve this order, which makes traversal order
    /// (and therefore which sponsor claims a contested voxel) fully
    /// deterministic.
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
        Direction::Down,
        Direction::Up,
    ];

    /// The four surface directions (x/y plane only), in enumeration order.
    pub const SURFACE: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
    ];

    /// Stable wire code of this direction.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::X,
            Direction::Top | Direction::Bottom => Axis::Y,
            Direction::Down | Direction::Up => Axis::Z,
        }
    }

    /// Sign of the movement along [`axis`](Direction::axis): `+1.0` or `-1.0`.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right | Direction::Top | Direction::Up => 1.0,
            Direction::Left | Direction::Bottom | Direction::Down => -1.0,
        }
    }

    /// Offset vector of magnitude `step` along this direction.
    pub fn offset(self, step: f64) -> Vec3 {
        let mut v = Vec3::ZERO;
        match self.axis() {
            Axis::X => v.x = self.sign() * step,
            Axis::Y => v.y = self.sign() * step,
            Axis::Z => v.z = self.sign() * step,
        }
        v
    }
}
