/// Object-space rotations and their application order
use nalgebra::{Matrix3, Point3, Rotation3};
use std::str::FromStr;

use crate::error::RenderError;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Right-handed rotation matrix of `angle` radians about this axis
    pub fn rotation(self, angle: f32) -> Rotation3<f32> {
        let (s, c) = angle.sin_cos();
        let m = match self {
            Axis::X => Matrix3::new(
                1.0, 0.0, 0.0, //
                0.0, c, -s, //
                0.0, s, c,
            ),
            Axis::Y => Matrix3::new(
                c, 0.0, s, //
                0.0, 1.0, 0.0, //
                -s, 0.0, c,
            ),
            Axis::Z => Matrix3::new(
                c, -s, 0.0, //
                s, c, 0.0, //
                0.0, 0.0, 1.0,
            ),
        };
        Rotation3::from_matrix_unchecked(m)
    }

    pub fn rotate(self, p: &Point3<f32>, angle: f32) -> Point3<f32> {
        self.rotation(angle) * p
    }
}

pub fn rotate_x(p: &Point3<f32>, angle: f32) -> Point3<f32> {
    Axis::X.rotate(p, angle)
}

pub fn rotate_y(p: &Point3<f32>, angle: f32) -> Point3<f32> {
    Axis::Y.rotate(p, angle)
}

pub fn rotate_z(p: &Point3<f32>, angle: f32) -> Point3<f32> {
    Axis::Z.rotate(p, angle)
}

/// The sequence in which the three single-axis rotations are applied.
/// Always a permutation of x, y and z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationOrder([Axis; 3]);

impl RotationOrder {
    pub const XYZ: RotationOrder = RotationOrder([Axis::X, Axis::Y, Axis::Z]);
    pub const ZYX: RotationOrder = RotationOrder([Axis::Z, Axis::Y, Axis::X]);

    /// `None` unless every axis appears exactly once
    pub fn new(steps: [Axis; 3]) -> Option<Self> {
        let [a, b, c] = steps;
        (a != b && b != c && a != c).then_some(Self(steps))
    }

    pub fn steps(&self) -> &[Axis; 3] {
        &self.0
    }
}

impl FromStr for RotationOrder {
    type Err = RenderError;

    /// Parses three axis letters such as `xyz` or `ZYX`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RenderError::InvalidRotationOrder(s.to_string());
        let axes = s
            .trim()
            .chars()
            .map(|c| match c.to_ascii_lowercase() {
                'x' => Some(Axis::X),
                'y' => Some(Axis::Y),
                'z' => Some(Axis::Z),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;
        let steps: [Axis; 3] = axes.try_into().map_err(|_| invalid())?;
        Self::new(steps).ok_or_else(invalid)
    }
}

impl Default for RotationOrder {
    fn default() -> Self {
        Self::XYZ
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Apply each axis rotation of `rotation` to `p`, one step at a time, in `order`
    pub fn rotate(p: &Point3<f32>, rotation: &RotationState, order: RotationOrder) -> Point3<f32> {
        order
            .steps()
            .iter()
            .fold(*p, |acc, &axis| axis.rotate(&acc, rotation.angle(axis)))
    }
}
