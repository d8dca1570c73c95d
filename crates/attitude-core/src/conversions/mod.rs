//! Rotation conversions
//!
//! Typed kernels live in the submodules. The functions below are the loose
//! boundary: they take slices, check shapes and run the kernels with the
//! reference configuration. Use [`Converter`] for the other policies.

pub mod axis_angle;
pub mod euler;
pub mod rotation_matrix;

pub use axis_angle::{axis_angle_from_quaternion, quaternion_from_axis_angle, AxisAngle};
pub use euler::{euler_angles_from_quaternion, quaternion_from_euler_angles, EulerAngles};
pub use rotation_matrix::{quaternion_from_rotation_matrix, rotation_matrix_from_quaternion};

use nalgebra::{Matrix3, Vector3, Vector4};

use crate::converter::Converter;
use crate::error::Result;

/// Quaternion `[q0, q1, q2, q3]` from a 3-component axis and an angle [rad]
pub fn axis_angle_to_quaternion(axis: &[f64], angle: f64) -> Result<Vector4<f64>> {
    Converter::default().axis_angle_to_quaternion(axis, angle)
}

/// Unit axis and angle [rad] from a 4-component quaternion
pub fn quaternion_to_axis_angle(q: &[f64]) -> Result<(Vector3<f64>, f64)> {
    Converter::default().quaternion_to_axis_angle(q)
}

/// Rotation matrix from a 4-component quaternion
pub fn quaternion_to_rotation_matrix(q: &[f64]) -> Result<Matrix3<f64>> {
    Converter::default().quaternion_to_rotation_matrix(q)
}

/// Quaternion from a rotation matrix given as 3 rows of 3
pub fn rotation_matrix_to_quaternion<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vector4<f64>> {
    Converter::default().rotation_matrix_to_quaternion(rows)
}

/// Quaternion from 3-component `[roll, pitch, yaw]` [rad]
pub fn euler_angles_to_quaternion(angles: &[f64]) -> Result<Vector4<f64>> {
    Converter::default().euler_angles_to_quaternion(angles)
}

/// `[roll, pitch, yaw]` [rad] from a 4-component quaternion
pub fn quaternion_to_euler_angles(q: &[f64]) -> Result<Vector3<f64>> {
    Converter::default().quaternion_to_euler_angles(q)
}
