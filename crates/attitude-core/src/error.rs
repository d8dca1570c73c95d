//! Conversion errors

use std::fmt;

use thiserror::Error;

/// Which input a shape error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Rotation axis of an axis-angle pair
    Axis,
    /// Quaternion `(q0, q1, q2, q3)`
    Quaternion,
    /// Euler angles `(roll, pitch, yaw)`
    EulerAngles,
    /// Rows of a rotation matrix
    RotationMatrix,
    /// A single row of a rotation matrix
    RotationMatrixRow(usize),
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Axis => write!(f, "rotation axis"),
            InputKind::Quaternion => write!(f, "quaternion"),
            InputKind::EulerAngles => write!(f, "Euler angles"),
            InputKind::RotationMatrix => write!(f, "rotation matrix"),
            InputKind::RotationMatrixRow(row) => write!(f, "rotation matrix row {row}"),
        }
    }
}

/// Rotation conversion errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RotationError {
    #[error("Invalid {input} shape: expected {expected} components, got {got}")]
    InvalidShape {
        input: InputKind,
        expected: usize,
        got: usize,
    },
    #[error("Rotation axis has zero length for nonzero angle {angle} rad")]
    DegenerateInput { angle: f64 },
    #[error("Quaternion is not unit length (norm {norm})")]
    NotUnitQuaternion { norm: f64 },
    #[error("Matrix is not a rotation (|R Rᵀ - I| = {orthogonality_error}, det = {determinant})")]
    NotRotationMatrix {
        orthogonality_error: f64,
        determinant: f64,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RotationError>;
