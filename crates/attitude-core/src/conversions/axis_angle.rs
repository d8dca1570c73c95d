//! Axis-angle ⇄ quaternion
//!
//! - q = [cos(θ/2), sin(θ/2)·u] for a unit axis u
//! - θ = 2·atan(‖e‖ / e0) for q = [e0; e]

use std::f64::consts::PI;

use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RotationError};
use crate::identity_quaternion;

/// Rotation of `angle` radians about `axis`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Rotation axis, unit length when produced by a conversion
    pub axis: Vector3<f64>,
    /// Rotation angle [rad]
    pub angle: f64,
}

impl AxisAngle {
    pub fn new(axis: Vector3<f64>, angle: f64) -> Self {
        Self { axis, angle }
    }
}

/// Compute quaternion from axis-angle representation
///
/// A zero angle gives the identity whatever the axis, including a zero axis.
///
/// # Arguments
/// * `axis` - Rotation axis (will be normalized)
/// * `angle` - Rotation angle [rad]
///
/// # Errors
/// [`RotationError::DegenerateInput`] if the angle is nonzero and the axis is zero
pub fn quaternion_from_axis_angle(axis: &Vector3<f64>, angle: f64) -> Result<Vector4<f64>> {
    if angle == 0.0 {
        return Ok(identity_quaternion());
    }

    let norm = axis.norm();
    if norm == 0.0 {
        debug!(angle, "zero rotation axis with nonzero angle");
        return Err(RotationError::DegenerateInput { angle });
    }

    let u = axis / norm;
    let (s, c) = (angle / 2.0).sin_cos();

    Ok(Vector4::new(c, s * u.x, s * u.y, s * u.z))
}

/// Compute axis and angle from a quaternion
///
/// A quaternion with zero vector part returns axis `[1, 0, 0]` and angle 0.
/// An exactly zero scalar part returns angle π. For `e0 < 0` the angle
/// lands in (-π, 0): the same rotation, expressed the other way round.
pub fn axis_angle_from_quaternion(q: &Vector4<f64>) -> AxisAngle {
    let e0 = q[0];
    let e = Vector3::new(q[1], q[2], q[3]);
    let e_norm = e.norm();

    if e_norm == 0.0 {
        debug!(e0, "pure scalar quaternion, axis undefined");
        return AxisAngle::new(Vector3::x(), 0.0);
    }

    let axis = e / e_norm;
    let angle = if e0 == 0.0 {
        PI
    } else {
        2.0 * (e_norm / e0).atan()
    };

    AxisAngle::new(axis, angle)
}
