//! Euler angles ⇄ quaternion
//!
//! Tait-Bryan angles, ZYX convention:
//! - yaw about z, then pitch about the new y, then roll about the new x (intrinsic)
//! - active rotations, right-handed frame
//!
//! At pitch = ±π/2 roll and yaw rotate about the same axis (gimbal lock).
//! Only their combination is observable, so roll is pinned to zero and the
//! whole rotation is reported as yaw.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GimbalYaw;

/// Roll, pitch and yaw [rad]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about body x
    pub roll: f64,
    /// Rotation about body y
    pub pitch: f64,
    /// Rotation about body z
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// `[roll, pitch, yaw]`
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.roll, self.pitch, self.yaw)
    }
}

impl From<Vector3<f64>> for EulerAngles {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<EulerAngles> for Vector3<f64> {
    fn from(angles: EulerAngles) -> Self {
        angles.to_vector()
    }
}

/// Quaternion from Euler angles
///
/// Half-angle product expansion of q_yaw ⊗ q_pitch ⊗ q_roll.
pub fn quaternion_from_euler_angles(angles: &EulerAngles) -> Vector4<f64> {
    let (sr, cr) = (angles.roll / 2.0).sin_cos();
    let (sp, cp) = (angles.pitch / 2.0).sin_cos();
    let (sy, cy) = (angles.yaw / 2.0).sin_cos();

    Vector4::new(
        cr * cp * cy + sr * sp * sy,
        sr * cp * cy - cr * sp * sy,
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
    )
}

/// Euler angles from a quaternion
///
/// `t2 = 2(q0·q2 - q1·q3)` is clamped to [-1, 1] before `asin`. Gimbal lock
/// is declared when `|t2| >= 1 - gimbal_tolerance`; with a zero tolerance
/// that means the clamped value is exactly ±1. Under lock roll is 0 and yaw
/// follows `gimbal_yaw`.
///
/// `atan2` has IEEE semantics, so `atan2(y, ±0)` is `±π/2` for `y > 0`.
pub fn euler_angles_from_quaternion(
    q: &Vector4<f64>,
    gimbal_tolerance: f64,
    gimbal_yaw: GimbalYaw,
) -> EulerAngles {
    let (q0, q1, q2, q3) = (q[0], q[1], q[2], q[3]);

    // NaN passes through clamp and fails both lock tests
    let t2 = (2.0 * (q0 * q2 - q1 * q3)).clamp(-1.0, 1.0);
    let boundary = 1.0 - gimbal_tolerance;

    if t2 >= boundary {
        let yaw = match gimbal_yaw {
            GimbalYaw::Reference => -q0.atan2(q1),
            GimbalYaw::RotationPreserving => wrap_angle(-2.0 * q1.atan2(q0)),
        };
        debug!(t2, yaw, "gimbal lock at pitch +π/2");
        return EulerAngles::new(0.0, FRAC_PI_2, yaw);
    }

    if t2 <= -boundary {
        let yaw = match gimbal_yaw {
            GimbalYaw::Reference => q0.atan2(q1),
            GimbalYaw::RotationPreserving => wrap_angle(2.0 * q1.atan2(q0)),
        };
        debug!(t2, yaw, "gimbal lock at pitch -π/2");
        return EulerAngles::new(0.0, -FRAC_PI_2, yaw);
    }

    let pitch = t2.asin();
    let roll = (2.0 * (q0 * q1 + q2 * q3)).atan2(q0 * q0 - q1 * q1 - q2 * q2 + q3 * q3);
    let yaw = (2.0 * (q0 * q3 + q1 * q2)).atan2(q0 * q0 + q1 * q1 - q2 * q2 - q3 * q3);

    EulerAngles::new(roll, pitch, yaw)
}

/// Wrap an angle into (-π, π]
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}
