//! # Attitude Core
//!
//! Conversions between the common parameterizations of a 3D rotation:
//!
//! - axis-angle
//! - unit quaternion, scalar first `(q0, q1, q2, q3)`
//! - 3x3 rotation matrix (DCM)
//! - Tait-Bryan angles `(roll, pitch, yaw)`, intrinsic ZYX
//!
//! The quaternion is the hub: every conversion goes to or from it.
//!
//! ## Modules
//!
//! - [`conversions`]: the six conversion kernels and their slice-level entry points
//! - [`converter`]: [`Converter`], the configurable front end
//! - [`config`]: numerical policies (radicand clamping, gimbal-lock handling, validation)
//! - [`math`]: input shape checks and rotation validity checks
//! - [`error`]: [`RotationError`]
//!
//! ## Example
//!
//! ```
//! use attitude_core::{axis_angle_to_quaternion, quaternion_to_rotation_matrix};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = axis_angle_to_quaternion(&[0.0, 0.0, 1.0], FRAC_PI_2).unwrap();
//! let r = quaternion_to_rotation_matrix(q.as_slice()).unwrap();
//! assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
//! ```

pub mod config;
pub mod conversions;
pub mod converter;
pub mod error;
pub mod math;

pub use config::{ConversionConfig, GimbalYaw, RadicandPolicy, ValidationConfig};
pub use conversions::*;
pub use converter::Converter;
pub use error::{Result, RotationError};

// Common type aliases
use nalgebra::{Matrix3, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f64>;

/// Quaternion as a plain 4-vector, scalar first: `[q0, q1, q2, q3]`
pub type Quat4 = Vector4<f64>;

/// Identity rotation `(1, 0, 0, 0)`
pub fn identity_quaternion() -> Quat4 {
    Vector4::new(1.0, 0.0, 0.0, 0.0)
}
