//! Configurable conversion front end
//!
//! [`Converter`] owns a [`ConversionConfig`] and exposes the six
//! conversions as methods. Each method checks the input shape, runs the
//! optional validity checks, then calls the kernel with the configured
//! policies.

use nalgebra::{Matrix3, Vector3, Vector4};

use crate::config::ConversionConfig;
use crate::conversions::{
    axis_angle_from_quaternion, euler_angles_from_quaternion, quaternion_from_axis_angle,
    quaternion_from_euler_angles, quaternion_from_rotation_matrix, rotation_matrix_from_quaternion,
    AxisAngle, EulerAngles,
};
use crate::error::{InputKind, Result};
use crate::math::{check_rotation_matrix, check_unit_quaternion, matrix3, vector3, vector4};

/// Rotation converter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    /// Create a converter, rejecting invalid tolerances
    pub fn new(config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Reference behavior, no input validation
    pub fn reference() -> Self {
        Self {
            config: ConversionConfig::reference(),
        }
    }

    /// See [`ConversionConfig::hardened`]
    pub fn hardened() -> Self {
        Self {
            config: ConversionConfig::hardened(),
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn axis_angle_to_quaternion(&self, axis: &[f64], angle: f64) -> Result<Vector4<f64>> {
        let axis = vector3(axis, InputKind::Axis)?;
        quaternion_from_axis_angle(&axis, angle)
    }

    pub fn quaternion_to_axis_angle(&self, q: &[f64]) -> Result<(Vector3<f64>, f64)> {
        let AxisAngle { axis, angle } = self.axis_angle(q)?;
        Ok((axis, angle))
    }

    /// Like [`Self::quaternion_to_axis_angle`], as an [`AxisAngle`]
    pub fn axis_angle(&self, q: &[f64]) -> Result<AxisAngle> {
        let q = self.quaternion(q)?;
        Ok(axis_angle_from_quaternion(&q))
    }

    pub fn quaternion_to_rotation_matrix(&self, q: &[f64]) -> Result<Matrix3<f64>> {
        let q = self.quaternion(q)?;
        Ok(rotation_matrix_from_quaternion(&q))
    }

    pub fn rotation_matrix_to_quaternion<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vector4<f64>> {
        let r = matrix3(rows)?;
        self.rotation_matrix_to_quaternion_mat(&r)
    }

    /// Matrix-to-quaternion for callers already holding a `Matrix3`
    pub fn rotation_matrix_to_quaternion_mat(&self, r: &Matrix3<f64>) -> Result<Vector4<f64>> {
        if let Some(validation) = &self.config.validation {
            check_rotation_matrix(r, validation.orthogonality_tolerance)?;
        }
        Ok(quaternion_from_rotation_matrix(r, self.config.radicand))
    }

    pub fn euler_angles_to_quaternion(&self, angles: &[f64]) -> Result<Vector4<f64>> {
        let angles = EulerAngles::from(vector3(angles, InputKind::EulerAngles)?);
        Ok(quaternion_from_euler_angles(&angles))
    }

    pub fn quaternion_to_euler_angles(&self, q: &[f64]) -> Result<Vector3<f64>> {
        Ok(self.euler_angles(q)?.to_vector())
    }

    /// Like [`Self::quaternion_to_euler_angles`], as [`EulerAngles`]
    pub fn euler_angles(&self, q: &[f64]) -> Result<EulerAngles> {
        let q = self.quaternion(q)?;
        Ok(euler_angles_from_quaternion(
            &q,
            self.config.gimbal_tolerance,
            self.config.gimbal_yaw,
        ))
    }

    fn quaternion(&self, q: &[f64]) -> Result<Vector4<f64>> {
        let q = vector4(q, InputKind::Quaternion)?;
        if let Some(validation) = &self.config.validation {
            check_unit_quaternion(&q, validation.unit_norm_tolerance)?;
        }
        Ok(q)
    }
}
