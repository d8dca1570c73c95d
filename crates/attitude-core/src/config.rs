//! Conversion configuration
//!
//! Numerical policies for the places where the conversions have to pick a
//! behavior: negative radicands in Shepperd's method, the gimbal-lock
//! boundary, and whether inputs are checked to be valid rotations.
//!
//! `ConversionConfig::default()` reproduces the reference behavior exactly.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotationError};

/// What to do with a negative radicand in the matrix-to-quaternion candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadicandPolicy {
    /// Take the square root as is; a non-orthogonal matrix yields NaN
    #[default]
    Propagate,
    /// Clamp the radicand at zero before the square root
    ClampToZero,
}

/// Yaw formula used once pitch is locked at ±π/2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GimbalYaw {
    /// `yaw = ∓atan2(q0, q1)` for pitch `±π/2`
    #[default]
    Reference,
    /// `yaw = ∓2·atan2(q1, q0)` for pitch `±π/2`, wrapped to (-π, π].
    ///
    /// With roll fixed at zero this reproduces the input rotation.
    RotationPreserving,
}

/// Tolerances for checking that inputs are valid rotations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Allowed deviation of the quaternion norm from 1
    pub unit_norm_tolerance: f64,
    /// Allowed Frobenius norm of `R Rᵀ - I`, also used for `|det R - 1|`
    pub orthogonality_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            unit_norm_tolerance: 1e-6,
            orthogonality_tolerance: 1e-6,
        }
    }
}

/// Conversion configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Radicand handling in Shepperd's method
    pub radicand: RadicandPolicy,
    /// Gimbal lock is declared when `|t2| >= 1 - gimbal_tolerance`.
    ///
    /// Zero means the clamped `t2` must be exactly ±1.
    pub gimbal_tolerance: f64,
    /// Yaw formula at gimbal lock
    pub gimbal_yaw: GimbalYaw,
    /// Input validation; `None` trusts the caller
    pub validation: Option<ValidationConfig>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            radicand: RadicandPolicy::Propagate,
            gimbal_tolerance: 0.0,
            gimbal_yaw: GimbalYaw::Reference,
            validation: None,
        }
    }
}

impl ConversionConfig {
    /// Reference behavior (same as `Default`)
    pub fn reference() -> Self {
        Self::default()
    }

    /// Clamped radicands, tolerant gimbal boundary, rotation-preserving yaw
    /// and validated inputs
    pub fn hardened() -> Self {
        Self {
            radicand: RadicandPolicy::ClampToZero,
            gimbal_tolerance: 1e-9,
            gimbal_yaw: GimbalYaw::RotationPreserving,
            validation: Some(ValidationConfig::default()),
        }
    }

    /// Check that all tolerances are finite and non-negative
    pub fn validate(&self) -> Result<()> {
        check_tolerance("gimbal_tolerance", self.gimbal_tolerance)?;
        if self.gimbal_tolerance >= 1.0 {
            return Err(RotationError::InvalidConfig(format!(
                "gimbal_tolerance must be below 1, got {}",
                self.gimbal_tolerance
            )));
        }
        if let Some(validation) = &self.validation {
            check_tolerance("unit_norm_tolerance", validation.unit_norm_tolerance)?;
            check_tolerance("orthogonality_tolerance", validation.orthogonality_tolerance)?;
        }
        Ok(())
    }
}

fn check_tolerance(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RotationError::InvalidConfig(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
