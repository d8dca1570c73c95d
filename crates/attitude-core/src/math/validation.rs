//! Rotation validity checks
//!
//! The conversions themselves trust their inputs. These checks back the
//! validated mode of [`Converter`](crate::Converter).

use nalgebra::{Matrix3, Vector4};
use tracing::warn;

use crate::error::{Result, RotationError};

/// Check that `|‖q‖ - 1| <= tolerance`
///
/// A NaN component always fails.
pub fn check_unit_quaternion(q: &Vector4<f64>, tolerance: f64) -> Result<()> {
    let norm = q.norm();

    // Negated comparison so NaN falls through to the error
    if !((norm - 1.0).abs() <= tolerance) {
        warn!(norm, tolerance, "rejecting non-unit quaternion");
        return Err(RotationError::NotUnitQuaternion { norm });
    }
    Ok(())
}

/// Check that `R` is a proper rotation
///
/// Requires `‖R Rᵀ - I‖_F <= tolerance` and `|det R - 1| <= tolerance`.
pub fn check_rotation_matrix(r: &Matrix3<f64>, tolerance: f64) -> Result<()> {
    let orthogonality_error = (r * r.transpose() - Matrix3::identity()).norm();
    let determinant = r.determinant();

    if !(orthogonality_error <= tolerance && (determinant - 1.0).abs() <= tolerance) {
        warn!(
            orthogonality_error,
            determinant, tolerance, "rejecting non-rotation matrix"
        );
        return Err(RotationError::NotRotationMatrix {
            orthogonality_error,
            determinant,
        });
    }
    Ok(())
}
