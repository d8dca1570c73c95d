//! Input shape checks
//!
//! Every conversion accepts loose slices at its boundary and turns them into
//! fixed-size nalgebra values here, failing with
//! [`RotationError::InvalidShape`] when the component count is wrong.

use nalgebra::{Matrix3, Vector3, Vector4};

use crate::error::{InputKind, Result, RotationError};

fn components<const N: usize>(values: &[f64], input: InputKind) -> Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| RotationError::InvalidShape {
        input,
        expected: N,
        got: values.len(),
    })
}

/// Exactly 3 components as a `Vector3`
pub fn vector3(values: &[f64], input: InputKind) -> Result<Vector3<f64>> {
    let [x, y, z] = components::<3>(values, input)?;
    Ok(Vector3::new(x, y, z))
}

/// Exactly 4 components as a `Vector4`, order preserved
pub fn vector4(values: &[f64], input: InputKind) -> Result<Vector4<f64>> {
    let [a, b, c, d] = components::<4>(values, input)?;
    Ok(Vector4::new(a, b, c, d))
}

/// Exactly 3 rows of 3 components, row-major, as a `Matrix3`
pub fn matrix3<R: AsRef<[f64]>>(rows: &[R]) -> Result<Matrix3<f64>> {
    if rows.len() != 3 {
        return Err(RotationError::InvalidShape {
            input: InputKind::RotationMatrix,
            expected: 3,
            got: rows.len(),
        });
    }

    let mut matrix = Matrix3::zeros();
    for (i, row) in rows.iter().enumerate() {
        let row = components::<3>(row.as_ref(), InputKind::RotationMatrixRow(i))?;
        for (j, value) in row.into_iter().enumerate() {
            matrix[(i, j)] = value;
        }
    }
    Ok(matrix)
}
