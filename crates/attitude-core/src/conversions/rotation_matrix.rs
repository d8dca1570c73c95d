//! Rotation matrix ⇄ quaternion
//!
//! Quaternion to matrix is the closed-form DCM expansion. Matrix to
//! quaternion uses Shepperd's method: compute all four component magnitudes
//! from the diagonal, keep the largest, and recover the other three from
//! off-diagonal sums and differences divided by four times that largest one.

use nalgebra::{Matrix3, Vector4};
use tracing::{debug, trace};

use crate::config::RadicandPolicy;

/// Rotation matrix R(q) from a quaternion
///
/// ```text
/// R = [q0²+q1²-q2²-q3²   2q1q2-2q0q3       2q0q2+2q1q3    ]
///     [2q0q3+2q1q2       q0²-q1²+q2²-q3²   2q2q3-2q0q1    ]
///     [2q1q3-2q0q2       2q0q1+2q2q3       q0²-q1²-q2²+q3²]
/// ```
///
/// Unit norm is assumed, not checked.
pub fn rotation_matrix_from_quaternion(q: &Vector4<f64>) -> Matrix3<f64> {
    let (q0, q1, q2, q3) = (q[0], q[1], q[2], q[3]);

    Matrix3::new(
        q0 * q0 + q1 * q1 - q2 * q2 - q3 * q3,
        2.0 * q1 * q2 - 2.0 * q0 * q3,
        2.0 * q0 * q2 + 2.0 * q1 * q3,
        2.0 * q0 * q3 + 2.0 * q1 * q2,
        q0 * q0 - q1 * q1 + q2 * q2 - q3 * q3,
        2.0 * q2 * q3 - 2.0 * q0 * q1,
        2.0 * q1 * q3 - 2.0 * q0 * q2,
        2.0 * q0 * q1 + 2.0 * q2 * q3,
        q0 * q0 - q1 * q1 - q2 * q2 + q3 * q3,
    )
}

/// Unsigned magnitudes |q0|..|q3| read off the diagonal
pub fn shepperd_candidates(r: &Matrix3<f64>, radicand: RadicandPolicy) -> [f64; 4] {
    let (r00, r11, r22) = (r[(0, 0)], r[(1, 1)], r[(2, 2)]);

    let radicands = [
        (1.0 + r00 + r11 + r22) / 4.0,
        (1.0 + r00 - r11 - r22) / 4.0,
        (1.0 - r00 + r11 - r22) / 4.0,
        (1.0 - r00 - r11 + r22) / 4.0,
    ];

    radicands.map(|x| match radicand {
        RadicandPolicy::Propagate => x.sqrt(),
        RadicandPolicy::ClampToZero => x.max(0.0).sqrt(),
    })
}

/// Index of the largest candidate
///
/// Scans q0, q1, q2, q3 in order; on a tie the later index wins. A NaN
/// candidate never replaces the current pick, so only a NaN in q0 survives.
pub fn largest_candidate(candidates: &[f64; 4]) -> usize {
    let mut best = 0;
    for i in 1..4 {
        if candidates[i] >= candidates[best] {
            best = i;
        }
    }
    best
}

/// Quaternion from a rotation matrix (Shepperd's method)
///
/// Orthogonality is assumed, not checked. With
/// [`RadicandPolicy::Propagate`] a non-orthogonal input can produce NaN.
pub fn quaternion_from_rotation_matrix(r: &Matrix3<f64>, radicand: RadicandPolicy) -> Vector4<f64> {
    let candidates = shepperd_candidates(r, radicand);
    let branch = largest_candidate(&candidates);
    let magnitude = candidates[branch];
    let k = 4.0 * magnitude;

    trace!(?candidates, branch, "shepperd branch");
    if magnitude.is_nan() {
        debug!(?candidates, "negative radicand, matrix is not a rotation");
    }

    // Off-diagonal sums and differences
    let d21 = r[(2, 1)] - r[(1, 2)];
    let d02 = r[(0, 2)] - r[(2, 0)];
    let d10 = r[(1, 0)] - r[(0, 1)];
    let s01 = r[(0, 1)] + r[(1, 0)];
    let s02 = r[(0, 2)] + r[(2, 0)];
    let s12 = r[(1, 2)] + r[(2, 1)];

    match branch {
        0 => Vector4::new(magnitude, d21 / k, d02 / k, d10 / k),
        1 => Vector4::new(d21 / k, magnitude, s01 / k, s02 / k),
        2 => Vector4::new(d02 / k, s01 / k, magnitude, s12 / k),
        _ => Vector4::new(d10 / k, s02 / k, s12 / k, magnitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::axis_angle::quaternion_from_axis_angle;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_identity_quaternion_gives_identity_matrix() {
        let r = rotation_matrix_from_quaternion(&Vector4::new(1.0, 0.0, 0.0, 0.0));

        assert_eq!(r, Matrix3::identity());
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let q = Vector4::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

        let r = rotation_matrix_from_quaternion(&q);

        let expected = Matrix3::new(
            0.0, -1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
        );
        assert_relative_eq!(r, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_matrix_orthogonal() {
        let q = quaternion_from_axis_angle(&Vector3::new(1.0, 1.0, 1.0), 1.0).unwrap();
        let r = rotation_matrix_from_quaternion(&q);

        // R * R^T = I
        let identity = r * r.transpose();
        assert_relative_eq!(identity, Matrix3::identity(), epsilon = 1e-10);

        // det(R) = 1
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_negated_quaternion_gives_same_matrix() {
        let q = quaternion_from_axis_angle(&Vector3::new(0.2, -0.7, 0.4), 2.1).unwrap();

        assert_relative_eq!(
            rotation_matrix_from_quaternion(&q),
            rotation_matrix_from_quaternion(&-q),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_largest_candidate_tie_goes_to_later_index() {
        assert_eq!(largest_candidate(&[1.0, 0.5, 1.0, 0.2]), 2);
        assert_eq!(largest_candidate(&[0.5, 0.5, 0.5, 0.5]), 3);
        assert_eq!(largest_candidate(&[0.9, 0.1, 0.1, 0.1]), 0);
        assert_eq!(largest_candidate(&[0.1, 0.9, 0.1, 0.1]), 1);
    }

    #[test]
    fn test_largest_candidate_skips_nan() {
        assert_eq!(largest_candidate(&[0.1, f64::NAN, 0.9, 0.2]), 2);
        assert_eq!(largest_candidate(&[f64::NAN, 0.7, 0.7, 0.7]), 0);
    }

    #[test]
    fn test_identity_matrix_gives_identity_quaternion() {
        let q = quaternion_from_rotation_matrix(&Matrix3::identity(), RadicandPolicy::Propagate);

        assert_eq!(q, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_each_branch_recovers_quaternion() {
        // One quaternion per dominant component, all with a positive dominant component
        let cases = [
            Vector4::new(0.9, 0.3, -0.2, 0.1),
            Vector4::new(0.3, 0.9, 0.2, -0.1),
            Vector4::new(0.2, -0.1, 0.9, 0.3),
            Vector4::new(0.1, 0.2, -0.3, 0.9),
        ];

        for (expected_branch, q) in cases.iter().enumerate() {
            let q = q.normalize();
            let r = rotation_matrix_from_quaternion(&q);

            let candidates = shepperd_candidates(&r, RadicandPolicy::Propagate);
            assert_eq!(largest_candidate(&candidates), expected_branch);

            let recovered = quaternion_from_rotation_matrix(&r, RadicandPolicy::Propagate);
            assert_relative_eq!(recovered, q, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dominant_component_sign_is_positive() {
        // q1 dominates and is negative: Shepperd returns -q
        let q = Vector4::new(0.1, -0.9, 0.3, 0.2).normalize();
        let r = rotation_matrix_from_quaternion(&q);

        let recovered = quaternion_from_rotation_matrix(&r, RadicandPolicy::Propagate);

        assert_relative_eq!(recovered, -q, epsilon = 1e-12);
    }

    #[test]
    fn test_half_turn_tie_between_q1_and_q2() {
        // π about (1, 1, 0)/√2: |q1| = |q2|, the q2 branch fires
        let r = Matrix3::new(
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
        );

        let candidates = shepperd_candidates(&r, RadicandPolicy::Propagate);
        assert_eq!(largest_candidate(&candidates), 2);

        let q = quaternion_from_rotation_matrix(&r, RadicandPolicy::Propagate);
        assert_relative_eq!(q, Vector4::new(0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_reflection_propagates_nan() {
        let r = -Matrix3::identity();

        let q = quaternion_from_rotation_matrix(&r, RadicandPolicy::Propagate);

        assert!(q.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_reflection_clamped_stays_finite() {
        let r = -Matrix3::identity();

        let q = quaternion_from_rotation_matrix(&r, RadicandPolicy::ClampToZero);

        assert!(q.iter().all(|c| c.is_finite()));
        // q0 clamps to 0, the remaining three tie and q3 wins
        assert_relative_eq!(q, Vector4::new(0.0, 0.0, 0.0, FRAC_1_SQRT_2), epsilon = 1e-12);
    }

    #[test]
    fn test_half_turn_about_x() {
        let q = quaternion_from_axis_angle(&Vector3::x(), PI).unwrap();
        let r = rotation_matrix_from_quaternion(&q);

        let recovered = quaternion_from_rotation_matrix(&r, RadicandPolicy::Propagate);

        assert_relative_eq!(recovered, Vector4::new(0.0, 1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}
