use nalgebra::{Matrix2x3, Point2};

use crate::core::JointConfig;

/// Planar three-link arm with equal link lengths, anchored at the origin.
///
/// Joints are measured as cumulative angles from the base, so link i points
/// along the sum of the first i joint angles.
pub struct ArmModel {
    link_length: f64,
}

impl ArmModel {
    /// Construct a new arm model.
    pub fn new(link_length: f64) -> Self {
        Self { link_length }
    }

    /// Length of each link, in source units.
    #[inline]
    pub fn link_length(&self) -> f64 {
        self.link_length
    }

    /// Position of the arm tip for the given configuration.
    pub fn forward(&self, joints: &JointConfig) -> Point2<f64> {
        let t1 = joints.angle(0);
        let t12 = t1 + joints.angle(1);
        let t123 = t12 + joints.angle(2);

        Point2::new(
            self.link_length * (t1.cos() + t12.cos() + t123.cos()),
            self.link_length * (t1.sin() + t12.sin() + t123.sin()),
        )
    }

    /// Jacobian of the tip position with respect to the joint angles.
    ///
    /// Row 0 holds the partials of x, row 1 the partials of y. Column i
    /// carries only the cumulative-angle terms that include joint i, so
    /// later columns have strictly fewer terms.
    pub fn jacobian(&self, joints: &JointConfig) -> Matrix2x3<f64> {
        let l = self.link_length;

        let t1 = joints.angle(0);
        let t12 = t1 + joints.angle(1);
        let t123 = t12 + joints.angle(2);

        Matrix2x3::new(
            -l * (t1.sin() + t12.sin() + t123.sin()),
            -l * (t12.sin() + t123.sin()),
            -l * t123.sin(),
            l * (t1.cos() + t12.cos() + t123.cos()),
            l * (t12.cos() + t123.cos()),
            l * t123.cos(),
        )
    }
}

impl Default for ArmModel {
    fn default() -> Self {
        Self {
            link_length: crate::consts::DEFAULT_LINK_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    const LINK_LENGTH: f64 = 60.0;

    fn finite_difference(model: &ArmModel, joints: [f64; 3], index: usize) -> (f64, f64) {
        const STEP: f64 = 1e-6;

        let mut upper = joints;
        upper[index] += STEP;
        let mut lower = joints;
        lower[index] -= STEP;

        let p_upper = model.forward(&upper.into());
        let p_lower = model.forward(&lower.into());

        (
            (p_upper.x - p_lower.x) / (2.0 * STEP),
            (p_upper.y - p_lower.y) / (2.0 * STEP),
        )
    }

    #[test]
    fn test_forward_outstretched() {
        let model = ArmModel::new(LINK_LENGTH);

        let tip = model.forward(&JointConfig::default());

        assert!((tip.x - 3.0 * LINK_LENGTH).abs() < 1e-9);
        assert!(tip.y.abs() < 1e-9);
    }

    #[test]
    fn test_forward_upright() {
        let model = ArmModel::new(LINK_LENGTH);

        let tip = model.forward(&JointConfig::new(FRAC_PI_2, 0.0, 0.0));

        assert!(tip.x.abs() < 1e-9);
        assert!((tip.y - 3.0 * LINK_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn test_forward_bent() {
        let model = ArmModel::new(LINK_LENGTH);

        // First link up, the remaining two folded back to horizontal.
        let tip = model.forward(&JointConfig::new(FRAC_PI_2, -FRAC_PI_2, 0.0));

        assert!((tip.x - 2.0 * LINK_LENGTH).abs() < 1e-9);
        assert!((tip.y - LINK_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn test_jacobian_matches_finite_difference() {
        let model = ArmModel::new(LINK_LENGTH);

        let configurations = [
            [0.3, 0.5, -0.2],
            [1.0, -0.4, 0.7],
            [-0.8, 0.2, 0.9],
            [2.1, 0.6, -1.3],
        ];

        for joints in configurations {
            let j = model.jacobian(&joints.into());

            for column in 0..3 {
                let (dx, dy) = finite_difference(&model, joints, column);

                assert!(
                    (j[(0, column)] - dx).abs() < 1e-5,
                    "dx/dtheta_{} mismatch at {:?}",
                    column + 1,
                    joints
                );
                assert!(
                    (j[(1, column)] - dy).abs() < 1e-5,
                    "dy/dtheta_{} mismatch at {:?}",
                    column + 1,
                    joints
                );
            }
        }
    }

    #[test]
    fn test_jacobian_column_structure() {
        let model = ArmModel::new(LINK_LENGTH);

        // At the outstretched pose the x-row vanishes and the y-row holds
        // the cumulative link reach per joint.
        let j = model.jacobian(&JointConfig::default());

        assert!(j[(0, 0)].abs() < 1e-9);
        assert!((j[(1, 0)] - 3.0 * LINK_LENGTH).abs() < 1e-9);
        assert!((j[(1, 1)] - 2.0 * LINK_LENGTH).abs() < 1e-9);
        assert!((j[(1, 2)] - LINK_LENGTH).abs() < 1e-9);
    }
}
