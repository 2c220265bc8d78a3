use nalgebra::{Matrix2, Matrix2x3, Matrix3, Matrix3x2, Vector2, Vector3};

use crate::core::{JointConfig, JointVelocity, Target};
use crate::kinematics::ArmModel;

/// Damped least-squares pseudo-inverse of the position Jacobian.
///
/// Solves J* = Jᵀ·(J·Jᵀ + k²·I)⁻¹. The damping constant bounds the output
/// near singular configurations at the cost of exact tracking. The inner
/// 2×2 inversion goes through an SVD pseudo-inverse so an exactly singular
/// J·Jᵀ degrades instead of failing, even with zero damping.
pub fn damped_pseudo_inverse(j: &Matrix2x3<f64>, damping: f64) -> Option<Matrix3x2<f64>> {
    let inner = j * j.transpose() + Matrix2::identity() * damping.powi(2);

    inner
        .pseudo_inverse(f64::EPSILON)
        .ok()
        .map(|inner_inv| j.transpose() * inner_inv)
}

/// Null-space projector N = I − J*·J.
///
/// Joint velocities sent through N produce zero tip velocity to first
/// order; the projector exposes the slack the redundant joint buys.
pub fn null_space_projector(j: &Matrix2x3<f64>, j_star: &Matrix3x2<f64>) -> Matrix3<f64> {
    Matrix3::identity() - j_star * j
}

/// Differential inverse-kinematics resolver.
///
/// Pure per-tick function from a measured configuration and a target to a
/// joint velocity command. No state is carried across ticks; the Jacobian,
/// its damped inverse and the null-space projector are recomputed on every
/// call.
pub struct IkResolver {
    model: ArmModel,
    damping: f64,
    gain: Matrix2<f64>,
    orientation_gain: f64,
}

impl IkResolver {
    /// Construct a resolver with the default gains.
    pub fn new(model: ArmModel) -> Self {
        Self {
            model,
            damping: crate::consts::DEFAULT_DAMPING,
            gain: Matrix2::identity(),
            orientation_gain: crate::consts::DEFAULT_ORIENTATION_GAIN,
        }
    }

    /// Replace the damping constant.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Replace the orientation error gain.
    pub fn with_orientation_gain(mut self, orientation_gain: f64) -> Self {
        self.orientation_gain = orientation_gain;
        self
    }

    /// The kinematic model driven by this resolver.
    #[inline]
    pub fn model(&self) -> &ArmModel {
        &self.model
    }

    /// Primary task: joint velocity reducing the tip position error.
    fn solve_primary(&self, j_star: &Matrix3x2<f64>, error: &Vector2<f64>) -> Vector3<f64> {
        j_star * self.gain * error
    }

    /// Secondary task: regulate the net arm orientation inside the null
    /// space of the primary task.
    ///
    /// The scalar orientation error is broadcast identically into all three
    /// joint slots and scaled after the broadcast, then projected. The
    /// broadcast mirrors the deployed control law; it is not the gradient
    /// of an orientation objective and must not be replaced with one.
    fn project_secondary(&self, projector: &Matrix3<f64>, orientation_error: f64) -> Vector3<f64> {
        let q0_dot = Vector3::repeat(orientation_error) * self.orientation_gain;

        projector * q0_dot
    }

    /// Resolve one control tick.
    ///
    /// Returns `None` when the damped inversion fails. The caller publishes
    /// no command for that tick and the next tick proceeds independently.
    pub fn resolve(&self, joints: &JointConfig, target: &Target) -> Option<JointVelocity> {
        let j = self.model.jacobian(joints);
        let j_star = damped_pseudo_inverse(&j, self.damping)?;

        let position_error = target.point - self.model.forward(joints);
        let primary = self.solve_primary(&j_star, &position_error);

        let projector = null_space_projector(&j, &j_star);
        let secondary = self.project_secondary(&projector, target.orientation - joints.heading());

        Some(JointVelocity::from(primary + secondary))
    }
}
