use nalgebra::Vector3;

/// Measured configuration of the three arm joints.
///
/// Angles are in radians, measured as cumulative angles from the base.
/// The arity is fixed by the type; a wrong-length snapshot cannot be
/// represented.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointConfig {
    angles: Vector3<f64>,
}

impl JointConfig {
    /// Construct a new joint configuration.
    pub fn new(theta_1: f64, theta_2: f64, theta_3: f64) -> Self {
        Self {
            angles: Vector3::new(theta_1, theta_2, theta_3),
        }
    }

    /// Joint angle by index.
    #[inline]
    pub fn angle(&self, index: usize) -> f64 {
        self.angles[index]
    }

    /// Angles as a joint-space vector.
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        self.angles
    }

    /// Net orientation of the arm, the arithmetic sum of the joint angles.
    pub fn heading(&self) -> f64 {
        self.angles.sum()
    }
}

impl Default for JointConfig {
    fn default() -> Self {
        Self {
            angles: Vector3::zeros(),
        }
    }
}

impl From<[f64; 3]> for JointConfig {
    fn from([theta_1, theta_2, theta_3]: [f64; 3]) -> Self {
        Self::new(theta_1, theta_2, theta_3)
    }
}

impl From<(f64, f64, f64)> for JointConfig {
    fn from((theta_1, theta_2, theta_3): (f64, f64, f64)) -> Self {
        Self::new(theta_1, theta_2, theta_3)
    }
}

impl From<Vector3<f64>> for JointConfig {
    fn from(angles: Vector3<f64>) -> Self {
        Self { angles }
    }
}

impl std::fmt::Display for JointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}rad {:.2}°, {:.2}rad {:.2}°, {:.2}rad {:.2}°]",
            self.angles[0],
            self.angles[0].to_degrees(),
            self.angles[1],
            self.angles[1].to_degrees(),
            self.angles[2],
            self.angles[2].to_degrees(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_angle_sum() {
        let joints = JointConfig::new(0.2, -0.5, 1.1);

        assert!((joints.heading() - 0.8).abs() < 1e-12);
    }
}
