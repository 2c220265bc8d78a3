use nalgebra::Vector3;

/// Joint velocity instruction.
///
/// The sole output of the controller, delivered once per tick. Whether the
/// instruction has effect depends on the motion device itself; no clipping
/// or rate limiting is applied on this side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointVelocity {
    rates: Vector3<f64>,
}

impl JointVelocity {
    /// Construct a new velocity instruction.
    pub fn new(rate_1: f64, rate_2: f64, rate_3: f64) -> Self {
        Self {
            rates: Vector3::new(rate_1, rate_2, rate_3),
        }
    }

    /// Velocity of a joint by index.
    #[inline]
    pub fn rate(&self, index: usize) -> f64 {
        self.rates[index]
    }

    /// Rates as a joint-space vector.
    #[inline]
    pub fn vector(&self) -> Vector3<f64> {
        self.rates
    }

    /// Whether the instruction commands no motion at all.
    pub fn is_stationary(&self) -> bool {
        self.rates == Vector3::zeros()
    }
}

impl Default for JointVelocity {
    fn default() -> Self {
        Self {
            rates: Vector3::zeros(),
        }
    }
}

impl From<Vector3<f64>> for JointVelocity {
    fn from(rates: Vector3<f64>) -> Self {
        Self { rates }
    }
}

impl std::ops::Add for JointVelocity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rates: self.rates + rhs.rates,
        }
    }
}

impl std::fmt::Display for JointVelocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:>+5.2}, {:>+5.2}, {:>+5.2}) rad/s",
            self.rates[0], self.rates[1], self.rates[2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elementwise_compose() {
        let primary = JointVelocity::new(0.1, -0.2, 0.3);
        let secondary = JointVelocity::new(0.05, 0.2, -0.1);

        let composed = primary + secondary;

        assert!((composed.rate(0) - 0.15).abs() < 1e-12);
        assert!(composed.rate(1).abs() < 1e-12);
        assert!((composed.rate(2) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_stationary() {
        assert!(JointVelocity::default().is_stationary());
        assert!(!JointVelocity::new(0.0, 1e-9, 0.0).is_stationary());
    }
}
