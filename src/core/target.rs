use nalgebra::Point2;

/// Motion target for the arm.
///
/// Holds the desired end-effector position in the work plane and the
/// desired net orientation of the arm, the sum of the three joint angles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    /// The point in the work plane.
    pub point: Point2<f64>,
    /// Desired net orientation of the arm.
    pub orientation: f64,
}

impl Target {
    /// Construct a new target.
    pub fn new(x: f64, y: f64, orientation: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            orientation,
        }
    }

    /// Construct a new target from a point, without orientation preference.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            orientation: 0.0,
        }
    }
}

impl Default for Target {
    fn default() -> Self {
        Self {
            point: Point2::origin(),
            orientation: 0.0,
        }
    }
}

impl From<(f64, f64, f64)> for Target {
    fn from((x, y, orientation): (f64, f64, f64)) -> Self {
        Self::new(x, y, orientation)
    }
}

impl From<[f64; 3]> for Target {
    fn from([x, y, orientation]: [f64; 3]) -> Self {
        Self::new(x, y, orientation)
    }
}

impl From<Point2<f64>> for Target {
    fn from(point: Point2<f64>) -> Self {
        Self {
            point,
            orientation: 0.0,
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) [{:.2}rad {:.2}°]",
            self.point.x,
            self.point.y,
            self.orientation,
            self.orientation.to_degrees(),
        )
    }
}
