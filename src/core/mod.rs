pub use joints::JointConfig;
pub use motion::JointVelocity;
pub use target::Target;

mod joints;
mod motion;
mod target;

/// Typed object crossing the per-tick boundary.
///
/// Signals arrive from the transport collaborator at its own pace. The
/// runtime keeps the last received value of each kind; a tick without a
/// fresh signal reuses the previous snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Signal {
    /// Joint encoder snapshot.
    Joints(JointConfig),
    /// Target setpoint.
    Target(Target),
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Joints(joints) => write!(f, "Joints {}", joints),
            Signal::Target(target) => write!(f, "Target {}", target),
        }
    }
}
