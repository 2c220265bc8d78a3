/// The `armctl` library implements a redundancy-resolving differential
/// inverse-kinematics controller for a planar three-link manipulator.
///
/// The arm has three controllable joints against a two-dimensional task,
/// leaving one redundant degree of freedom. Each control tick the resolver
/// drives the end effector toward the target position as the primary
/// objective and regulates the net arm orientation inside the null space
/// of the primary task.
///
/// The `core` module holds the typed objects crossing the tick boundary,
/// `kinematics` the forward model and Jacobian, `solver` the damped
/// least-squares solve and null-space projection, and `runtime` the
/// component pipeline executing once per tick. The `armctld` binary wires
/// these together into a daemon.
pub mod components;
pub mod core;
pub mod kinematics;
pub mod solver;

#[macro_use]
extern crate log;

mod config;

pub use self::config::*;

pub mod runtime;
pub use self::runtime::Error;
pub use self::runtime::Runtime;

/// Runtime module containing various constants.
pub mod consts {
    use std::time::Duration;

    /// Runtime version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default length of each of the three arm links, in source units.
    pub const DEFAULT_LINK_LENGTH: f64 = 60.0;

    /// Default damping constant for the least-squares solve.
    pub const DEFAULT_DAMPING: f64 = 10.0;

    /// Default gain applied to the broadcast orientation error.
    pub const DEFAULT_ORIENTATION_GAIN: f64 = 2.0;

    /// Control pipeline tick interval.
    pub const CONTROL_PIPELINE_INTERVAL: Duration = Duration::from_millis(10);

    /// Component delay threshold.
    pub const COMPONENT_DELAY_THRESHOLD: Duration = Duration::from_millis(1);

    /// Default queue size for input signals.
    pub const QUEUE_SIZE_SIGNAL: usize = 16;

    /// Default queue size for velocity commands.
    pub const QUEUE_SIZE_COMMAND: usize = 16;
}

/// Start the controller daemon.
///
/// This function constructs the runtime, installs the control pipeline and
/// runs it on the configured tick interval until the shutdown signal fires.
pub async fn start_daemon(config: Config) -> runtime::Result {
    use components::{Acquisition, Control, Resolver};

    let tick_interval = std::time::Duration::from_millis(config.tick_interval_ms);

    let (mut runtime, mut command_rx) = Runtime::new();

    runtime.add_init_component::<Acquisition>(config.clone());
    runtime.add_component::<Resolver>(config.clone());
    runtime.add_post_component::<Control>(config);

    runtime.register_shutdown_signal();

    // Commands belong to the transport collaborator. Until one claims the
    // endpoint the daemon reports them on the log.
    tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            debug!("Motion: {}", command);
        }
    });

    runtime.run_interval(tick_interval).await
}
