use crate::core::{JointConfig, JointVelocity, Target};

use super::{CommandSender, SignalReceiver};

/// Latest-or-previous snapshot state threaded through the tick.
///
/// The slots keep their previous value whenever no new signal arrived;
/// stale data is tolerated, not an error. State is owned by the runtime
/// and handed to each component in pipeline order.
#[derive(Default)]
pub struct ArmState {
    /// Most recent joint encoder snapshot.
    pub joints: JointConfig,
    /// Most recent target setpoint.
    pub target: Target,
    /// Velocity command produced this tick, if any.
    pub velocity_command: Option<JointVelocity>,
}

/// Component context.
///
/// The component context is provided to each component on each tick. The
/// component context is used to communicate within the component pipeline.
pub struct ComponentContext {
    /// Last tick.
    last_tick: std::time::Instant,
    /// Iteration count.
    iteration: u64,
}

impl ComponentContext {
    /// Retrieve the tick delta.
    pub fn delta(&self) -> std::time::Duration {
        self.last_tick.elapsed()
    }

    /// Retrieve the iteration count.
    #[inline]
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Called after all components are ticked.
    pub(crate) fn post_tick(&mut self) {
        self.last_tick = std::time::Instant::now();
        self.iteration += 1;
    }
}

impl Default for ComponentContext {
    fn default() -> Self {
        Self {
            last_tick: std::time::Instant::now(),
            iteration: 0,
        }
    }
}

pub trait InitComponent<Cnf: Clone> {
    /// Construct a new component.
    ///
    /// This method will be called once on startup.
    /// The component should use this method to initialize itself.
    fn new(config: Cnf) -> Self
    where
        Self: Sized;

    /// Initialize the tick.
    ///
    /// This method will be called at the start of each tick, before the
    /// main components run. It is the only place input signals are read.
    fn init(&mut self, ctx: &mut ComponentContext, state: &mut ArmState, signal_rx: &mut SignalReceiver);
}

pub trait Component<Cnf: Clone> {
    /// Construct a new component.
    ///
    /// This method will be called once on startup.
    /// The component should use this method to initialize itself.
    fn new(config: Cnf) -> Self
    where
        Self: Sized;

    /// Tick the component.
    ///
    /// This method will be called on each tick of the runtime.
    /// How often the runtime ticks is determined by the runtime configuration.
    fn tick(&mut self, ctx: &mut ComponentContext, state: &mut ArmState);
}

pub trait PostComponent<Cnf: Clone> {
    /// Construct a new component.
    ///
    /// This method will be called once on startup.
    /// The component should use this method to initialize itself.
    fn new(config: Cnf) -> Self
    where
        Self: Sized;

    /// Finalize the tick.
    ///
    /// This method will be called after all main components have run. It
    /// is the only place commands leave the pipeline.
    fn finalize(&self, ctx: &mut ComponentContext, state: &mut ArmState, command_tx: &CommandSender);
}
