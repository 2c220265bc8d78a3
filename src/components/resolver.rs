use crate::{
    kinematics::ArmModel,
    runtime::{ArmState, Component, ComponentContext},
    solver::IkResolver,
    Config,
};

/// Runs the differential IK resolve on the current snapshots.
///
/// The resolve itself is pure; this component only feeds it the tick state
/// and stores the outcome for the output stage.
pub struct Resolver {
    resolver: IkResolver,
}

impl Component<Config> for Resolver {
    fn new(config: Config) -> Self
    where
        Self: Sized,
    {
        log::debug!("Starting resolver component");

        Self {
            resolver: IkResolver::new(ArmModel::new(config.link_length))
                .with_damping(config.damping)
                .with_orientation_gain(config.orientation_gain),
        }
    }

    fn tick(&mut self, _ctx: &mut ComponentContext, state: &mut ArmState) {
        let effector = self.resolver.model().forward(&state.joints);

        trace!(
            "Effector point: X {:>+5.2} Y {:>+5.2}; Target: {}",
            effector.x,
            effector.y,
            state.target
        );

        state.velocity_command = self.resolver.resolve(&state.joints, &state.target);

        match &state.velocity_command {
            Some(velocity_command) => debug!("Velocity command: {}", velocity_command),
            None => error!("Damped inversion failed; no command this tick"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::{JointConfig, Target};

    #[test]
    fn test_command_produced_every_tick() {
        let mut resolver = Resolver::new(Config::default());
        let mut ctx = ComponentContext::default();
        let mut state = ArmState {
            joints: JointConfig::default(),
            target: Target::new(170.0, 10.0, 0.1),
            velocity_command: None,
        };

        resolver.tick(&mut ctx, &mut state);
        let first = state.velocity_command.expect("no command");

        // Unchanged inputs resolve to the identical command next tick.
        resolver.tick(&mut ctx, &mut state);
        let second = state.velocity_command.expect("no command");

        assert_eq!(first, second);
        assert!(!first.is_stationary());
    }
}
