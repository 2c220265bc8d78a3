use crate::{
    core::Signal,
    runtime::{ArmState, ComponentContext, InitComponent, SignalReceiver},
    Config,
};

/// Drains pending input signals into the tick state.
///
/// Reads are non-blocking; a tick without a fresh snapshot retains the
/// previous value. When several snapshots of the same kind queued up since
/// the last tick only the newest survives.
pub struct Acquisition;

impl InitComponent<Config> for Acquisition {
    fn new(_config: Config) -> Self
    where
        Self: Sized,
    {
        log::debug!("Starting acquisition component");

        Self
    }

    fn init(
        &mut self,
        _ctx: &mut ComponentContext,
        state: &mut ArmState,
        signal_rx: &mut SignalReceiver,
    ) {
        while let Ok(signal) = signal_rx.try_recv() {
            trace!("Signal: {}", signal);

            match signal {
                Signal::Joints(joints) => state.joints = joints,
                Signal::Target(target) => state.target = target,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::{JointConfig, Target};

    #[test]
    fn test_snapshots_applied_in_arrival_order() {
        let (signal_tx, mut signal_rx) = tokio::sync::mpsc::channel(16);
        let mut state = ArmState::default();
        let mut ctx = ComponentContext::default();
        let mut acquisition = Acquisition::new(Config::default());

        signal_tx
            .try_send(Signal::Joints(JointConfig::new(0.1, 0.2, 0.3)))
            .unwrap();
        signal_tx
            .try_send(Signal::Target(Target::new(100.0, 50.0, 0.4)))
            .unwrap();
        signal_tx
            .try_send(Signal::Target(Target::new(120.0, 40.0, 0.2)))
            .unwrap();

        acquisition.init(&mut ctx, &mut state, &mut signal_rx);

        assert_eq!(state.joints, JointConfig::new(0.1, 0.2, 0.3));
        assert_eq!(state.target, Target::new(120.0, 40.0, 0.2));
    }

    #[test]
    fn test_stale_snapshots_retained() {
        let (_signal_tx, mut signal_rx) = tokio::sync::mpsc::channel(16);
        let mut state = ArmState {
            joints: JointConfig::new(0.5, 0.6, 0.7),
            target: Target::new(90.0, 10.0, 0.0),
            velocity_command: None,
        };
        let mut ctx = ComponentContext::default();
        let mut acquisition = Acquisition::new(Config::default());

        // No signals this tick; the previous snapshots must survive.
        acquisition.init(&mut ctx, &mut state, &mut signal_rx);

        assert_eq!(state.joints, JointConfig::new(0.5, 0.6, 0.7));
        assert_eq!(state.target, Target::new(90.0, 10.0, 0.0));
    }
}
