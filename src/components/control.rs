use crate::{
    runtime::{ArmState, CommandSender, ComponentContext, PostComponent},
    Config,
};

/// Publishes the composed velocity command.
///
/// Takes the command out of the tick state so at most one instruction
/// leaves the pipeline per tick.
pub struct Control;

impl PostComponent<Config> for Control {
    fn new(_config: Config) -> Self
    where
        Self: Sized,
    {
        Self
    }

    fn finalize(&self, _ctx: &mut ComponentContext, state: &mut ArmState, command_tx: &CommandSender) {
        if let Some(velocity_command) = state.velocity_command.take() {
            if let Err(e) = command_tx.try_send(velocity_command) {
                log::error!("Failed to send velocity command: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::JointVelocity;

    #[test]
    fn test_publish_once_per_tick() {
        let (command_tx, mut command_rx) = tokio::sync::mpsc::channel(16);
        let mut ctx = ComponentContext::default();
        let control = Control::new(Config::default());

        let mut state = ArmState {
            velocity_command: Some(JointVelocity::new(0.1, 0.2, 0.3)),
            ..Default::default()
        };

        control.finalize(&mut ctx, &mut state, &command_tx);

        assert_eq!(command_rx.try_recv().unwrap(), JointVelocity::new(0.1, 0.2, 0.3));
        assert!(state.velocity_command.is_none());

        // A tick that resolved nothing publishes nothing.
        control.finalize(&mut ctx, &mut state, &command_tx);

        assert!(command_rx.try_recv().is_err());
    }
}
