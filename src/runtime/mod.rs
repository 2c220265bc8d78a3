pub use self::component::{ArmState, Component, ComponentContext, InitComponent, PostComponent};

mod component;

use std::time::{Duration, Instant};

use tokio::sync::{broadcast, mpsc};

use crate::core::{JointVelocity, Signal};

#[derive(Debug)]
pub enum Error {
    /// The command consumer went away.
    CommandQueueClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CommandQueueClosed => write!(f, "command queue closed"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

pub type Result<T = ()> = std::result::Result<T, Error>;

pub type SignalSender = mpsc::Sender<Signal>;
pub type SignalReceiver = mpsc::Receiver<Signal>;
pub type CommandSender = mpsc::Sender<JointVelocity>;
pub type CommandReceiver = mpsc::Receiver<JointVelocity>;

/// Controller runtime.
///
/// Owns the snapshot state, the component pipeline and the channel
/// endpoints, and drives the pipeline at a fixed tick interval. Input
/// signals are drained without blocking at the start of each tick; ticks
/// without fresh signals run on the previous snapshots.
pub struct Runtime {
    signal_queue: (SignalSender, SignalReceiver),
    command_tx: CommandSender,
    shutdown: (broadcast::Sender<()>, broadcast::Receiver<()>),
    init_components: Vec<Box<dyn InitComponent<crate::Config> + Send>>,
    components: Vec<Box<dyn Component<crate::Config> + Send>>,
    post_components: Vec<Box<dyn PostComponent<crate::Config> + Send>>,
    ctx: ComponentContext,
    state: ArmState,
}

impl Runtime {
    /// Construct the runtime together with the command consumer endpoint.
    pub fn new() -> (Self, CommandReceiver) {
        let signal_queue = mpsc::channel(crate::consts::QUEUE_SIZE_SIGNAL);
        let (command_tx, command_rx) = mpsc::channel(crate::consts::QUEUE_SIZE_COMMAND);

        (
            Self {
                signal_queue,
                command_tx,
                shutdown: broadcast::channel(1),
                init_components: Vec::new(),
                components: Vec::new(),
                post_components: Vec::new(),
                ctx: ComponentContext::default(),
                state: ArmState::default(),
            },
            command_rx,
        )
    }

    /// Signal endpoint for transport integration.
    pub fn signal_sender(&self) -> SignalSender {
        self.signal_queue.0.clone()
    }

    /// Listen for shutdown signal.
    pub fn shutdown_signal(&self) -> broadcast::Receiver<()> {
        self.shutdown.0.subscribe()
    }

    /// Trigger the shutdown signal on interrupt.
    pub fn register_shutdown_signal(&self) {
        debug!("Register shutdown signal");

        let sender = self.shutdown.0.clone();

        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();

            info!("Termination requested");

            sender.send(()).ok();
        });
    }

    /// Add an input component to the pipeline.
    pub fn add_init_component<C>(&mut self, config: crate::Config)
    where
        C: InitComponent<crate::Config> + Send + 'static,
    {
        self.init_components.push(Box::new(C::new(config)));
    }

    /// Add a component to the pipeline.
    pub fn add_component<C>(&mut self, config: crate::Config)
    where
        C: Component<crate::Config> + Send + 'static,
    {
        self.components.push(Box::new(C::new(config)));
    }

    /// Add an output component to the pipeline.
    pub fn add_post_component<C>(&mut self, config: crate::Config)
    where
        C: PostComponent<crate::Config> + Send + 'static,
    {
        self.post_components.push(Box::new(C::new(config)));
    }

    /// Run the component pipeline on a fixed tick interval until shutdown.
    pub async fn run_interval(&mut self, duration: Duration) -> Result {
        let mut interval = tokio::time::interval(duration);
        let mut shutdown = self.shutdown.0.subscribe();

        loop {
            tokio::select! {
                _ = interval.tick() => self.tick()?,
                _ = shutdown.recv() => break,
            }
        }

        Ok(())
    }

    /// Run the pipeline once.
    ///
    /// Components run in order: input, main, output. At most one command
    /// leaves the pipeline per tick.
    fn tick(&mut self) -> Result {
        if self.command_tx.is_closed() {
            return Err(Error::CommandQueueClosed);
        }

        for component in self.init_components.iter_mut() {
            component.init(&mut self.ctx, &mut self.state, &mut self.signal_queue.1);
        }

        for (idx, component) in self.components.iter_mut().enumerate() {
            let tick_start = Instant::now();

            component.tick(&mut self.ctx, &mut self.state);

            if tick_start.elapsed() > crate::consts::COMPONENT_DELAY_THRESHOLD {
                warn!("Component {} is delaying execution", idx);
            }
        }

        for component in self.post_components.iter() {
            component.finalize(&mut self.ctx, &mut self.state, &self.command_tx);
        }

        self.ctx.post_tick();

        Ok(())
    }
}
