pub use acquisition::Acquisition;
pub use control::Control;
pub use resolver::Resolver;

mod acquisition;
mod control;
mod resolver;
