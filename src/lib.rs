pub mod coordinator;
pub mod dining;
pub mod driver;
pub mod error;
pub mod primitives;
pub mod readers_writers;
pub mod settings;

pub use coordinator::{Actor, Coordinator, Mode, Role};
pub use error::Error;
pub use settings::Settings;
