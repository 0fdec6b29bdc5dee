pub mod config;
pub mod error;
pub mod hooks;
pub mod model;
pub mod program;

pub use config::Setup;
pub use error::Error;
pub use model::{Cell, Machine};
pub use program::{Program, Word};
