pub mod blueprint;
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod operations;
pub mod presets;
pub mod track;
pub mod xml;

pub use error::{LiftupError, Result};
