pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{BufferConsole, StdoutConsole};
pub use config::FixtureConfig;
pub use crate::core::{
    engine::FixtureEngine,
    program::{CallTreeProgram, ProcessorProgram},
};
pub use domain::model::Container;
pub use utils::error::{FixtureError, Result};
