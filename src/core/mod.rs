pub mod call_tree;
pub mod engine;
pub mod processor;
pub mod program;

pub use crate::domain::model::{CastTo, Container};
pub use crate::domain::ports::{Console, Program};
pub use crate::utils::error::Result;
