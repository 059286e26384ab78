pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod forge;
pub mod orchestrator;
pub mod shutdown;

pub use error::{ReleaseBotError, Result};
