//! Build-time constants and run configuration.

pub mod config;
pub mod constants;

pub use config::{GameConfig, SpeedPolicy};
pub use constants::*;
