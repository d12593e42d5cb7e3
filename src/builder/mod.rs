//! Builder API for ergonomic configuration.
//!
//! Configurations usually arrive as JSON. When they are written in code
//! instead, [`ConfigBuilder`] and the [`machine_config!`](crate::machine_config)
//! macro avoid spelling out the nested data by hand.

pub mod config;
pub mod macros;

pub use config::ConfigBuilder;
