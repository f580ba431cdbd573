//! Configuration loading for SwipeTile

pub mod parser;

pub use parser::{default_config_path, ConfigError, ConfigLoader};
