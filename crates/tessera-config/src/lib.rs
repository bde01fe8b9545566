//! Configuration for tessera.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Every section defaults, so partial files load.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, parse_point};
pub use config::{
    Config, DebugConfig, MovementSettings, OctaveConfig, PlayerConfig, WorldConfig,
};
pub use error::ConfigError;
