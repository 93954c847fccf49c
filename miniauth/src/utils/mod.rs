pub mod config;
pub mod consts;

pub use config::{Config, ConfigError, ConfigProvider};
pub use consts::*;
