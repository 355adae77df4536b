//! Configuration loading for the literal formatter.
//!
//! Settings are read from `conf/config.toml` if present. The file is grouped
//! into `[formatting]`, `[output]` and `[logging]` tables; anything missing or
//! invalid falls back to defaults so the tool still runs.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel};
