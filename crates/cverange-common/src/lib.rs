//! CVERange Common - shared plumbing for CVERange tools
//!
//! - `EnrichConfig`: explicit run configuration handed to components
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod logging;

pub use config::EnrichConfig;
pub use logging::{init_logging, init_logging_with_config, LogConfig, LogFormat};
