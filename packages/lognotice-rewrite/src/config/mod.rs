//! Rewrite configuration
//!
//! Built-in defaults reproduce the LogNotice → LogMsg migration. A YAML file
//! can override any field:
//!
//! ```yaml
//! version: 1
//! replacement_api: LogMsg
//! literal_separator: ", "
//! strict_parse: false
//! ```

pub mod error;
pub mod io;
pub mod rewrite_config;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use rewrite_config::RewriteConfig;
