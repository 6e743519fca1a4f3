//! Live tracking of a storage node's runtime configuration.

pub mod config;
pub mod net;

pub use config::manager::{LoadError, StoreConfigManager};
pub use config::schema::{CoprocessorConfig, StoreConfig};
pub use net::tls::SecurityConfig;
