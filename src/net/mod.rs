//! Outbound transport construction.

pub mod tls;

pub use tls::SecurityConfig;
