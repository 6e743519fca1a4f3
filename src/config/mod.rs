//! Store runtime-config tracking.
//!
//! # Data Flow
//! ```text
//! store status endpoint, GET /config (JSON)
//!     → manager.rs (fetch over the owned client)
//!     → schema.rs (decode into StoreConfig)
//!     → atomic swap of the held Arc<StoreConfig>
//!     → callers read thresholds through the accessors
//! ```
//!
//! # Design Decisions
//! - A snapshot is immutable once decoded; a refresh replaces the whole value
//! - Reads are lock-free; a reader sees the old snapshot or the new one, never a mix
//! - Threshold accessors substitute defaults instead of failing

pub mod manager;
pub mod schema;
pub mod units;

pub use manager::StoreConfigManager;
pub use schema::StoreConfig;
