//! Store configuration schema definitions.
//!
//! Mirrors the JSON document a store serves at its `/config` status
//! endpoint. Only the coprocessor section is decoded; everything else in
//! the document is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::units;

/// Default region max size in MB.
pub(crate) const DEFAULT_REGION_MAX_SIZE: u64 = 144;
/// Default region split size in MB.
pub(crate) const DEFAULT_REGION_SPLIT_SIZE: u64 = 96;
/// Default region max keys.
pub(crate) const DEFAULT_REGION_MAX_KEYS: u64 = 1_440_000;
/// Default region split keys.
pub(crate) const DEFAULT_REGION_SPLIT_KEYS: u64 = 960_000;

/// One point-in-time configuration fetched from a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Region sizing/splitting thresholds.
    pub coprocessor: CoprocessorConfig,
}

/// The coprocessor section of a store's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CoprocessorConfig {
    /// Size threshold above which a region is split, with unit (e.g. "144MB").
    pub region_max_size: String,

    /// Target size of the pieces a region is split into, with unit.
    pub region_split_size: String,

    /// Key-count threshold above which a region is split.
    ///
    /// Zero means the store did not report a value; the wire format has no
    /// explicit unset marker for integers.
    pub region_max_keys: u64,

    /// Target key count of the pieces a region is split into.
    pub region_split_keys: u64,
}

impl StoreConfig {
    /// Max region size in MB, falling back to the default when the store
    /// reported nothing or an unparseable value.
    pub fn region_max_size(&self) -> u64 {
        if self.coprocessor.region_max_size.is_empty() {
            return DEFAULT_REGION_MAX_SIZE;
        }
        units::parse_mb_from_text(&self.coprocessor.region_max_size, DEFAULT_REGION_MAX_SIZE)
    }

    /// Region split size in MB.
    pub fn region_split_size(&self) -> u64 {
        if self.coprocessor.region_split_size.is_empty() {
            return DEFAULT_REGION_SPLIT_SIZE;
        }
        units::parse_mb_from_text(&self.coprocessor.region_split_size, DEFAULT_REGION_SPLIT_SIZE)
    }

    /// Max region key count.
    pub fn region_max_keys(&self) -> u64 {
        if self.coprocessor.region_max_keys == 0 {
            return DEFAULT_REGION_MAX_KEYS;
        }
        self.coprocessor.region_max_keys
    }

    /// Region split key count.
    pub fn region_split_keys(&self) -> u64 {
        if self.coprocessor.region_split_keys == 0 {
            return DEFAULT_REGION_SPLIT_KEYS;
        }
        self.coprocessor.region_split_keys
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => f.write_str("<nil>"),
        }
    }
}
