//! Sentinel DRG codes.
//!
//! The source exercises two sentinels consistently (`26509` ungroupable,
//! `26539` invalid age) but the Thai DRG reference defines more under the
//! same `265xx` namespace (e.g. sex-mismatch). Rather than hard-coding just
//! the two, the engine scans the loaded DRG catalog for any code under the
//! configured prefix and falls back to the always-present literals when the
//! catalog doesn't carry them.

use rustc_hash::FxHashSet;

use super::drg::DrgTable;

/// Default ungroupable-PDx / unresolved-DC / no-matching-DRG sentinel.
pub const DEFAULT_UNGROUPABLE: &str = "26509";
/// Default invalid-age sentinel.
pub const DEFAULT_INVALID_AGE: &str = "26539";
/// Default sex-required-but-missing/invalid sentinel.
pub const DEFAULT_INVALID_SEX: &str = "26549";

/// The sentinel namespace discovered at construction time.
#[derive(Debug, Clone)]
pub struct SentinelTable {
    /// Sentinel used for ungroupable PDx, unresolved DC, or no matching DRG.
    pub ungroupable: String,
    /// Sentinel used when age is out of range.
    pub invalid_age: String,
    /// Sentinel used when sex is required but missing or invalid.
    pub invalid_sex: String,
    /// Every sentinel code found in the catalog under the configured prefix.
    pub all: FxHashSet<String>,
}

impl SentinelTable {
    /// Build from the loaded DRG catalog and a namespace prefix (e.g. `"265"`).
    #[must_use]
    pub fn from_catalog(drg: &DrgTable, prefix: &str) -> Self {
        let all: FxHashSet<String> = drg
            .codes()
            .filter(|code| code.starts_with(prefix))
            .map(str::to_string)
            .collect();

        Self {
            ungroupable: DEFAULT_UNGROUPABLE.to_string(),
            invalid_age: DEFAULT_INVALID_AGE.to_string(),
            invalid_sex: DEFAULT_INVALID_SEX.to_string(),
            all,
        }
    }

    /// Whether `code` is a known sentinel.
    #[must_use]
    pub fn is_sentinel(&self, code: &str) -> bool {
        self.all.contains(code)
            || code == self.ungroupable
            || code == self.invalid_age
            || code == self.invalid_sex
    }
}
