//! Complication/comorbidity exclusion table.
//!
//! Encodes "given a principal diagnosis in exclusion group G, secondary
//! diagnosis S is not a complication" as a single membership predicate. Stage
//! D (CC/MCC detection) consumes this through [`CcExclusionTable::excludes`]
//! and never inlines the exclusion algebra itself.

use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::normalize::normalize;

/// A parsed CC-exclusion row: principal-diagnosis exclusion group paired with
/// a secondary diagnosis code that must not count as a complication against it.
#[derive(Debug, Clone)]
pub struct CcExclusionRow {
    /// Exclusion group of the principal diagnosis.
    pub pdx_group: String,
    /// Secondary diagnosis code excluded for that group.
    pub sdx_code: String,
}

/// Set-membership relation `(pdx_exclusion_group, sdx_code) -> excluded`.
#[derive(Debug, Default)]
pub struct CcExclusionTable {
    pairs: FxHashSet<(String, String)>,
}

impl CcExclusionTable {
    /// Build the table from parsed rows. Duplicate pairs are harmless
    /// (idempotent set insertion) and not rejected, since the relation is
    /// pure membership rather than a keyed dictionary.
    pub fn build(rows: Vec<CcExclusionRow>) -> Result<Self> {
        let mut pairs = FxHashSet::default();
        for row in rows {
            let group = normalize(&row.pdx_group);
            let sdx = normalize(&row.sdx_code);
            if group.is_empty() || sdx.is_empty() {
                continue;
            }
            pairs.insert((group, sdx));
        }
        Ok(Self { pairs })
    }

    /// Whether `sdx_code` is excluded as a complication given `pdx_group`.
    #[must_use]
    pub fn excludes(&self, pdx_group: &str, sdx_code: &str) -> bool {
        self.pairs.contains(&(pdx_group.to_string(), sdx_code.to_string()))
    }

    /// Number of loaded exclusion pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_only_listed_pairs() {
        let table = CcExclusionTable::build(vec![CcExclusionRow {
            pdx_group: "E11".into(),
            sdx_code: "E118".into(),
        }])
        .unwrap();

        assert!(table.excludes("E11", "E118"));
        assert!(!table.excludes("E11", "I10"));
        assert!(!table.excludes("E10", "E118"));
    }
}
