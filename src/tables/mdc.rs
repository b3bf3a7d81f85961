//! Major Diagnostic Category display-name table.

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::normalize::normalize;

/// A parsed MDC row.
#[derive(Debug, Clone)]
pub struct MdcRow {
    /// Two-digit MDC code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// Lookup table mapping MDC code to display name.
#[derive(Debug, Default)]
pub struct MdcTable {
    names: FxHashMap<String, String>,
}

impl MdcTable {
    /// Build the table from parsed rows.
    pub fn build(rows: Vec<MdcRow>) -> Result<Self> {
        let mut names = FxHashMap::default();
        for row in rows {
            let code = normalize(&row.code);
            if code.is_empty() {
                continue;
            }
            names.insert(code, row.name);
        }
        Ok(Self { names })
    }

    /// Look up the display name for an MDC code. Falls back to the code
    /// itself when the name table has no entry, so callers always get
    /// something displayable.
    #[must_use]
    pub fn name(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Number of loaded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
