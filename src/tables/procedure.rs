//! Procedure attribute table.

use rustc_hash::FxHashMap;

use crate::error::{Result, TableError};
use crate::normalize::normalize;

/// A parsed procedure row.
#[derive(Debug, Clone)]
pub struct ProcedureRow {
    /// Raw code, normalized on insertion. May be purely numeric.
    pub code: String,
    /// Whether this is an operating-room procedure.
    pub is_or: bool,
    /// Disease Cluster this procedure forces, if any.
    pub dc_override: Option<String>,
}

/// Resolved attributes of a procedure code.
#[derive(Debug, Clone)]
pub struct ProcedureEntry {
    /// Whether this is an operating-room procedure.
    pub is_or: bool,
    /// Disease Cluster this procedure forces, if any.
    pub dc_override: Option<String>,
}

/// Lookup table for procedure entries, keyed by canonical code.
#[derive(Debug, Default)]
pub struct ProcedureTable {
    entries: FxHashMap<String, ProcedureEntry>,
}

impl ProcedureTable {
    /// Build the table from parsed rows, rejecting duplicate canonical codes.
    pub fn build(rows: Vec<ProcedureRow>) -> Result<Self> {
        let mut entries = FxHashMap::default();
        for row in rows {
            let canonical = normalize(&row.code);
            if canonical.is_empty() {
                continue;
            }
            let entry = ProcedureEntry {
                is_or: row.is_or,
                dc_override: row.dc_override,
            };
            if entries.insert(canonical.clone(), entry).is_some() {
                return Err(TableError::DuplicateKey {
                    table: "procedure",
                    key: canonical,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Look up an entry by canonical code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&ProcedureEntry> {
        self.entries.get(code)
    }

    /// Number of loaded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
