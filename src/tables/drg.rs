//! DRG catalog: the final lookup keyed on `{mdc, dc_suffix, pcl_digit}`.

use rustc_hash::FxHashMap;

use crate::error::{Result, TableError};
use crate::normalize::normalize;

/// A parsed DRG catalog row.
#[derive(Debug, Clone)]
pub struct DrgRow {
    /// Five-digit DRG code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Base relative weight.
    pub rw: f64,
    /// Day-case relative weight.
    pub rw0d: f64,
    /// Typical/weighted length of stay.
    pub wtlos: f64,
    /// Outlier threshold, in days.
    pub ot: i64,
}

/// Resolved DRG catalog entry.
#[derive(Debug, Clone, Default)]
pub struct DrgEntry {
    /// Five-digit code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Base relative weight.
    pub rw: f64,
    /// Day-case relative weight.
    pub rw0d: f64,
    /// Typical/weighted length of stay.
    pub wtlos: f64,
    /// Outlier threshold, in days.
    pub ot: i64,
}

/// The typed decomposition of a five-digit DRG code: `DD` (MDC) + `SS` (DC
/// suffix) + `X` (PCL tier digit). Built once at load time so DRG selection's
/// "demote PCL if necessary" loop is a direct map lookup rather than repeated
/// string concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrgKey {
    /// Four-digit Disease Cluster (`MDC` + suffix).
    pub dc: String,
    /// PCL tier digit, `'0'..='4'` or a catch-all such as `'9'`.
    pub pcl_digit: char,
}

/// The DRG catalog, indexed both by full code and by `{dc, pcl_digit}` for
/// Stage F's selection loop.
#[derive(Debug, Default)]
pub struct DrgTable {
    by_code: FxHashMap<String, DrgEntry>,
    by_key: FxHashMap<DrgKey, String>,
}

impl DrgTable {
    /// Build the table from parsed rows, rejecting duplicate codes.
    pub fn build(rows: Vec<DrgRow>) -> Result<Self> {
        let mut by_code = FxHashMap::default();
        let mut by_key = FxHashMap::default();

        for row in rows {
            let code = normalize(&row.code);
            if code.len() != 5 {
                return Err(TableError::SchemaMismatch {
                    table: "drg",
                    reason: format!("code {code:?} is not five digits"),
                });
            }

            let entry = DrgEntry {
                code: code.clone(),
                name: row.name,
                rw: row.rw,
                rw0d: row.rw0d,
                wtlos: row.wtlos,
                ot: row.ot,
            };

            let dc = code[0..4].to_string();
            let pcl_digit = code.chars().nth(4).expect("checked length above");
            let key = DrgKey { dc, pcl_digit };

            if by_code.insert(code.clone(), entry).is_some() {
                return Err(TableError::DuplicateKey { table: "drg", key: code });
            }
            by_key.insert(key, code);
        }

        if by_code.is_empty() {
            return Err(TableError::MissingTable("drg"));
        }

        Ok(Self { by_code, by_key })
    }

    /// Look up by full five-digit code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&DrgEntry> {
        self.by_code.get(code)
    }

    /// Look up by disease cluster and PCL tier digit.
    #[must_use]
    pub fn get_by_key(&self, dc: &str, pcl_digit: char) -> Option<&DrgEntry> {
        let code = self.by_key.get(&DrgKey {
            dc: dc.to_string(),
            pcl_digit,
        })?;
        self.by_code.get(code)
    }

    /// Iterate all codes in the catalog.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.by_code.keys().map(String::as_str)
    }

    /// Number of loaded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
