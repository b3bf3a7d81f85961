//! ICD-10 attribute table.

use rustc_hash::FxHashMap;

use crate::error::{Result, TableError};
use crate::normalize::normalize;

/// Sex constraint carried by an ICD-10 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexConstraint {
    /// Only valid for male patients.
    MaleOnly,
    /// Only valid for female patients.
    FemaleOnly,
    /// No constraint.
    Any,
}

/// A parsed ICD-10 row, as produced by the (out-of-scope) table loader.
#[derive(Debug, Clone)]
pub struct Icd10Row {
    /// Raw code, normalized on insertion.
    pub code: String,
    /// Major Diagnostic Category, if this code determines one directly.
    pub mdc: Option<String>,
    /// Disease Cluster when the admission is medical.
    pub dc_medical: Option<String>,
    /// Disease Cluster when the admission is surgical.
    pub dc_surgical: Option<String>,
    /// Whether this code may be used as a principal diagnosis.
    pub pdx_valid: bool,
    /// Whether this code may be used as a secondary diagnosis.
    pub sdx_valid: bool,
    /// Lowest valid age, inclusive.
    pub age_low: i32,
    /// Highest valid age, inclusive.
    pub age_high: i32,
    /// Sex constraint for this code.
    pub sex_required: SexConstraint,
    /// 0 = never a complication, 1/2 = CC, 3 = MCC.
    pub cc_row: u8,
    /// Exclusion group key used by the CC-exclusion table. Defaults to the
    /// code's own canonical form when the source data has no separate group.
    pub exclusion_group: Option<String>,
}

/// The resolved attributes of an ICD-10 code.
#[derive(Debug, Clone)]
pub struct Icd10Entry {
    /// Canonical code.
    pub code: String,
    /// Major Diagnostic Category, if directly determined.
    pub mdc: Option<String>,
    /// Disease Cluster for medical admissions.
    pub dc_medical: Option<String>,
    /// Disease Cluster for surgical admissions.
    pub dc_surgical: Option<String>,
    /// Valid as a principal diagnosis.
    pub pdx_valid: bool,
    /// Valid as a secondary diagnosis.
    pub sdx_valid: bool,
    /// Lowest valid age, inclusive.
    pub age_low: i32,
    /// Highest valid age, inclusive.
    pub age_high: i32,
    /// Sex constraint.
    pub sex_required: SexConstraint,
    /// Complication tier: 0 none, 1/2 CC, 3 MCC.
    pub cc_row: u8,
    /// Exclusion group key.
    pub exclusion_group: String,
}

impl Icd10Entry {
    /// Whether `age` satisfies this entry's age range.
    #[must_use]
    pub fn age_in_range(&self, age: i32) -> bool {
        age >= self.age_low && age <= self.age_high
    }

    /// Whether `sex` satisfies this entry's sex constraint.
    #[must_use]
    pub fn sex_matches(&self, sex: crate::model::Sex) -> bool {
        match self.sex_required {
            SexConstraint::Any => true,
            SexConstraint::MaleOnly => matches!(sex, crate::model::Sex::M | crate::model::Sex::Any),
            SexConstraint::FemaleOnly => matches!(sex, crate::model::Sex::F | crate::model::Sex::Any),
        }
    }
}

/// Lookup table for ICD-10 entries, keyed by canonical code.
#[derive(Debug, Default)]
pub struct Icd10Table {
    entries: FxHashMap<String, Icd10Entry>,
}

impl Icd10Table {
    /// Build the table from parsed rows, rejecting duplicate canonical codes.
    pub fn build(rows: Vec<Icd10Row>) -> Result<Self> {
        let mut entries = FxHashMap::default();
        for row in rows {
            let canonical = normalize(&row.code);
            if canonical.is_empty() {
                continue;
            }
            let exclusion_group = row
                .exclusion_group
                .map(|g| normalize(&g))
                .filter(|g| !g.is_empty())
                .unwrap_or_else(|| canonical.clone());

            let entry = Icd10Entry {
                code: canonical.clone(),
                mdc: row.mdc,
                dc_medical: row.dc_medical,
                dc_surgical: row.dc_surgical,
                pdx_valid: row.pdx_valid,
                sdx_valid: row.sdx_valid,
                age_low: row.age_low,
                age_high: row.age_high,
                sex_required: row.sex_required,
                cc_row: row.cc_row,
                exclusion_group,
            };

            if entries.insert(canonical.clone(), entry).is_some() {
                return Err(TableError::DuplicateKey {
                    table: "icd10",
                    key: canonical,
                });
            }
        }
        if entries.is_empty() {
            return Err(TableError::MissingTable("icd10"));
        }
        Ok(Self { entries })
    }

    /// Look up an entry by canonical code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Icd10Entry> {
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
