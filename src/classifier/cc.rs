//! Stage D. CC/MCC detection with exclusion.

use rustc_hash::FxHashSet;

use crate::normalize::Code;
use crate::tables::{CcExclusionTable, Icd10Table};

/// Result of scanning secondary diagnoses for complications.
#[derive(Debug, Clone, Default)]
pub struct CcScan {
    /// Distinct codes counted as CC (`cc_row` 1 or 2).
    pub cc_list: Vec<Code>,
    /// Distinct codes counted as MCC (`cc_row` 3).
    pub mcc_list: Vec<Code>,
}

/// Scan validated secondary diagnoses for complications, applying the
/// exclusion table. A secondary diagnosis contributes at most once, even if
/// it appears more than once in `sdx`.
///
/// The exclusion check is delegated entirely to
/// [`CcExclusionTable::excludes`]. This loop never inlines exclusion logic.
#[must_use]
pub fn scan(pdx_exclusion_group: &str, sdx: &[Code], icd10: &Icd10Table, ccex: &CcExclusionTable) -> CcScan {
    let mut seen = FxHashSet::default();
    let mut scan = CcScan::default();

    for code in sdx {
        if !seen.insert(code.as_str().to_string()) {
            continue;
        }

        let Some(entry) = icd10.get(code.as_str()) else {
            continue;
        };
        if entry.cc_row == 0 {
            continue;
        }
        if ccex.excludes(pdx_exclusion_group, code.as_str()) {
            continue;
        }

        match entry.cc_row {
            1 | 2 => scan.cc_list.push(code.clone()),
            _ => scan.mcc_list.push(code.clone()),
        }
    }

    scan
}
