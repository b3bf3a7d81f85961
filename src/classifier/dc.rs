//! Stage C. Disease Cluster assignment.

use crate::normalize::Code;
use crate::tables::{Icd10Entry, ProcedureTable};

/// Outcome of DC assignment.
pub enum DcOutcome {
    /// A four-digit DC was resolved.
    Resolved(String),
    /// Neither side of the ICD-10 entry, a procedure override, nor a
    /// pre-MDC rule could supply a DC.
    Ungroupable,
}

/// Resolve the Disease Cluster for a validated admission.
///
/// Priority: a procedure's `dc_override` (first such procedure in input
/// order) wins outright; otherwise a DC carried by a pre-MDC rule; otherwise
/// the ICD-10 entry's side matching `is_surgical`, falling back to the other
/// side if that one is null.
#[must_use]
pub fn assign_dc(
    procedures: &[Code],
    proc_table: &ProcedureTable,
    premdc_dc: Option<&str>,
    icd10_entry: Option<&Icd10Entry>,
    is_surgical: bool,
) -> DcOutcome {
    for p in procedures {
        if let Some(dc) = proc_table.get(p.as_str()).and_then(|e| e.dc_override.as_ref()) {
            return DcOutcome::Resolved(dc.clone());
        }
    }

    if let Some(dc) = premdc_dc {
        return DcOutcome::Resolved(dc.to_string());
    }

    let Some(entry) = icd10_entry else {
        return DcOutcome::Ungroupable;
    };

    let primary = if is_surgical { &entry.dc_surgical } else { &entry.dc_medical };
    let secondary = if is_surgical { &entry.dc_medical } else { &entry.dc_surgical };

    match primary.as_ref().or(secondary.as_ref()) {
        Some(dc) => DcOutcome::Resolved(dc.clone()),
        None => DcOutcome::Ungroupable,
    }
}

/// Whether a four-digit DC suffix denotes a surgical (`00..=49`) or
/// medical (`50..=99`) cluster. Table corruption if this disagrees with the
/// `is_surgical` flag that produced the DC.
#[must_use]
pub fn suffix_is_surgical(dc: &str) -> bool {
    dc.get(2..4)
        .and_then(|s| s.parse::<u32>().ok())
        .is_some_and(|suffix| suffix < 50)
}
