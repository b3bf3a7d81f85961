//! The classifier: Stages A through F of the grouping pipeline.

pub mod cc;
pub mod dc;
pub mod drg_select;
pub mod mdc;
pub mod or_scan;
pub mod pcl;

use crate::normalize::Code;
use crate::tables::{DrgEntry, ReferenceTables};
use crate::validator::ValidatedAdmission;

pub use pcl::PclRules;

/// The outcome of a fully-assembled classification.
#[derive(Debug, Clone)]
pub struct Classified {
    /// Major Diagnostic Category.
    pub mdc: String,
    /// Disease Cluster.
    pub dc: String,
    /// Resolved DRG catalog entry (cloned out of the table, which the
    /// engine owns for its full lifetime).
    pub drg: DrgEntry,
    /// Patient Complexity Level.
    pub pcl: i32,
    /// Codes counted as CC.
    pub cc_list: Vec<Code>,
    /// Codes counted as MCC.
    pub mcc_list: Vec<Code>,
    /// Whether any procedure was an OR procedure.
    pub has_or_procedure: bool,
    /// Whether the admission was classified as surgical.
    pub is_surgical: bool,
}

/// Outcome of running the classifier against a validated admission.
pub enum ClassificationOutcome {
    /// Classification succeeded.
    Classified(Classified),
    /// A stage could not resolve and the admission is ungroupable.
    Ungroupable { error: String },
}

/// Run Stages A–F in sequence.
#[must_use]
pub fn classify(
    validated: &ValidatedAdmission,
    tables: &ReferenceTables,
    pcl_rules: &PclRules,
) -> ClassificationOutcome {
    let pdx_entry = tables
        .icd10
        .get(validated.pdx.as_str())
        .expect("validator guarantees the PDx exists in the ICD-10 table");

    // Stage A
    let (resolved_mdc, premdc_dc) = match mdc::assign_mdc(validated.pdx.as_str(), pdx_entry, &tables.premdc) {
        mdc::MdcOutcome::Direct { mdc } => (mdc, None),
        mdc::MdcOutcome::PreMdc { mdc, dc } => {
            log::debug!("PDx {} resolved MDC via pre-MDC override to {}", validated.pdx, mdc);
            (mdc, Some(dc))
        }
        mdc::MdcOutcome::Ungroupable => {
            return ClassificationOutcome::Ungroupable {
                error: format!("Invalid PDx: {} has no resolvable MDC", validated.pdx),
            };
        }
    };

    // Stage B
    let has_or_procedure = or_scan::has_or_procedure(&validated.procedures, &tables.procedures);
    let is_surgical = has_or_procedure;

    // Stage C
    let resolved_dc = match dc::assign_dc(
        &validated.procedures,
        &tables.procedures,
        premdc_dc.as_deref(),
        Some(pdx_entry),
        is_surgical,
    ) {
        dc::DcOutcome::Resolved(dc) => dc,
        dc::DcOutcome::Ungroupable => {
            return ClassificationOutcome::Ungroupable {
                error: format!("Invalid PDx: {} has no resolvable Disease Cluster", validated.pdx),
            };
        }
    };

    // Stage D
    let scan = cc::scan(&pdx_entry.exclusion_group, &validated.sdx, &tables.icd10, &tables.ccex);

    // Stage E
    let pcl = pcl::compute_pcl(pcl_rules, scan.cc_list.len(), scan.mcc_list.len());

    // Stage F
    let Some(drg_entry) = drg_select::select_drg(&resolved_dc, pcl, &tables.drg) else {
        return ClassificationOutcome::Ungroupable {
            error: format!("no DRG found for DC {resolved_dc} at PCL {pcl} or its catch-all tier"),
        };
    };
    if !drg_entry.code.ends_with(|c: char| c.to_digit(10) == Some(pcl as u32)) {
        log::debug!(
            "DC {resolved_dc} has no tier-{pcl} entry; demoted to {}",
            drg_entry.code
        );
    }

    ClassificationOutcome::Classified(Classified {
        mdc: resolved_mdc,
        dc: resolved_dc,
        drg: drg_entry.clone(),
        pcl,
        cc_list: scan.cc_list,
        mcc_list: scan.mcc_list,
        has_or_procedure,
        is_surgical,
    })
}
