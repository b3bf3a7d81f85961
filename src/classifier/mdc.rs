//! Stage A. MDC assignment.

use crate::tables::{Icd10Entry, PreMdcTable};

/// Outcome of MDC assignment.
pub enum MdcOutcome {
    /// MDC resolved directly from the ICD-10 entry.
    Direct { mdc: String },
    /// MDC resolved through a pre-MDC override rule, which also names the DC.
    PreMdc { mdc: String, dc: String },
    /// No MDC could be resolved; the admission is ungroupable.
    Ungroupable,
}

/// Resolve the MDC for a validated principal diagnosis.
#[must_use]
pub fn assign_mdc(pdx: &str, entry: &Icd10Entry, premdc: &PreMdcTable) -> MdcOutcome {
    if let Some(mdc) = &entry.mdc {
        return MdcOutcome::Direct { mdc: mdc.clone() };
    }

    if let Some((mdc, dc)) = premdc.resolve(pdx) {
        return MdcOutcome::PreMdc {
            mdc: mdc.to_string(),
            dc: dc.to_string(),
        };
    }

    MdcOutcome::Ungroupable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{PdxPredicate, PreMdcRule, SexConstraint};

    fn entry(mdc: Option<&str>) -> Icd10Entry {
        Icd10Entry {
            code: "Z940".into(),
            mdc: mdc.map(str::to_string),
            dc_medical: None,
            dc_surgical: None,
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 0,
            exclusion_group: "Z940".into(),
        }
    }

    #[test]
    fn direct_mdc_wins() {
        let premdc = PreMdcTable::new(vec![]);
        match assign_mdc("Z940", &entry(Some("04")), &premdc) {
            MdcOutcome::Direct { mdc } => assert_eq!(mdc, "04"),
            _ => panic!("expected direct"),
        }
    }

    #[test]
    fn falls_back_to_premdc() {
        let premdc = PreMdcTable::new(vec![PreMdcRule {
            predicate: PdxPredicate::Prefix("Z94".into()),
            mdc: "27".into(),
            dc: "2701".into(),
        }]);
        match assign_mdc("Z940", &entry(None), &premdc) {
            MdcOutcome::PreMdc { mdc, dc } => {
                assert_eq!(mdc, "27");
                assert_eq!(dc, "2701");
            }
            _ => panic!("expected pre-MDC"),
        }
    }

    #[test]
    fn ungroupable_when_nothing_matches() {
        let premdc = PreMdcTable::new(vec![]);
        assert!(matches!(
            assign_mdc("Z940", &entry(None), &premdc),
            MdcOutcome::Ungroupable
        ));
    }
}
