//! Structural validation of an admission, applied before classification.

use crate::model::{Admission, Sex};
use crate::normalize::Code;
use crate::tables::ReferenceTables;

/// An admission that has passed structural validation: codes normalized,
/// unrecognized secondaries/procedures dropped (with a warning), order
/// preserved among survivors.
#[derive(Debug, Clone)]
pub struct ValidatedAdmission {
    /// Canonical principal diagnosis.
    pub pdx: Code,
    /// Canonical, recognized secondary diagnoses, in input order.
    pub sdx: Vec<Code>,
    /// Canonical, recognized procedure codes, in input order.
    pub procedures: Vec<Code>,
    /// Patient age.
    pub age: i32,
    /// Resolved sex (absent/unrecognized collapses to `Any`).
    pub sex: Sex,
    /// Length of stay.
    pub los: i64,
    /// Warnings accumulated during validation.
    pub warnings: Vec<String>,
}

/// Outcome of validation: either a validated admission ready for
/// classification, or a short-circuit failure naming the sentinel category
/// that should be used.
pub enum ValidationOutcome {
    /// Validation passed; proceed to classification.
    Valid(ValidatedAdmission),
    /// Age was out of `[0, 124]`.
    InvalidAge { error: String },
    /// PDx was empty, unrecognized, or not valid as a principal diagnosis.
    InvalidPdx { error: String },
}

/// Run the validator's ordered checks against a raw admission.
#[must_use]
pub fn validate(admission: &Admission, tables: &ReferenceTables) -> ValidationOutcome {
    let mut warnings = Vec::new();

    if !(0..=124).contains(&admission.age) {
        return ValidationOutcome::InvalidAge {
            error: format!("age {} is out of range [0, 124]", admission.age),
        };
    }

    let sex = Sex::from_input(admission.sex.as_deref());
    if admission.sex.is_none() {
        warnings.push("sex not provided; treating as unconstrained".to_string());
    } else if sex == Sex::Any {
        warnings.push(format!(
            "sex value {:?} not recognized; treating as unconstrained",
            admission.sex.as_deref().unwrap_or_default()
        ));
    }

    let Some(pdx) = Code::new(&admission.pdx) else {
        return ValidationOutcome::InvalidPdx {
            error: "PDx is empty or missing".to_string(),
        };
    };

    let Some(entry) = tables.icd10.get(pdx.as_str()) else {
        return ValidationOutcome::InvalidPdx {
            error: format!("Invalid PDx: {} is not a recognized ICD-10 code", pdx),
        };
    };

    if !entry.pdx_valid {
        return ValidationOutcome::InvalidPdx {
            error: format!("Invalid PDx: {pdx} is not valid as a principal diagnosis"),
        };
    }

    if !entry.age_in_range(admission.age) {
        warnings.push(format!(
            "age {} is outside the expected range [{}, {}] for PDx {}",
            admission.age, entry.age_low, entry.age_high, pdx
        ));
    }
    if !entry.sex_matches(sex) {
        warnings.push(format!("sex {sex} does not match the constraint for PDx {pdx}"));
    }

    let sdx = drop_unrecognized(&admission.sdx, &mut warnings, "secondary diagnosis", |code| {
        tables.icd10.get(code).map(|e| e.sdx_valid).unwrap_or(false)
    });

    let procedures = drop_unrecognized(&admission.procedures, &mut warnings, "procedure", |code| {
        tables.procedures.get(code).is_some()
    });

    ValidationOutcome::Valid(ValidatedAdmission {
        pdx,
        sdx,
        procedures,
        age: admission.age,
        sex,
        los: admission.los,
        warnings,
    })
}

fn drop_unrecognized(
    raw: &[String],
    warnings: &mut Vec<String>,
    kind: &str,
    recognized: impl Fn(&str) -> bool,
) -> Vec<Code> {
    let mut out = Vec::with_capacity(raw.len());
    for item in raw {
        let Some(code) = Code::new(item) else {
            warnings.push(format!("empty {kind} code dropped"));
            continue;
        };
        if recognized(code.as_str()) {
            out.push(code);
        } else {
            warnings.push(format!("unrecognized {kind} code {code} dropped"));
        }
    }
    out
}
