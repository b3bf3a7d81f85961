//! Request and result types for the grouper.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Administrative sex as recorded on the admission.
///
/// `Any` stands in for "absent" or "unrecognized". The validator downgrades
/// both of those to `Any` and emits a warning rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    /// Male.
    M,
    /// Female.
    F,
    /// Unknown, absent, or unrecognized.
    Any,
}

impl Sex {
    /// Parse a raw sex value the way the validator does: recognized letters
    /// map directly, anything else (including `None`) becomes `Any`.
    #[must_use]
    pub fn from_input(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("M") => Sex::M,
            Some(s) if s.eq_ignore_ascii_case("F") => Sex::F,
            _ => Sex::Any,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::M => f.write_str("M"),
            Sex::F => f.write_str("F"),
            Sex::Any => f.write_str("any"),
        }
    }
}

/// Discharge disposition. Not consumed by any classification rule in the
/// covered grouper version, but carried through to the result for downstream
/// billing consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DischargeType {
    /// Routine discharge.
    Normal,
    /// Transferred to another facility.
    Transfer,
    /// Patient died during the stay.
    Died,
    /// Left against medical advice.
    AgainstAdvice,
    /// Any other disposition, carrying the raw code.
    Other(String),
}

/// Length-of-stay category, derived by the weight calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LosStatus {
    /// `los == 0`.
    #[serde(rename = "daycase")]
    DayCase,
    /// `los <= ot` (or `wtlos == 0`).
    #[serde(rename = "normal")]
    Normal,
    /// `los > ot && wtlos > 0`.
    #[serde(rename = "long_stay")]
    LongStay,
    /// Classification short-circuited before a DRG was resolved.
    #[serde(rename = "error")]
    Error,
}

impl fmt::Display for LosStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LosStatus::DayCase => "daycase",
            LosStatus::Normal => "normal",
            LosStatus::LongStay => "long_stay",
            LosStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// A coded inpatient admission, as received from the caller.
///
/// Diagnosis and procedure codes are raw strings here; normalization happens
/// inside `group()`, not at construction, so callers can build an `Admission`
/// directly from whatever source format they have.
#[derive(Debug, Clone, Default)]
pub struct Admission {
    /// Principal diagnosis code.
    pub pdx: String,
    /// Secondary diagnosis codes, in input order. May contain duplicates.
    pub sdx: Vec<String>,
    /// Procedure codes, in input order.
    pub procedures: Vec<String>,
    /// Patient age in years, expected in `[0, 124]`.
    pub age: i32,
    /// Administrative sex, if known.
    pub sex: Option<String>,
    /// Length of stay in days.
    pub los: i64,
    /// Discharge disposition, if known.
    pub discharge_type: Option<DischargeType>,
}

impl Admission {
    /// Start building an admission for the given principal diagnosis.
    #[must_use]
    pub fn new(pdx: impl Into<String>) -> Self {
        Self {
            pdx: pdx.into(),
            ..Self::default()
        }
    }

    /// Set secondary diagnoses.
    #[must_use]
    pub fn with_sdx(mut self, sdx: Vec<String>) -> Self {
        self.sdx = sdx;
        self
    }

    /// Set procedure codes.
    #[must_use]
    pub fn with_procedures(mut self, procedures: Vec<String>) -> Self {
        self.procedures = procedures;
        self
    }

    /// Set age.
    #[must_use]
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Set sex.
    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    /// Set length of stay.
    #[must_use]
    pub fn with_los(mut self, los: i64) -> Self {
        self.los = los;
        self
    }
}

/// The full, fully-populated outcome of a `group()` call.
///
/// Always returned, valid or not: invalid admissions carry a sentinel DRG
/// code with `is_valid = false` and a non-empty `errors`, rather than an
/// `Err`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrouperResult {
    /// Version string stamped from the engine's `EngineConfig`.
    pub version: String,
    /// Echoed, as received.
    pub pdx: String,
    /// Echoed, as received.
    pub sdx: Vec<String>,
    /// Echoed, as received.
    pub procedures: Vec<String>,
    /// Echoed, as received.
    pub age: i32,
    /// Echoed, as received.
    pub sex: Option<String>,
    /// Echoed, as received.
    pub los: i64,

    /// Major Diagnostic Category, two digits. Empty if unresolved.
    pub mdc: String,
    /// Display name of the MDC.
    pub mdc_name: String,
    /// Disease Cluster, four digits. Empty if unresolved.
    pub dc: String,
    /// Assigned DRG code, five digits (or a `265xx` sentinel).
    pub drg: String,
    /// Display name of the DRG.
    pub drg_name: String,

    /// Base relative weight.
    pub rw: f64,
    /// Day-case relative weight.
    pub rw0d: f64,
    /// Length-of-stay-adjusted relative weight.
    pub adjrw: f64,
    /// Typical/weighted length of stay.
    pub wtlos: f64,
    /// Outlier threshold, in days.
    pub ot: i64,

    /// Patient Complexity Level, `0..=4`.
    pub pcl: i32,
    /// Canonical codes counted as CC (cc_row 1 or 2).
    pub cc_list: Vec<String>,
    /// Canonical codes counted as MCC (cc_row 3).
    pub mcc_list: Vec<String>,
    /// Whether any procedure was an OR procedure.
    pub has_or_procedure: bool,
    /// Whether the admission was classified as surgical.
    pub is_surgical: bool,
    /// Length-of-stay category.
    pub los_status: LosStatus,

    /// Whether classification succeeded without error.
    pub is_valid: bool,
    /// Fatal errors. Non-empty iff `!is_valid`.
    pub errors: Vec<String>,
    /// Non-fatal anomalies encountered along the way.
    pub warnings: Vec<String>,
}

impl GrouperResult {
    /// Serialize to a JSON string.
    ///
    /// # Errors
    /// Returns an error only if the result somehow fails to serialize, which
    /// cannot happen for this type's field set in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
