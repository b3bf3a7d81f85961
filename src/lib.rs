//! A table-driven classification engine for the Thai DRG (Diagnosis-Related
//! Group) casemix system.
//!
//! Given a coded inpatient admission (principal diagnosis, secondary
//! diagnoses, procedures, age, sex, discharge disposition, length of stay),
//! [`GrouperEngine::group`] returns the assigned DRG, its Major Diagnostic
//! Category, Disease Cluster, Patient Complexity Level, and the three
//! economic weights (RW, RW0D, AdjRW).
//!
//! The engine consumes already-parsed reference tables. Reading the on-disk
//! table format, the HTTP surface, and the multi-version registry are out
//! of scope here.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod tables;
pub mod validator;
pub mod weight;

pub use classifier::PclRules;
pub use config::EngineConfig;
pub use engine::GrouperEngine;
pub use error::TableError;
pub use model::{Admission, DischargeType, GrouperResult, LosStatus, Sex};
pub use normalize::{normalize, Code};
pub use tables::{
    CcExclusionRow, DrgRow, Icd10Row, MdcRow, PdxPredicate, PreMdcRule, ProcedureRow,
    ReferenceTables, SexConstraint, Stats,
};
