//! The grouper engine: the public entry point wiring Normalizer → Validator →
//! Classifier → Weight Calculator → result assembly.

use std::sync::Arc;

use rayon::prelude::*;

use crate::classifier::{self, ClassificationOutcome, PclRules};
use crate::config::EngineConfig;
use crate::model::{Admission, GrouperResult, LosStatus};
use crate::tables::{ReferenceTables, Stats};
use crate::validator::{self, ValidationOutcome};
use crate::weight;

/// A built, immutable grouping engine.
///
/// Stateless per request: `group()` reads only its argument and the shared
/// tables, and may be called concurrently from multiple threads with no
/// synchronization.
#[derive(Clone)]
pub struct GrouperEngine {
    tables: Arc<ReferenceTables>,
    config: EngineConfig,
    pcl_rules: PclRules,
}

impl GrouperEngine {
    /// Build an engine from already-constructed reference tables.
    #[must_use]
    pub fn new(tables: ReferenceTables, config: EngineConfig) -> Self {
        Self {
            tables: Arc::new(tables),
            config,
            pcl_rules: PclRules::default(),
        }
    }

    /// Override the PCL tier cutoffs (default matches the 6.x spec table).
    #[must_use]
    pub fn with_pcl_rules(mut self, rules: PclRules) -> Self {
        self.pcl_rules = rules;
        self
    }

    /// Diagnostic counters over the loaded reference tables.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.tables.stats()
    }

    /// Classify a single admission. Infallible: failures are represented as
    /// a sentinel `GrouperResult`, never an `Err`.
    #[must_use]
    pub fn group(&self, admission: Admission) -> GrouperResult {
        match validator::validate(&admission, &self.tables) {
            ValidationOutcome::InvalidAge { error } => {
                log::warn!("sentinel (invalid age): {error}");
                self.sentinel_result(&admission, &self.tables.sentinels.invalid_age, vec![error], Vec::new())
            }
            ValidationOutcome::InvalidPdx { error } => {
                log::warn!("sentinel (invalid PDx): {error}");
                self.sentinel_result(&admission, &self.tables.sentinels.ungroupable, vec![error], Vec::new())
            }
            ValidationOutcome::Valid(validated) => {
                match classifier::classify(&validated, &self.tables, &self.pcl_rules) {
                    ClassificationOutcome::Ungroupable { error } => {
                        log::warn!("sentinel (ungroupable): {error}");
                        self.sentinel_result(
                            &admission,
                            &self.tables.sentinels.ungroupable,
                            vec![error],
                            validated.warnings,
                        )
                    }
                    ClassificationOutcome::Classified(classified) => {
                        let weights = weight::calculate(&classified.drg, validated.los);
                        GrouperResult {
                            version: self.config.version.clone(),
                            pdx: admission.pdx,
                            sdx: admission.sdx,
                            procedures: admission.procedures,
                            age: admission.age,
                            sex: admission.sex,
                            los: admission.los,
                            mdc: classified.mdc.clone(),
                            mdc_name: self.tables.mdc.name(&classified.mdc),
                            dc: classified.dc,
                            drg: classified.drg.code.clone(),
                            drg_name: classified.drg.name.clone(),
                            rw: weights.rw,
                            rw0d: weights.rw0d,
                            adjrw: weights.adjrw,
                            wtlos: weights.wtlos,
                            ot: weights.ot,
                            pcl: classified.pcl,
                            cc_list: classified.cc_list.iter().map(|c| c.as_str().to_string()).collect(),
                            mcc_list: classified.mcc_list.iter().map(|c| c.as_str().to_string()).collect(),
                            has_or_procedure: classified.has_or_procedure,
                            is_surgical: classified.is_surgical,
                            los_status: weights.los_status,
                            is_valid: true,
                            errors: Vec::new(),
                            warnings: validated.warnings,
                        }
                    }
                }
            }
        }
    }

    /// Classify a batch of admissions in parallel, preserving input order.
    ///
    /// Grouping calls have no shared mutable state and no suspension points,
    /// so this is simply a parallel-safe map.
    #[must_use]
    pub fn group_many(&self, admissions: Vec<Admission>) -> Vec<GrouperResult> {
        admissions.into_par_iter().map(|a| self.group(a)).collect()
    }

    fn sentinel_result(
        &self,
        admission: &Admission,
        sentinel_code: &str,
        errors: Vec<String>,
        warnings: Vec<String>,
    ) -> GrouperResult {
        let drg_entry = self.tables.drg.get(sentinel_code);
        let weights = weight::calculate_sentinel(drg_entry);

        GrouperResult {
            version: self.config.version.clone(),
            pdx: admission.pdx.clone(),
            sdx: admission.sdx.clone(),
            procedures: admission.procedures.clone(),
            age: admission.age,
            sex: admission.sex.clone(),
            los: admission.los,
            mdc: String::new(),
            mdc_name: String::new(),
            dc: String::new(),
            drg: sentinel_code.to_string(),
            drg_name: drg_entry.map_or_else(String::new, |e| e.name.clone()),
            rw: weights.rw,
            rw0d: weights.rw0d,
            adjrw: weights.adjrw,
            wtlos: weights.wtlos,
            ot: weights.ot,
            pcl: 0,
            cc_list: Vec::new(),
            mcc_list: Vec::new(),
            has_or_procedure: false,
            is_surgical: false,
            los_status: LosStatus::Error,
            is_valid: false,
            errors,
            warnings,
        }
    }
}
