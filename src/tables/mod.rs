//! Reference tables: the five immutable dictionaries the classifier consumes.
//!
//! Tables are constructed once, at engine build time, from caller-supplied
//! parsed rows. Reading the on-disk format (DBF, parquet, delimited text)
//! is an external collaborator's job, out of scope here. Construction
//! rejects duplicate keys; after that, tables never mutate.

pub mod ccex;
pub mod drg;
pub mod icd10;
pub mod mdc;
pub mod premdc;
pub mod procedure;
pub mod sentinel;

use crate::error::Result;

pub use ccex::{CcExclusionRow, CcExclusionTable};
pub use drg::{DrgEntry, DrgKey, DrgRow, DrgTable};
pub use icd10::{Icd10Entry, Icd10Row, Icd10Table, SexConstraint};
pub use mdc::{MdcRow, MdcTable};
pub use premdc::{PdxPredicate, PreMdcRule, PreMdcTable};
pub use procedure::{ProcedureEntry, ProcedureRow, ProcedureTable};
pub use sentinel::SentinelTable;

/// Diagnostic counters for the loaded reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    /// Number of loaded ICD-10 entries.
    pub icd10_count: usize,
    /// Number of loaded DRG catalog entries.
    pub drg_count: usize,
    /// Number of loaded procedure entries.
    pub procedure_count: usize,
    /// Number of loaded CC-exclusion pairs.
    pub ccex_count: usize,
    /// Number of loaded MDC entries.
    pub mdc_count: usize,
}

/// The complete, immutable set of reference tables an engine is built from.
#[derive(Debug)]
pub struct ReferenceTables {
    /// ICD-10 attributes, keyed by canonical code.
    pub icd10: Icd10Table,
    /// Procedure attributes, keyed by canonical code.
    pub procedures: ProcedureTable,
    /// CC-exclusion membership relation.
    pub ccex: CcExclusionTable,
    /// DRG catalog.
    pub drg: DrgTable,
    /// MDC display names.
    pub mdc: MdcTable,
    /// Pre-MDC override rules, evaluated top to bottom.
    pub premdc: PreMdcTable,
    /// Sentinel DRG codes discovered from the catalog.
    pub sentinels: SentinelTable,
}

impl ReferenceTables {
    /// Build the full table set from parsed rows and a sentinel-namespace
    /// prefix (e.g. `"265"`).
    pub fn build(
        icd10_rows: Vec<Icd10Row>,
        procedure_rows: Vec<ProcedureRow>,
        ccex_rows: Vec<CcExclusionRow>,
        drg_rows: Vec<DrgRow>,
        mdc_rows: Vec<MdcRow>,
        premdc_rules: Vec<PreMdcRule>,
        sentinel_prefix: &str,
    ) -> Result<Self> {
        let icd10 = Icd10Table::build(icd10_rows)?;
        let procedures = ProcedureTable::build(procedure_rows)?;
        let ccex = CcExclusionTable::build(ccex_rows)?;
        let drg = DrgTable::build(drg_rows)?;
        let mdc = MdcTable::build(mdc_rows)?;
        let premdc = PreMdcTable::new(premdc_rules);
        let sentinels = SentinelTable::from_catalog(&drg, sentinel_prefix);

        Ok(Self {
            icd10,
            procedures,
            ccex,
            drg,
            mdc,
            premdc,
            sentinels,
        })
    }

    /// Diagnostic counters over the loaded tables.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            icd10_count: self.icd10.len(),
            drg_count: self.drg.len(),
            procedure_count: self.procedures.len(),
            ccex_count: self.ccex.len(),
            mdc_count: self.mdc.len(),
        }
    }
}
