//! Stage B. The OR-procedure scan, the sole surgical/medical criterion.

use crate::normalize::Code;
use crate::tables::ProcedureTable;

/// Whether any procedure in `procedures` is an operating-room procedure.
///
/// This is the entire medical/surgical partition: `is_surgical == has_or_procedure`.
#[must_use]
pub fn has_or_procedure(procedures: &[Code], table: &ProcedureTable) -> bool {
    procedures
        .iter()
        .any(|p| table.get(p.as_str()).is_some_and(|e| e.is_or))
}
