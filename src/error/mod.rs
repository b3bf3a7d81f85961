//! Error types for the grouper engine.
//!
//! Request-level classification failures are never represented as `Err`.
//! They are sentinel `GrouperResult` values (see [`crate::model::GrouperResult`]).
//! The only fallible operation in this crate is building [`crate::tables::ReferenceTables`]
//! from caller-supplied rows.

use thiserror::Error;

/// Errors raised while constructing reference tables from parsed rows.
///
/// These abort engine construction; they never surface from a `group()` call.
#[derive(Debug, Error)]
pub enum TableError {
    /// The same canonical key appeared twice while building a table.
    #[error("duplicate key {key:?} while building {table} table")]
    DuplicateKey {
        /// Name of the table being built (e.g. `"icd10"`).
        table: &'static str,
        /// The offending canonical key.
        key: String,
    },

    /// A required table had zero rows or was never supplied.
    #[error("missing or empty required table: {0}")]
    MissingTable(&'static str),

    /// A row failed a structural check (e.g. malformed DRG code length).
    #[error("schema mismatch in {table} table: {reason}")]
    SchemaMismatch {
        /// Name of the table being built.
        table: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

/// Result alias for table construction.
pub type Result<T> = std::result::Result<T, TableError>;
