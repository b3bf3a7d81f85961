//! Code normalization.
//!
//! Every ICD-10 and procedure code is canonicalized before it touches a
//! table lookup: strip surrounding whitespace, drop `.` separators, upper-case
//! ASCII letters. Canonicalization is idempotent and applies identically to
//! principal diagnoses, secondary diagnoses, and procedure codes. Procedure
//! codes may be purely numeric and are treated as opaque strings.

use std::fmt;
use std::ops::Deref;

/// A canonicalized code. Equality and hashing are always on the canonical form,
/// since construction is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    /// Normalize and wrap a raw code. Returns `None` if nothing remains after
    /// trimming and dot-stripping.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let canonical = normalize(raw);
        if canonical.is_empty() {
            None
        } else {
            Some(Self(canonical))
        }
    }

    /// Borrow the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the canonical string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Code {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a raw code string: trim, drop `.`, upper-case ASCII letters.
///
/// Idempotent: `normalize(&normalize(c)) == normalize(c)`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
