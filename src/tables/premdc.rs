//! Pre-MDC override rules.
//!
//! Some principal diagnoses (transplants and other pre-MDC categories) have
//! no `mdc` in their ICD-10 entry. Stage A falls back to this small ordered
//! rule list, evaluated top to bottom, first match wins. Kept as data rather
//! than hard-coded `match` arms so it can be loaded from the same source as
//! the rest of the reference tables.

/// A predicate over the normalized principal diagnosis code.
#[derive(Debug, Clone)]
pub enum PdxPredicate {
    /// Matches if the canonical PDx starts with this prefix.
    Prefix(String),
    /// Matches if the canonical PDx equals this code exactly.
    Exact(String),
}

impl PdxPredicate {
    fn matches(&self, pdx: &str) -> bool {
        match self {
            PdxPredicate::Prefix(prefix) => pdx.starts_with(prefix.as_str()),
            PdxPredicate::Exact(code) => pdx == code,
        }
    }
}

/// A single pre-MDC override rule.
#[derive(Debug, Clone)]
pub struct PreMdcRule {
    /// Condition on the canonical PDx.
    pub predicate: PdxPredicate,
    /// MDC assigned when the predicate matches.
    pub mdc: String,
    /// Disease Cluster assigned when the predicate matches.
    pub dc: String,
}

/// An ordered list of pre-MDC rules.
#[derive(Debug, Default, Clone)]
pub struct PreMdcTable {
    rules: Vec<PreMdcRule>,
}

impl PreMdcTable {
    /// Build from an ordered rule list. Order is preserved: earlier rules
    /// take precedence.
    #[must_use]
    pub fn new(rules: Vec<PreMdcRule>) -> Self {
        Self { rules }
    }

    /// Find the first matching rule for a canonical PDx, if any.
    #[must_use]
    pub fn resolve(&self, pdx: &str) -> Option<(&str, &str)> {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(pdx))
            .map(|rule| (rule.mdc.as_str(), rule.dc.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let table = PreMdcTable::new(vec![
            PreMdcRule {
                predicate: PdxPredicate::Exact("Z940".into()),
                mdc: "PRE".into(),
                dc: "PRE1".into(),
            },
            PreMdcRule {
                predicate: PdxPredicate::Prefix("Z94".into()),
                mdc: "PRE".into(),
                dc: "PRE2".into(),
            },
        ]);

        assert_eq!(table.resolve("Z940"), Some(("PRE", "PRE1")));
        assert_eq!(table.resolve("Z941"), Some(("PRE", "PRE2")));
        assert_eq!(table.resolve("A000"), None);
    }
}
