//! Stage F. DRG selection within a Disease Cluster, demoting PCL as needed.

use crate::tables::{DrgEntry, DrgTable};

/// The catch-all PCL tier digit used when a DC doesn't carry a tier-specific
/// entry for the requested (or any lower) PCL.
const CATCH_ALL_DIGIT: char = '9';

/// Select the DRG entry for `dc` at `pcl`, demoting down to 0 and finally to
/// the catch-all digit if no tier-specific entry exists.
///
/// Monotonic by construction: the search starts at `pcl` and only descends,
/// so a higher input PCL can never resolve to a strictly lower digit than a
/// lower PCL would for the same DC.
#[must_use]
pub fn select_drg<'a>(dc: &str, pcl: i32, drg: &'a DrgTable) -> Option<&'a DrgEntry> {
    for digit in (0..=pcl.max(0)).rev() {
        let ch = char::from_digit(digit as u32, 10)?;
        if let Some(entry) = drg.get_by_key(dc, ch) {
            return Some(entry);
        }
    }
    drg.get_by_key(dc, CATCH_ALL_DIGIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::DrgRow;

    fn row(code: &str) -> DrgRow {
        DrgRow {
            code: code.to_string(),
            name: "Test".to_string(),
            rw: 1.0,
            rw0d: 0.5,
            wtlos: 5.0,
            ot: 10,
        }
    }

    #[test]
    fn exact_tier_hit() {
        let table = DrgTable::build(vec![row("04500"), row("04501"), row("04502")]).unwrap();
        let entry = select_drg("0450", 2, &table).unwrap();
        assert_eq!(entry.code, "04502");
    }

    #[test]
    fn demotes_when_tier_missing() {
        let table = DrgTable::build(vec![row("04500")]).unwrap();
        let entry = select_drg("0450", 3, &table).unwrap();
        assert_eq!(entry.code, "04500");
    }

    #[test]
    fn falls_back_to_catch_all() {
        let table = DrgTable::build(vec![row("04509")]).unwrap();
        let entry = select_drg("0450", 2, &table).unwrap();
        assert_eq!(entry.code, "04509");
    }

    #[test]
    fn none_when_dc_entirely_absent() {
        let table = DrgTable::build(vec![row("05500")]).unwrap();
        assert!(select_drg("0450", 0, &table).is_none());
    }

    #[test]
    fn selection_is_monotonic_in_pcl() {
        let table = DrgTable::build(vec![row("04500"), row("04502")]).unwrap();
        let low = select_drg("0450", 0, &table).unwrap();
        let high = select_drg("0450", 2, &table).unwrap();
        assert!(high.code >= low.code);
    }
}
