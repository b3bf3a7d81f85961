//! Weight calculator. Resolves economic weights and the LOS-adjusted RW.

use crate::model::LosStatus;
use crate::tables::DrgEntry;

/// Resolved weights for a classified admission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightResult {
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
    /// Length-of-stay category.
    pub los_status: LosStatus,
}

/// Compute weights for a resolved DRG entry and the admission's length of stay.
///
/// - `los == 0` is a day case: `adjrw := rw0d`.
/// - `los > ot && wtlos > 0` is a long stay:
///   `adjrw := rw + (los - ot) * (rw / wtlos) * 0.5`.
/// - Otherwise it's a normal stay: `adjrw := rw`.
#[must_use]
pub fn calculate(drg: &DrgEntry, los: i64) -> WeightResult {
    let rw = drg.rw;
    let rw0d = drg.rw0d;
    let wtlos = drg.wtlos;
    let ot = drg.ot;

    let (los_status, adjrw) = if los == 0 {
        (LosStatus::DayCase, rw0d)
    } else if los > ot && wtlos > 0.0 {
        let excess_days = (los - ot) as f64;
        (LosStatus::LongStay, rw + excess_days * (rw / wtlos) * 0.5)
    } else {
        (LosStatus::Normal, rw)
    };

    WeightResult {
        rw,
        rw0d,
        adjrw,
        wtlos,
        ot,
        los_status,
    }
}

/// Weights for a sentinel (ungroupable/invalid) admission: the sentinel DRG's
/// own catalog entry if it has one, otherwise all zero, with `los_status =
/// error` regardless of `los`.
#[must_use]
pub fn calculate_sentinel(drg: Option<&DrgEntry>) -> WeightResult {
    let (rw, rw0d, wtlos, ot) = drg.map_or((0.0, 0.0, 0.0, 0), |d| (d.rw, d.rw0d, d.wtlos, d.ot));
    WeightResult {
        rw,
        rw0d,
        adjrw: rw,
        wtlos,
        ot,
        los_status: LosStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drg() -> DrgEntry {
        DrgEntry {
            code: "04500".into(),
            name: "Pneumonia".into(),
            rw: 1.0,
            rw0d: 0.5,
            wtlos: 5.0,
            ot: 10,
        }
    }

    #[test]
    fn daycase_uses_rw0d() {
        let result = calculate(&drg(), 0);
        assert_eq!(result.los_status, LosStatus::DayCase);
        assert_eq!(result.adjrw, result.rw0d);
    }

    #[test]
    fn normal_stay_uses_rw() {
        let result = calculate(&drg(), 5);
        assert_eq!(result.los_status, LosStatus::Normal);
        assert_eq!(result.adjrw, result.rw);
    }

    #[test]
    fn long_stay_applies_formula() {
        let result = calculate(&drg(), 100);
        assert_eq!(result.los_status, LosStatus::LongStay);
        let expected = 1.0 + 90.0 * (1.0 / 5.0) * 0.5;
        assert!((result.adjrw - expected).abs() < 1e-9);
        assert!((result.adjrw - 10.0).abs() < 1e-9);
    }

    #[test]
    fn normal_stay_when_wtlos_zero_even_past_ot() {
        let mut d = drg();
        d.wtlos = 0.0;
        let result = calculate(&d, 100);
        assert_eq!(result.los_status, LosStatus::Normal);
        assert_eq!(result.adjrw, result.rw);
    }

    #[test]
    fn adjrw_is_monotonic_in_los_past_ot() {
        let d = drg();
        let at_ot = calculate(&d, d.ot + 1).adjrw;
        let further = calculate(&d, d.ot + 2).adjrw;
        assert!(further >= at_ot);
    }
}
