//! Stage E. Patient Complexity Level computation.
//!
//! Cutoffs are data on [`PclRules`], not hard-coded `match` arms, so a future
//! grouper version that tabulates different thresholds can supply its own
//! rules without touching this function.

/// PCL tier cutoffs. The `Default` impl is the table from the 6.x spec:
/// `m>=2 -> 4`, `m==1 -> 3`, `c>=2 && m==0 -> 2`, `c==1 && m==0 -> 1`, else `0`.
#[derive(Debug, Clone, Copy)]
pub struct PclRules {
    /// MCC count at or above which PCL is the top tier (4).
    pub mcc_multi_threshold: usize,
    /// CC count at or above which PCL is tier 2, when there is no MCC.
    pub cc_multi_threshold: usize,
}

impl Default for PclRules {
    fn default() -> Self {
        Self {
            mcc_multi_threshold: 2,
            cc_multi_threshold: 2,
        }
    }
}

/// Compute PCL from CC/MCC counts using `rules`.
#[must_use]
pub fn compute_pcl(rules: &PclRules, cc_count: usize, mcc_count: usize) -> i32 {
    if mcc_count >= rules.mcc_multi_threshold {
        4
    } else if mcc_count == 1 {
        3
    } else if cc_count >= rules.cc_multi_threshold {
        2
    } else if cc_count == 1 {
        1
    } else {
        0
    }
}
