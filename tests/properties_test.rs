mod common;

use common::fixture_engine;
use thai_drg_grouper::{normalize, Admission};

#[test]
fn normalization_is_idempotent() {
    let codes = ["j18.9", "  S82.201D ", "E119", "7936"];
    for code in codes {
        let once = normalize(code);
        let twice = normalize(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn grouping_is_deterministic() {
    let engine = fixture_engine();
    let admission = Admission::new("J189")
        .with_sdx(vec!["I10".into(), "E119".into()])
        .with_age(75)
        .with_sex("M")
        .with_los(10);

    let a = engine.group(admission.clone());
    let b = engine.group(admission);

    assert_eq!(a.drg, b.drg);
    assert_eq!(a.pcl, b.pcl);
    assert_eq!(a.adjrw, b.adjrw);
    assert_eq!(a.cc_list, b.cc_list);
}

#[test]
fn surgical_flag_matches_dc_suffix_partition() {
    let engine = fixture_engine();

    let medical = engine.group(Admission::new("J189").with_age(30).with_sex("M").with_los(5));
    let surgical = engine.group(
        Admission::new("S82201D")
            .with_procedures(vec!["7936".into()])
            .with_age(25)
            .with_sex("M")
            .with_los(7),
    );

    for result in [&medical, &surgical] {
        assert!(result.is_valid);
        let suffix: u32 = result.dc[2..4].parse().unwrap();
        assert_eq!(result.is_surgical, suffix < 50);
    }
}

#[test]
fn adding_a_fresh_cc_never_decreases_pcl() {
    let engine = fixture_engine();
    let base = engine.group(Admission::new("J189").with_age(30).with_sex("M").with_los(5));
    let with_cc = engine.group(
        Admission::new("J189")
            .with_sdx(vec!["I10".into()])
            .with_age(30)
            .with_sex("M")
            .with_los(5),
    );

    assert!(with_cc.pcl >= base.pcl);
}

#[test]
fn adding_an_excluded_code_leaves_pcl_unchanged() {
    let engine = fixture_engine();
    let base = engine.group(Admission::new("E119").with_age(30).with_sex("M").with_los(5));
    let with_excluded = engine.group(
        Admission::new("E119")
            .with_sdx(vec!["E118".into()])
            .with_age(30)
            .with_sex("M")
            .with_los(5),
    );

    assert_eq!(base.pcl, with_excluded.pcl);
}

#[test]
fn adjrw_is_monotonic_in_los_past_outlier_threshold() {
    let engine = fixture_engine();
    let ot = engine.group(Admission::new("J189").with_age(30).with_sex("M").with_los(10)).ot;

    let mut previous = engine
        .group(Admission::new("J189").with_age(30).with_sex("M").with_los(ot + 1))
        .adjrw;
    for los in (ot + 2)..(ot + 20) {
        let current = engine.group(Admission::new("J189").with_age(30).with_sex("M").with_los(los)).adjrw;
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn daycase_identity_holds() {
    let result = fixture_engine().group(Admission::new("J189").with_age(30).with_sex("M").with_los(0));
    assert_eq!(result.adjrw, result.rw0d);
}

#[test]
fn every_invalid_result_has_errors_and_a_sentinel_drg() {
    let engine = fixture_engine();
    let invalid_cases = [
        Admission::new("J189").with_age(-5).with_sex("M").with_los(5),
        Admission::new("J189").with_age(200).with_sex("M").with_los(5),
        Admission::new("NOPE").with_age(30).with_sex("M").with_los(5),
    ];

    for admission in invalid_cases {
        let result = engine.group(admission);
        assert!(!result.is_valid);
        assert!(!result.errors.is_empty());
        assert!(result.drg.starts_with("265"));
    }
}

#[test]
fn cc_and_mcc_lists_are_disjoint_and_canonical() {
    let result = fixture_engine().group(
        Admission::new("J189")
            .with_sdx(vec!["I10".into(), "J960".into()])
            .with_age(75)
            .with_sex("M")
            .with_los(10),
    );

    let cc: std::collections::HashSet<_> = result.cc_list.iter().collect();
    let mcc: std::collections::HashSet<_> = result.mcc_list.iter().collect();
    assert!(cc.is_disjoint(&mcc));
}
