use thai_drg_grouper::{
    CcExclusionRow, DrgRow, EngineConfig, GrouperEngine, Icd10Row, MdcRow, ProcedureRow,
    ReferenceTables, SexConstraint,
};

/// Build a small, self-contained engine covering the scenarios exercised by
/// the integration tests. Not derived from any real DBF extract, just
/// enough fixture data to drive every pipeline stage.
pub fn fixture_engine() -> GrouperEngine {
    let icd10 = vec![
        Icd10Row {
            code: "J189".into(),
            mdc: Some("04".into()),
            dc_medical: Some("0450".into()),
            dc_surgical: None,
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 0,
            exclusion_group: None,
        },
        Icd10Row {
            code: "I10".into(),
            mdc: Some("05".into()),
            dc_medical: Some("0550".into()),
            dc_surgical: None,
            pdx_valid: false,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 1,
            exclusion_group: Some("I10".into()),
        },
        Icd10Row {
            code: "E119".into(),
            mdc: Some("10".into()),
            dc_medical: Some("1050".into()),
            dc_surgical: None,
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 1,
            exclusion_group: Some("E11".into()),
        },
        Icd10Row {
            code: "E118".into(),
            mdc: Some("10".into()),
            dc_medical: Some("1050".into()),
            dc_surgical: None,
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 1,
            exclusion_group: Some("E11".into()),
        },
        Icd10Row {
            code: "J960".into(),
            mdc: Some("04".into()),
            dc_medical: Some("0450".into()),
            dc_surgical: None,
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 3,
            exclusion_group: Some("J96".into()),
        },
        Icd10Row {
            code: "S82201D".into(),
            mdc: Some("08".into()),
            dc_medical: Some("0850".into()),
            dc_surgical: Some("0801".into()),
            pdx_valid: true,
            sdx_valid: true,
            age_low: 0,
            age_high: 124,
            sex_required: SexConstraint::Any,
            cc_row: 0,
            exclusion_group: None,
        },
    ];

    let procedures = vec![ProcedureRow {
        code: "7936".into(),
        is_or: true,
        dc_override: None,
    }];

    let ccex = vec![CcExclusionRow {
        pdx_group: "E11".into(),
        sdx_code: "E118".into(),
    }];

    let drg = vec![
        DrgRow { code: "04500".into(), name: "Pneumonia, PCL 0".into(), rw: 1.0, rw0d: 0.5, wtlos: 5.0, ot: 10 },
        DrgRow { code: "04501".into(), name: "Pneumonia, PCL 1".into(), rw: 1.3, rw0d: 0.6, wtlos: 6.0, ot: 12 },
        DrgRow { code: "04502".into(), name: "Pneumonia, PCL 2".into(), rw: 1.6, rw0d: 0.7, wtlos: 7.0, ot: 14 },
        DrgRow { code: "04503".into(), name: "Pneumonia, PCL 3".into(), rw: 1.9, rw0d: 0.8, wtlos: 8.0, ot: 16 },
        DrgRow { code: "04504".into(), name: "Pneumonia, PCL 4".into(), rw: 2.2, rw0d: 0.9, wtlos: 9.0, ot: 18 },
        DrgRow { code: "08010".into(), name: "Fracture repair, PCL 0".into(), rw: 2.0, rw0d: 1.0, wtlos: 8.0, ot: 15 },
        DrgRow { code: "08011".into(), name: "Fracture repair, PCL 1".into(), rw: 2.4, rw0d: 1.2, wtlos: 9.0, ot: 17 },
        DrgRow { code: "26509".into(), name: "Ungroupable PDx".into(), rw: 0.0, rw0d: 0.0, wtlos: 0.0, ot: 0 },
        DrgRow { code: "26539".into(), name: "Invalid age".into(), rw: 0.0, rw0d: 0.0, wtlos: 0.0, ot: 0 },
    ];

    let mdc = vec![
        MdcRow { code: "04".into(), name: "Respiratory System".into() },
        MdcRow { code: "08".into(), name: "Musculoskeletal System".into() },
        MdcRow { code: "10".into(), name: "Endocrine and Metabolic System".into() },
    ];

    let tables = ReferenceTables::build(icd10, procedures, ccex, drg, mdc, vec![], "265").unwrap();
    GrouperEngine::new(tables, EngineConfig::new("6.3"))
}
