use copd_core::{create_initial_record, FieldUpdate, PatientRecord, RiskGroup};
use copd_scoring::classify::classify;
use copd_scoring::classify_risk_group;
use proptest::prelude::*;

fn record(mmrc: &str, exacerbations: &str, hospitalizations: &str) -> PatientRecord {
    create_initial_record()
        .with_update(FieldUpdate::MmrcScore(mmrc.into()))
        .with_update(FieldUpdate::ExacerbationsLastYear(exacerbations.into()))
        .with_update(FieldUpdate::HospitalizationsLastYear(hospitalizations.into()))
}

#[test]
fn exacerbation_history_dominates_symptoms() {
    assert_eq!(classify(0, 0, 2, 0), RiskGroup::E);
    assert_eq!(classify(4, 40, 2, 0), RiskGroup::E);
}

#[test]
fn single_hospitalization_is_group_e() {
    assert_eq!(classify(0, 0, 0, 1), RiskGroup::E);
    assert_eq!(classify(0, 0, 1, 0), RiskGroup::A);
}

#[test]
fn dyspnea_scale_two_is_group_b() {
    assert_eq!(classify(2, 0, 0, 0), RiskGroup::B);
    assert_eq!(classify(1, 0, 0, 0), RiskGroup::A);
}

#[test]
fn questionnaire_boundary_at_ten() {
    assert_eq!(classify(1, 9, 0, 0), RiskGroup::A);
    assert_eq!(classify(1, 10, 0, 0), RiskGroup::B);
}

#[test]
fn unknown_when_any_input_missing() {
    assert_eq!(classify_risk_group(&record("1", "0", "0"), None), None);
    assert_eq!(classify_risk_group(&record("", "0", "0"), Some(5)), None);
    assert_eq!(classify_risk_group(&record("1", "", "0"), Some(5)), None);
    assert_eq!(classify_risk_group(&record("1", "0", ""), Some(5)), None);
    assert_eq!(classify_risk_group(&record("1", "two", "0"), Some(5)), None);
}

#[test]
fn classifies_complete_record() {
    assert_eq!(
        classify_risk_group(&record("0", "2", "0"), Some(0)),
        Some(RiskGroup::E)
    );
    assert_eq!(
        classify_risk_group(&record("1", "0", "0"), Some(9)),
        Some(RiskGroup::A)
    );
}

proptest! {
    #[test]
    fn classification_is_deterministic(
        mmrc in 0u32..=4,
        cat in 0u32..=40,
        exacerbations in 0u32..6,
        hospitalizations in 0u32..3,
    ) {
        let first = classify(mmrc, cat, exacerbations, hospitalizations);
        prop_assert_eq!(first, classify(mmrc, cat, exacerbations, hospitalizations));
        if exacerbations >= 2 || hospitalizations >= 1 {
            prop_assert_eq!(first, RiskGroup::E);
        }
    }
}
