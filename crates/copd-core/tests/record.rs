use std::collections::BTreeSet;

use copd_core::numeric::{parse_decimal, parse_integer};
use copd_core::{
    create_initial_record, update_field, CatItem, FieldKey, FieldUpdate, ParsedNumeric,
    RiskFactor, Symptom,
};
use proptest::prelude::*;

#[test]
fn initial_record_is_blank() {
    let record = create_initial_record();
    assert!(record.patient_name.is_empty());
    assert!(record.patient_age.is_empty());
    assert!(Symptom::ALL.iter().all(|s| !record.symptoms.get(*s)));
    assert!(RiskFactor::ALL.iter().all(|f| !record.risk_factors.get(*f)));
    assert_eq!(record.cat.unanswered().len(), 8);
    assert!(record.current_treatment.is_empty());
    assert!(record.comorbidities.is_empty());
}

#[test]
fn update_field_leaves_original_untouched() {
    let original = create_initial_record();
    let updated = update_field(&original, FieldUpdate::PatientAge("65".to_string()));

    assert_eq!(original.patient_age, "");
    assert_eq!(updated.patient_age, "65");
    assert_eq!(updated.age(), ParsedNumeric::Value(65));
}

#[test]
fn update_field_writes_flags_and_items() {
    let record = create_initial_record()
        .with_update(FieldUpdate::Symptom(Symptom::ChronicCough, true))
        .with_update(FieldUpdate::RiskFactor(RiskFactor::Biomass, true))
        .with_update(FieldUpdate::CatItem(CatItem::Sleep, "3".to_string()))
        .with_update(FieldUpdate::Comorbidities(BTreeSet::from([
            "heart failure".to_string(),
        ])));

    assert!(record.symptoms.chronic_cough);
    assert!(!record.symptoms.dyspnea);
    assert!(record.risk_factors.biomass);
    assert_eq!(record.cat.sleep, "3");
    assert_eq!(record.cat.parsed(CatItem::Sleep), ParsedNumeric::Value(3));
    assert!(record.comorbidities.contains("heart failure"));
}

#[test]
fn update_key_matches_target_field() {
    assert_eq!(
        FieldUpdate::CatItem(CatItem::Energy, String::new()).key(),
        FieldKey::CatEnergy
    );
    assert_eq!(
        FieldUpdate::Symptom(Symptom::RecurrentInfections, true).key(),
        FieldKey::RecurrentInfections
    );
    assert_eq!(
        FieldUpdate::PostBronchodilatorRatio("0.6".into()).key(),
        FieldKey::PostBronchodilatorRatio
    );
}

#[test]
fn empty_and_garbage_are_not_zero() {
    assert_eq!(parse_integer::<u32>(""), ParsedNumeric::Empty);
    assert_eq!(parse_integer::<u32>("   "), ParsedNumeric::Empty);
    assert_eq!(parse_integer::<u32>("abc"), ParsedNumeric::Invalid);
    assert_eq!(parse_integer::<u32>("12.5"), ParsedNumeric::Invalid);
    assert_eq!(parse_integer::<u32>("-1"), ParsedNumeric::Invalid);
    assert_eq!(parse_integer::<i64>(" 42 "), ParsedNumeric::Value(42));
    assert_eq!(parse_integer::<u32>("0"), ParsedNumeric::Value(0));
}

#[test]
fn decimals_reject_non_finite() {
    assert_eq!(parse_decimal("0.65"), ParsedNumeric::Value(0.65));
    assert_eq!(parse_decimal("NaN"), ParsedNumeric::Invalid);
    assert_eq!(parse_decimal("inf"), ParsedNumeric::Invalid);
    assert_eq!(parse_decimal(""), ParsedNumeric::Empty);
}

#[test]
fn field_keys_parse_from_their_names() {
    for key in [
        FieldKey::PatientAge,
        FieldKey::CatConfidenceLeavingHome,
        FieldKey::QuestionnaireTotal,
    ] {
        assert_eq!(key.as_str().parse::<FieldKey>().unwrap(), key);
    }
    assert!("nope".parse::<FieldKey>().is_err());
    assert_eq!("chest_tightness".parse::<CatItem>().unwrap(), CatItem::ChestTightness);
}

#[test]
fn record_loads_from_partial_json() {
    let record = copd_core::PatientRecord::from_json(
        r#"{ "patient_name": "Jane Doe", "cat": { "cough": "2" }, "symptoms": { "dyspnea": true } }"#,
    )
    .unwrap();

    assert_eq!(record.patient_name, "Jane Doe");
    assert_eq!(record.cat.cough, "2");
    assert_eq!(record.cat.phlegm, "");
    assert!(record.symptoms.dyspnea);
    assert!(record.blood_eosinophils.is_empty());
}

proptest! {
    #[test]
    fn whitespace_only_is_always_empty(s in "[ \t]{0,8}") {
        prop_assert_eq!(parse_integer::<u32>(&s), ParsedNumeric::Empty);
        prop_assert_eq!(parse_decimal(&s), ParsedNumeric::Empty);
    }

    #[test]
    fn printed_integers_parse_back(n in 0u32..10_000) {
        prop_assert_eq!(parse_integer::<u32>(&n.to_string()), ParsedNumeric::Value(n));
    }
}
