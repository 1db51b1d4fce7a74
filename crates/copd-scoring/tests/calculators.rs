use copd_core::{create_initial_record, CatItem, FieldUpdate, PatientRecord, SeverityGrade};
use copd_scoring::calculators::{
    diagnostic_confirmation, grade_from_percent, symptom_impact, DiagnosticConfirmation,
    SymptomImpact,
};
use copd_scoring::{compute_questionnaire_total, compute_severity_grade, derive};
use proptest::prelude::*;

fn with_cat(values: [&str; 8]) -> PatientRecord {
    let mut record = create_initial_record();
    for (item, value) in CatItem::ALL.into_iter().zip(values) {
        record.apply(FieldUpdate::CatItem(item, value.to_string()));
    }
    record
}

#[test]
fn complete_questionnaire_sums_items() {
    let record = with_cat(["1", "2", "3", "4", "5", "0", "1", "2"]);
    assert_eq!(compute_questionnaire_total(&record), Some(18));
}

#[test]
fn all_zero_questionnaire_is_zero_not_unknown() {
    let record = with_cat(["0"; 8]);
    assert_eq!(compute_questionnaire_total(&record), Some(0));
}

#[test]
fn one_missing_item_makes_total_unknown() {
    let record = with_cat(["5", "5", "5", "5", "5", "5", "5", ""]);
    assert_eq!(compute_questionnaire_total(&record), None);
}

#[test]
fn unparseable_item_makes_total_unknown() {
    let record = with_cat(["1", "1", "1", "x", "1", "1", "1", "1"]);
    assert_eq!(compute_questionnaire_total(&record), None);
}

#[test]
fn overflowing_items_are_unknown_rather_than_panicking() {
    let record = with_cat(["4294967295"; 8]);
    assert_eq!(compute_questionnaire_total(&record), None);
}

#[test]
fn grade_band_boundaries() {
    assert_eq!(grade_from_percent(100), SeverityGrade::Gold1);
    assert_eq!(grade_from_percent(80), SeverityGrade::Gold1);
    assert_eq!(grade_from_percent(79), SeverityGrade::Gold2);
    assert_eq!(grade_from_percent(50), SeverityGrade::Gold2);
    assert_eq!(grade_from_percent(49), SeverityGrade::Gold3);
    assert_eq!(grade_from_percent(30), SeverityGrade::Gold3);
    assert_eq!(grade_from_percent(29), SeverityGrade::Gold4);
    assert_eq!(grade_from_percent(0), SeverityGrade::Gold4);
}

#[test]
fn severity_grade_unknown_without_percent() {
    let blank = create_initial_record();
    assert_eq!(compute_severity_grade(&blank), None);

    let garbage = blank.with_update(FieldUpdate::Fev1PercentPredicted("sixty".into()));
    assert_eq!(compute_severity_grade(&garbage), None);

    let set = blank.with_update(FieldUpdate::Fev1PercentPredicted("65".into()));
    assert_eq!(compute_severity_grade(&set), Some(SeverityGrade::Gold2));
}

#[test]
fn grade_display_names_number_and_descriptor() {
    assert_eq!(SeverityGrade::Gold3.to_string(), "GOLD 3 (severe)");
}

#[test]
fn obstruction_confirmed_below_threshold_only() {
    let record = |ratio: &str| {
        create_initial_record().with_update(FieldUpdate::PostBronchodilatorRatio(ratio.into()))
    };
    assert_eq!(
        diagnostic_confirmation(&record("0.69")),
        Some(DiagnosticConfirmation::Confirmed)
    );
    assert_eq!(
        diagnostic_confirmation(&record("0.70")),
        Some(DiagnosticConfirmation::NotConfirmed)
    );
    assert_eq!(diagnostic_confirmation(&record("")), None);
}

#[test]
fn symptom_impact_splits_at_ten() {
    assert_eq!(symptom_impact(Some(9)), Some(SymptomImpact::Low));
    assert_eq!(symptom_impact(Some(10)), Some(SymptomImpact::High));
    assert_eq!(symptom_impact(None), None);
}

#[test]
fn recomputation_is_idempotent() {
    let record = with_cat(["2"; 8])
        .with_update(FieldUpdate::Fev1PercentPredicted("45".into()))
        .with_update(FieldUpdate::MmrcScore("1".into()))
        .with_update(FieldUpdate::ExacerbationsLastYear("0".into()))
        .with_update(FieldUpdate::HospitalizationsLastYear("0".into()));

    let first = derive(&record);
    let second = derive(&record);
    assert_eq!(first, second);
    assert_eq!(first.questionnaire_total, Some(16));
}

proptest! {
    #[test]
    fn any_blank_item_yields_unknown(
        values in proptest::array::uniform8(0u32..=5),
        blank in 0usize..8,
    ) {
        let mut record = create_initial_record();
        for (i, item) in CatItem::ALL.into_iter().enumerate() {
            let text = if i == blank { String::new() } else { values[i].to_string() };
            record.apply(FieldUpdate::CatItem(item, text));
        }
        prop_assert_eq!(compute_questionnaire_total(&record), None);
    }

    #[test]
    fn complete_answers_total_within_range(values in proptest::array::uniform8(0u32..=5)) {
        let mut record = create_initial_record();
        for (item, value) in CatItem::ALL.into_iter().zip(values) {
            record.apply(FieldUpdate::CatItem(item, value.to_string()));
        }
        let total = compute_questionnaire_total(&record);
        prop_assert_eq!(total, Some(values.iter().sum::<u32>()));
        prop_assert!(total.unwrap() <= 40);
    }

    #[test]
    fn grade_never_improves_as_percent_falls(a in -10i64..=120, b in -10i64..=120) {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        prop_assert!(grade_from_percent(hi) <= grade_from_percent(lo));
    }
}
