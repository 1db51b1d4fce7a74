use copd_core::{create_initial_record, CatItem, FieldUpdate, PatientRecord};
use copd_scoring::advisory::{advisories, Advisory};
use copd_scoring::derive;

fn record(ratio: &str, mmrc: &str, cat_each: &str) -> PatientRecord {
    let mut record = create_initial_record()
        .with_update(FieldUpdate::PostBronchodilatorRatio(ratio.into()))
        .with_update(FieldUpdate::MmrcScore(mmrc.into()));
    for item in CatItem::ALL {
        record.apply(FieldUpdate::CatItem(item, cat_each.into()));
    }
    record
}

#[test]
fn ratio_at_threshold_is_not_confirmed() {
    let r = record("0.70", "", "");
    let found = advisories(&r, &derive(&r));
    assert_eq!(found, vec![Advisory::DiagnosisNotConfirmed { ratio: 0.70 }]);
}

#[test]
fn concordant_scores_raise_nothing() {
    let r = record("0.55", "2", "2");
    assert!(advisories(&r, &derive(&r)).is_empty());
}

#[test]
fn scale_high_questionnaire_low() {
    let r = record("0.55", "3", "1");
    let found = advisories(&r, &derive(&r));
    assert_eq!(found, vec![Advisory::DyspneaAboveQuestionnaire { mmrc: 3, cat: 8 }]);
}

#[test]
fn questionnaire_high_scale_low() {
    let r = record("0.55", "0", "2");
    let found = advisories(&r, &derive(&r));
    assert_eq!(found, vec![Advisory::QuestionnaireAboveDyspnea { mmrc: 0, cat: 16 }]);
    assert!(found[0].message().contains("CAT (16"));
}
