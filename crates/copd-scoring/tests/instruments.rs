use copd_core::record::CatAnswers;
use copd_core::CatItem;
use copd_scoring::error::ScoringError;
use copd_scoring::instruments::{cat, mmrc};
use copd_scoring::scoring::ScoreEntry;
use copd_scoring::{all_instruments, get_instrument, require_instrument};

#[test]
fn registry_lists_cat_and_mmrc() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, ["cat", "mmrc"]);
    assert!(get_instrument("cat").is_some());
    assert!(matches!(
        require_instrument("sgrq"),
        Err(ScoringError::UnknownInstrument(_))
    ));
}

#[test]
fn cat_items_follow_questionnaire_order() {
    let cat = get_instrument("cat").unwrap();
    let ids: Vec<_> = cat.items().iter().map(|i| i.id.as_str()).collect();
    let expected: Vec<_> = CatItem::ALL.iter().map(|i| i.id()).collect();
    assert_eq!(ids, expected);
    assert_eq!(cat.total_range().unwrap().max, 40);
    assert!(cat.items().iter().all(|i| i.low_anchor.is_some() && i.high_anchor.is_some()));
}

#[test]
fn out_of_range_item_reported() {
    let cat = get_instrument("cat").unwrap();
    let errors = cat.validate_scores(&[
        ScoreEntry { item_id: "cough".into(), value: 5 },
        ScoreEntry { item_id: "sleep".into(), value: 6 },
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].item_id, "sleep");
    assert!(errors[0].message.contains("outside range [0, 5]"));
}

#[test]
fn check_scores_rejects_unknown_items() {
    let cat = get_instrument("cat").unwrap();
    let result = cat.check_scores(&[ScoreEntry { item_id: "wheeze".into(), value: 1 }]);
    assert!(matches!(result, Err(ScoringError::UnknownItem { .. })));
    assert!(cat
        .check_scores(&[ScoreEntry { item_id: "energy".into(), value: 0 }])
        .is_ok());
}

#[test]
fn score_entries_skip_unanswered_items() {
    let mut answers = CatAnswers::default();
    answers.set(CatItem::Cough, "3");
    answers.set(CatItem::Energy, "oops");
    let entries = cat::score_entries(&answers);
    assert_eq!(entries, vec![ScoreEntry { item_id: "cough".into(), value: 3 }]);
}

#[test]
fn describe_scores_marks_missing_items() {
    let text = get_instrument("cat")
        .unwrap()
        .describe_scores(&[ScoreEntry { item_id: "cough".into(), value: 2 }]);
    assert!(text.contains("Cough frequency: 2/5"));
    assert!(text.contains("Energy level: not answered"));
}

#[test]
fn mmrc_grades_are_described() {
    assert!(mmrc::grade_description(0).is_some());
    assert!(mmrc::grade_description(4).is_some());
    assert!(mmrc::grade_description(5).is_none());
}
