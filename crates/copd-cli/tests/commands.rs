use copd_cli::commands::{assess, format_assessment, format_walk, load_record, report, walk};
use copd_cli::config::{CliConfig, OutputFormat};
use copd_core::{CatItem, FieldKey, FieldUpdate, PatientRecord, RiskGroup};
use copd_wizard::StepId;
use jiff::civil::date;

fn complete_record() -> PatientRecord {
    let mut record = PatientRecord::new();
    for update in [
        FieldUpdate::PatientName("John Smith".into()),
        FieldUpdate::PatientAge("64".into()),
        FieldUpdate::PostBronchodilatorRatio("0.62".into()),
        FieldUpdate::Fev1PercentPredicted("58".into()),
        FieldUpdate::MmrcScore("1".into()),
        FieldUpdate::ExacerbationsLastYear("0".into()),
        FieldUpdate::HospitalizationsLastYear("0".into()),
    ] {
        record.apply(update);
    }
    for item in CatItem::ALL {
        record.apply(FieldUpdate::CatItem(item, "1".into()));
    }
    record
}

#[test]
fn walk_blocks_on_first_invalid_step() {
    let record = complete_record().with_update(FieldUpdate::PostBronchodilatorRatio("".into()));
    let outcome = walk(record);

    assert!(!outcome.completed);
    assert_eq!(outcome.step, StepId::Diagnostic);
    assert!(outcome.errors.contains_key(&FieldKey::PostBronchodilatorRatio));
    assert!(format_walk(&outcome).starts_with("Blocked at step 2 (Diagnosis)"));
}

#[test]
fn walk_completes_valid_record() {
    let outcome = walk(complete_record());
    assert!(outcome.completed);
    assert_eq!(outcome.step, StepId::FollowUp);
    assert_eq!(format_walk(&outcome), "All steps complete.\n");
}

#[test]
fn assess_text_output() {
    let record = complete_record();
    let assessment = assess(&record);
    assert_eq!(assessment.derived.risk_group, Some(RiskGroup::A));

    let text = format_assessment(&record, &assessment, OutputFormat::Text).unwrap();
    assert!(text.contains("CAT total:       8"));
    assert!(text.contains("GOLD group:      A"));
    assert!(text.contains("GOLD 2 (moderate)"));
    assert!(!text.contains("Warnings"));
}

#[test]
fn assess_json_output() {
    let record = complete_record().with_update(FieldUpdate::MmrcScore("3".into()));
    let assessment = assess(&record);
    let json = format_assessment(&record, &assessment, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["derived"]["risk_group"], "B");
    assert_eq!(value["advisories"][0]["kind"], "dyspnea_above_questionnaire");
}

#[test]
fn record_loads_from_partial_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    std::fs::write(&path, r#"{ "patient_name": "A", "mmrc_score": "2" }"#).unwrap();

    let record = load_record(&path).unwrap();
    assert_eq!(record.mmrc_score, "2");
    assert!(record.patient_age.is_empty());
}

#[test]
fn missing_record_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_record(&dir.path().join("nope.json")).is_err());
}

#[test]
fn report_uses_configured_template() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("short.tera");
    std::fs::write(&template, "{{ title }}|{{ risk_group }}|{{ date }}").unwrap();

    let config = CliConfig {
        report_template: Some(template),
        report_title: "Clinic".to_string(),
        ..CliConfig::default()
    };
    let out = report(&complete_record(), date(2025, 6, 1), &config).unwrap();
    assert_eq!(out, "Clinic|A|2025-06-01");
}

#[test]
fn report_defaults_to_builtin_template() {
    let out = report(&complete_record(), date(2025, 6, 1), &CliConfig::default()).unwrap();
    assert!(out.starts_with("# COPD assessment report"));
}

#[test]
fn walk_blocks_when_mmrc_is_unreadable() {
    for mmrc in ["  ", "abc"] {
        let record = complete_record().with_update(FieldUpdate::MmrcScore(mmrc.into()));
        assert_eq!(assess(&record).derived.risk_group, None);

        let outcome = walk(record);
        assert!(!outcome.completed, "mmrc {mmrc:?}");
        assert_eq!(outcome.step, StepId::Assessment);
        assert!(outcome.errors.contains_key(&FieldKey::MmrcScore));
    }
}
