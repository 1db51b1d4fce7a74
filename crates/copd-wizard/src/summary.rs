use serde::Serialize;
use ts_rs::TS;

use copd_core::{DerivedState, PatientRecord};

/// One line of the summary sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}

fn entry(label: &str, value: String) -> SummaryEntry {
    SummaryEntry {
        label: label.to_string(),
        value,
    }
}

/// Trimmed text, or `None` when nothing but whitespace was entered.
fn entered(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Entered and derived values worth keeping in view, skipping blanks.
///
/// The group is listed only once known, and only when at least one symptom
/// measure (mMRC or CAT) has been entered.
pub fn summary(record: &PatientRecord, derived: &DerivedState) -> Vec<SummaryEntry> {
    let mut out = Vec::new();

    if let Some(name) = entered(&record.patient_name) {
        out.push(entry("Patient", name.to_string()));
    }
    if let Some(age) = entered(&record.patient_age) {
        out.push(entry("Age", format!("{age} years")));
    }
    if let Some(ratio) = entered(&record.post_bronchodilator_ratio) {
        out.push(entry("FEV1/FVC", ratio.to_string()));
    }
    if let Some(percent) = entered(&record.fev1_percent_predicted) {
        out.push(entry("FEV1 % pred", format!("{percent}%")));
    }
    let mmrc = entered(&record.mmrc_score);
    if let Some(grade) = mmrc {
        out.push(entry("mMRC", grade.to_string()));
    }
    if let Some(total) = derived.questionnaire_total {
        out.push(entry("CAT", total.to_string()));
    }
    let has_symptom_measure = mmrc.is_some() || derived.questionnaire_total.is_some();
    if has_symptom_measure && let Some(group) = derived.risk_group {
        out.push(entry("Group", group.to_string()));
    }

    out
}
