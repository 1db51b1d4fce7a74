use serde::{Deserialize, Serialize};
use ts_rs::TS;

use copd_core::{CatItem, PatientRecord, SeverityGrade};

use crate::instruments::cat::HIGH_IMPACT_THRESHOLD;

/// Post-bronchodilator FEV1/FVC below this ratio confirms obstruction.
pub const OBSTRUCTION_RATIO: f64 = 0.70;

/// Sum of the eight CAT items.
///
/// All-or-nothing: if any item is empty or does not parse, the total is
/// unknown. Item values are not clamped here; the entry dialog enforces 0–5.
pub fn compute_questionnaire_total(record: &PatientRecord) -> Option<u32> {
    CatItem::ALL.iter().try_fold(0u32, |total, item| {
        total.checked_add(record.cat.parsed(*item).value()?)
    })
}

/// GOLD grade from FEV1 % predicted; unknown when the field is empty or
/// does not parse.
pub fn compute_severity_grade(record: &PatientRecord) -> Option<SeverityGrade> {
    record.percent_predicted().value().map(grade_from_percent)
}

/// Step function over FEV1 % predicted. Each band includes its lower bound.
pub fn grade_from_percent(percent: i64) -> SeverityGrade {
    match percent {
        p if p >= 80 => SeverityGrade::Gold1,
        p if p >= 50 => SeverityGrade::Gold2,
        p if p >= 30 => SeverityGrade::Gold3,
        _ => SeverityGrade::Gold4,
    }
}

/// Whether spirometry confirms persistent airflow obstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosticConfirmation {
    /// Post-bronchodilator FEV1/FVC < 0.70.
    Confirmed,
    NotConfirmed,
}

/// Advisory only: never gates the wizard. Unknown when the ratio is missing
/// or malformed.
pub fn diagnostic_confirmation(record: &PatientRecord) -> Option<DiagnosticConfirmation> {
    record.post_ratio().value().map(|ratio| {
        if ratio < OBSTRUCTION_RATIO {
            DiagnosticConfirmation::Confirmed
        } else {
            DiagnosticConfirmation::NotConfirmed
        }
    })
}

/// Symptom impact read from the CAT total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomImpact {
    /// CAT < 10.
    Low,
    /// CAT ≥ 10.
    High,
}

pub fn symptom_impact(questionnaire_total: Option<u32>) -> Option<SymptomImpact> {
    questionnaire_total.map(|total| {
        if total >= HIGH_IMPACT_THRESHOLD {
            SymptomImpact::High
        } else {
            SymptomImpact::Low
        }
    })
}
