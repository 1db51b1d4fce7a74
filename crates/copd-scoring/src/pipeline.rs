use copd_core::{DerivedState, PatientRecord};

use crate::calculators::{compute_questionnaire_total, compute_severity_grade};
use crate::classify::classify_risk_group;

/// Recompute every derived value from the record.
///
/// Synchronous and side-effect free apart from a debug trace; hosts may call
/// it after every edit, or debounce as they see fit.
pub fn derive(record: &PatientRecord) -> DerivedState {
    let questionnaire_total = compute_questionnaire_total(record);
    let severity_grade = compute_severity_grade(record);
    let risk_group = classify_risk_group(record, questionnaire_total);

    tracing::debug!(
        ?questionnaire_total,
        ?severity_grade,
        ?risk_group,
        "derived state recomputed"
    );

    DerivedState {
        questionnaire_total,
        severity_grade,
        risk_group,
    }
}
