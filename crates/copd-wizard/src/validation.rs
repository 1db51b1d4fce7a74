use std::collections::BTreeMap;

use copd_core::numeric::ParsedNumeric;
use copd_core::{FieldKey, PatientRecord};
use copd_scoring::instruments::mmrc::GRADE_RANGE;

use crate::steps::StepId;

/// Field-keyed error messages for one step. Empty means the step is valid.
pub type ValidationErrors = BTreeMap<FieldKey, String>;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;

/// Errors blocking the given step, for the record as it stands.
///
/// `questionnaire_total` is the caller's current derived CAT total, so the
/// validator sees the same value the UI is showing.
pub fn validate_step(
    step: StepId,
    record: &PatientRecord,
    questionnaire_total: Option<u32>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        StepId::PatientInfo => {
            if record.patient_name.trim().is_empty() {
                errors.insert(FieldKey::PatientName, "Name is required".to_string());
            }
            match record.age() {
                ParsedNumeric::Empty => {
                    errors.insert(FieldKey::PatientAge, "Age is required".to_string());
                }
                ParsedNumeric::Value(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
                ParsedNumeric::Value(_) | ParsedNumeric::Invalid => {
                    errors.insert(
                        FieldKey::PatientAge,
                        format!("Age must be between {MIN_AGE} and {MAX_AGE}"),
                    );
                }
            }
        }
        StepId::Diagnostic => match record.post_ratio() {
            ParsedNumeric::Empty => {
                errors.insert(
                    FieldKey::PostBronchodilatorRatio,
                    "Post-bronchodilator FEV1/FVC is required for the diagnosis".to_string(),
                );
            }
            ParsedNumeric::Value(ratio) if (0.0..=1.0).contains(&ratio) => {}
            ParsedNumeric::Value(_) | ParsedNumeric::Invalid => {
                errors.insert(
                    FieldKey::PostBronchodilatorRatio,
                    "FEV1/FVC must be between 0 and 1".to_string(),
                );
            }
        },
        StepId::Assessment => {
            match record.percent_predicted() {
                ParsedNumeric::Empty => {
                    errors.insert(
                        FieldKey::Fev1PercentPredicted,
                        "FEV1 % predicted is required".to_string(),
                    );
                }
                ParsedNumeric::Value(p) if (0..=100).contains(&p) => {}
                ParsedNumeric::Value(_) | ParsedNumeric::Invalid => {
                    errors.insert(
                        FieldKey::Fev1PercentPredicted,
                        "FEV1 % predicted must be between 0 and 100".to_string(),
                    );
                }
            }
            match record.dyspnea_scale() {
                ParsedNumeric::Empty => {
                    errors.insert(FieldKey::MmrcScore, "mMRC score is required".to_string());
                }
                ParsedNumeric::Value(grade) if GRADE_RANGE.contains(grade) => {}
                ParsedNumeric::Value(_) | ParsedNumeric::Invalid => {
                    errors.insert(
                        FieldKey::MmrcScore,
                        format!(
                            "mMRC score must be between {} and {}",
                            GRADE_RANGE.min, GRADE_RANGE.max
                        ),
                    );
                }
            }
            if questionnaire_total.is_none() {
                errors.insert(
                    FieldKey::QuestionnaireTotal,
                    "CAT score incomplete. Please answer every question in the CAT \
                     questionnaire."
                        .to_string(),
                );
            }
        }
        StepId::Treatment | StepId::ExacerbationManagement | StepId::FollowUp => {}
    }

    errors
}

/// Whether the "next" action is available on `step`.
///
/// Requires both that `errors` holds nothing for the step's fields and that
/// the step's required fields are non-empty; `errors` may be stale relative
/// to `record`. The last step never proceeds.
pub fn can_proceed(
    step: StepId,
    record: &PatientRecord,
    questionnaire_total: Option<u32>,
    errors: &ValidationErrors,
) -> bool {
    let clear = |keys: &[FieldKey]| keys.iter().all(|k| !errors.contains_key(k));

    match step {
        StepId::PatientInfo => {
            !record.patient_name.trim().is_empty()
                && !record.patient_age.trim().is_empty()
                && clear(&[FieldKey::PatientName, FieldKey::PatientAge])
        }
        StepId::Diagnostic => {
            !record.post_bronchodilator_ratio.trim().is_empty()
                && clear(&[FieldKey::PostBronchodilatorRatio])
        }
        StepId::Assessment => {
            !record.fev1_percent_predicted.trim().is_empty()
                && !record.dyspnea_scale().is_empty()
                && questionnaire_total.is_some()
                && clear(&[
                    FieldKey::Fev1PercentPredicted,
                    FieldKey::MmrcScore,
                    FieldKey::QuestionnaireTotal,
                ])
        }
        StepId::Treatment | StepId::ExacerbationManagement => true,
        StepId::FollowUp => false,
    }
}
