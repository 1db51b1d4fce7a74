use copd_core::{PatientRecord, RiskGroup};

use crate::instruments::cat::HIGH_IMPACT_THRESHOLD;
use crate::instruments::mmrc::HIGH_BURDEN_THRESHOLD;

/// Moderate exacerbations in the past year that place a patient in group E.
pub const EXACERBATION_THRESHOLD: u32 = 2;
/// Hospitalizations in the past year that place a patient in group E.
pub const HOSPITALIZATION_THRESHOLD: u32 = 1;

/// GOLD ABE group for a record, given its already-computed CAT total.
///
/// Unknown unless the mMRC grade, CAT total, exacerbation count and
/// hospitalization count are all present and parse.
pub fn classify_risk_group(
    record: &PatientRecord,
    questionnaire_total: Option<u32>,
) -> Option<RiskGroup> {
    let dyspnea_scale = record.dyspnea_scale().value()?;
    let total = questionnaire_total?;
    let exacerbations = record.exacerbations().value()?;
    let hospitalizations = record.hospitalizations().value()?;

    let group = classify(dyspnea_scale, total, exacerbations, hospitalizations);
    tracing::debug!(?group, "risk group classified");
    Some(group)
}

/// First match wins: exacerbation history dominates symptom burden.
pub fn classify(
    dyspnea_scale: u32,
    questionnaire_total: u32,
    exacerbations: u32,
    hospitalizations: u32,
) -> RiskGroup {
    if exacerbations >= EXACERBATION_THRESHOLD || hospitalizations >= HOSPITALIZATION_THRESHOLD {
        RiskGroup::E
    } else if dyspnea_scale >= HIGH_BURDEN_THRESHOLD || questionnaire_total >= HIGH_IMPACT_THRESHOLD
    {
        RiskGroup::B
    } else {
        RiskGroup::A
    }
}
