use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// GOLD spirometric grade of airflow limitation (from FEV1 % predicted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityGrade {
    /// FEV1 ≥ 80% predicted.
    Gold1,
    /// 50% ≤ FEV1 < 80% predicted.
    Gold2,
    /// 30% ≤ FEV1 < 50% predicted.
    Gold3,
    /// FEV1 < 30% predicted.
    Gold4,
}

impl SeverityGrade {
    pub fn number(&self) -> u8 {
        match self {
            SeverityGrade::Gold1 => 1,
            SeverityGrade::Gold2 => 2,
            SeverityGrade::Gold3 => 3,
            SeverityGrade::Gold4 => 4,
        }
    }

    pub fn descriptor(&self) -> &'static str {
        match self {
            SeverityGrade::Gold1 => "mild",
            SeverityGrade::Gold2 => "moderate",
            SeverityGrade::Gold3 => "severe",
            SeverityGrade::Gold4 => "very severe",
        }
    }
}

impl fmt::Display for SeverityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GOLD {} ({})", self.number(), self.descriptor())
    }
}

/// GOLD ABE assessment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskGroup {
    /// Low symptom burden, low exacerbation risk.
    A,
    /// High symptom burden, low exacerbation risk.
    B,
    /// Exacerbation history: ≥2 moderate exacerbations or ≥1 hospitalization.
    E,
}

impl fmt::Display for RiskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            RiskGroup::A => "A",
            RiskGroup::B => "B",
            RiskGroup::E => "E",
        };
        f.write_str(letter)
    }
}

/// Values recomputed from a [`PatientRecord`](crate::PatientRecord) after
/// every edit. `None` means the inputs are incomplete ("unknown").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedState {
    pub questionnaire_total: Option<u32>,
    pub severity_grade: Option<SeverityGrade>,
    pub risk_group: Option<RiskGroup>,
}
