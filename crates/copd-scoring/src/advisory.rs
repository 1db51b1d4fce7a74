use serde::{Deserialize, Serialize};
use ts_rs::TS;

use copd_core::{DerivedState, PatientRecord};

use crate::calculators::OBSTRUCTION_RATIO;
use crate::instruments::cat::HIGH_IMPACT_THRESHOLD;
use crate::instruments::mmrc::HIGH_BURDEN_THRESHOLD;

/// A consistency warning shown alongside the treatment step. Never blocks
/// progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Advisory {
    /// Post-bronchodilator FEV1/FVC ≥ 0.70.
    DiagnosisNotConfirmed { ratio: f64 },
    /// mMRC says symptomatic, CAT says low impact.
    DyspneaAboveQuestionnaire { mmrc: u32, cat: u32 },
    /// CAT says symptomatic, mMRC says low burden.
    QuestionnaireAboveDyspnea { mmrc: u32, cat: u32 },
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::DiagnosisNotConfirmed { ratio } => format!(
                "Post-bronchodilator FEV1/FVC {ratio} ≥ 0.70: spirometry does not confirm \
                 COPD. Reconsider the diagnosis."
            ),
            Advisory::DyspneaAboveQuestionnaire { mmrc, cat } => format!(
                "Possible discordance between mMRC ({mmrc}, symptomatic) and CAT ({cat}, \
                 low impact). Favour the overall clinical assessment."
            ),
            Advisory::QuestionnaireAboveDyspnea { mmrc, cat } => format!(
                "Possible discordance between mMRC ({mmrc}, low burden) and CAT ({cat}, \
                 symptomatic). Favour the overall clinical assessment."
            ),
        }
    }
}

pub fn advisories(record: &PatientRecord, derived: &DerivedState) -> Vec<Advisory> {
    let mut out = Vec::new();

    if let Some(ratio) = record.post_ratio().value()
        && ratio >= OBSTRUCTION_RATIO
    {
        out.push(Advisory::DiagnosisNotConfirmed { ratio });
    }

    if let (Some(mmrc), Some(cat)) = (record.dyspnea_scale().value(), derived.questionnaire_total)
    {
        let scale_high = mmrc >= HIGH_BURDEN_THRESHOLD;
        let cat_high = cat >= HIGH_IMPACT_THRESHOLD;
        if scale_high && !cat_high {
            out.push(Advisory::DyspneaAboveQuestionnaire { mmrc, cat });
        } else if !scale_high && cat_high {
            out.push(Advisory::QuestionnaireAboveDyspnea { mmrc, cat });
        }
    }

    out
}
