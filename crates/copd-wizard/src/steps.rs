use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::WizardError;

/// Wizard steps, in the order they are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum StepId {
    PatientInfo,
    Diagnostic,
    Assessment,
    Treatment,
    ExacerbationManagement,
    FollowUp,
}

/// A step as shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Step {
    pub id: StepId,
    #[ts(type = "string")]
    pub title: &'static str,
}

const STEPS: [Step; 6] = [
    Step { id: StepId::PatientInfo, title: "Patient" },
    Step { id: StepId::Diagnostic, title: "Diagnosis" },
    Step { id: StepId::Assessment, title: "Assessment" },
    Step { id: StepId::Treatment, title: "Treatment" },
    Step { id: StepId::ExacerbationManagement, title: "Exacerbations" },
    Step { id: StepId::FollowUp, title: "Follow-up" },
];

/// The fixed step sequence.
pub fn steps() -> &'static [Step] {
    &STEPS
}

impl StepId {
    pub const FIRST: StepId = StepId::PatientInfo;
    pub const LAST: StepId = StepId::FollowUp;

    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::PatientInfo => "patient-info",
            StepId::Diagnostic => "diagnostic",
            StepId::Assessment => "assessment",
            StepId::Treatment => "treatment",
            StepId::ExacerbationManagement => "exacerbation-management",
            StepId::FollowUp => "follow-up",
        }
    }

    /// Zero-based position in [`steps`].
    pub fn index(&self) -> usize {
        STEPS.iter().position(|s| s.id == *self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<StepId> {
        STEPS.get(index).map(|s| s.id)
    }

    pub fn title(&self) -> &'static str {
        STEPS[self.index()].title
    }

    pub fn is_last(&self) -> bool {
        *self == StepId::LAST
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepId {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STEPS
            .iter()
            .map(|step| step.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| WizardError::UnknownStep(s.to_string()))
    }
}
