use crate::steps::StepId;

/// Static reference content shown on the informational steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepGuidance {
    pub heading: &'static str,
    pub summary: &'static str,
    pub items: &'static [&'static str],
}

const EXACERBATION: StepGuidance = StepGuidance {
    heading: "Managing COPD exacerbations",
    summary: "An acute worsening of respiratory symptoms beyond usual day-to-day \
              variation that leads to a change in treatment.",
    items: &[
        "Increase short-acting bronchodilators (SABA ± SAMA).",
        "Systemic corticosteroids (e.g. prednisone 40 mg/day for 5 days).",
        "Antibiotics when there are signs of bacterial infection (increased sputum \
         volume and/or purulence, and/or increased dyspnea).",
        "Assess the need for hospitalization (symptom severity, comorbidities, social \
         support).",
        "Prevent future exacerbations (optimise maintenance treatment, rehabilitation, \
         action plan).",
    ],
};

const FOLLOW_UP: StepGuidance = StepGuidance {
    heading: "Follow-up and long-term management",
    summary: "Regular review adjusts treatment, tracks disease progression and \
              manages comorbidities.",
    items: &[
        "Reassess symptoms (mMRC, CAT) and exacerbation history.",
        "Check inhaler technique and treatment adherence.",
        "Spirometry at least yearly, sooner on clinical change.",
        "Screen for and manage comorbidities (cardiovascular, osteoporosis, \
         anxiety/depression).",
        "Encourage physical activity and continued smoking abstinence.",
        "Update the personalised action plan.",
    ],
};

/// Guidance for the informational steps; `None` for data-entry steps.
pub fn step_guidance(step: StepId) -> Option<&'static StepGuidance> {
    match step {
        StepId::ExacerbationManagement => Some(&EXACERBATION),
        StepId::FollowUp => Some(&FOLLOW_UP),
        StepId::PatientInfo | StepId::Diagnostic | StepId::Assessment | StepId::Treatment => {
            None
        }
    }
}
