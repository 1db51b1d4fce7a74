use serde::{Deserialize, Serialize};
use ts_rs::TS;

use copd_core::{RiskGroup, SeverityGrade};

/// Eosinophils (cells/µL) at or above which ICS is strongly supported.
pub const EOSINOPHIL_HIGH: u32 = 300;
/// Eosinophils (cells/µL) at or above which ICS is conditionally supported.
pub const EOSINOPHIL_INTERMEDIATE: u32 = 100;

/// Blood eosinophil band used to weigh inhaled corticosteroids (ICS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EosinophilTier {
    /// ≥ 300 cells/µL.
    High,
    /// 100–299 cells/µL.
    Intermediate,
    /// < 100 cells/µL.
    Low,
    /// Not measured.
    Unknown,
}

impl EosinophilTier {
    pub fn from_count(eosinophils: Option<u32>) -> Self {
        match eosinophils {
            Some(n) if n >= EOSINOPHIL_HIGH => EosinophilTier::High,
            Some(n) if n >= EOSINOPHIL_INTERMEDIATE => EosinophilTier::Intermediate,
            Some(_) => EosinophilTier::Low,
            None => EosinophilTier::Unknown,
        }
    }

    /// Strength of support for adding ICS, as shown next to the count.
    pub fn ics_support(&self) -> Option<&'static str> {
        match self {
            EosinophilTier::High => Some(
                "Strong support for adding ICS if exacerbations or symptoms persist.",
            ),
            EosinophilTier::Intermediate => Some(
                "Conditional support for ICS, to be discussed according to phenotype \
                 and exacerbation risk.",
            ),
            EosinophilTier::Low => Some(
                "Little support for ICS at initiation, unless there is concomitant asthma.",
            ),
            EosinophilTier::Unknown => None,
        }
    }
}

/// Which branch of the resolver produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentTier {
    /// Group A: a single bronchodilator.
    Monotherapy,
    /// Group B: LABA + LAMA.
    DualBronchodilator,
    /// Group E, eosinophils ≥ 300: LABA + LAMA + ICS, strong support.
    TripleTherapy,
    /// Group E, eosinophils 100–299: LABA + LAMA, ICS to discuss.
    DualWithConditionalIcs,
    /// Group E, eosinophils < 100 or unknown: LABA + LAMA, alternatives to ICS.
    DualWithAlternatives,
    /// Group unknown.
    Incomplete,
}

/// Initial pharmacological treatment for a GOLD group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentRecommendation {
    pub primary: String,
    pub options: Vec<String>,
    pub note: String,
    pub tier: TreatmentTier,
    /// Extra eosinophil advisory that does not change the primary therapy.
    pub eosinophil_note: Option<String>,
}

const DUAL_EXAMPLES: [&str; 5] = [
    "Formoterol/Glycopyrronium",
    "Indacaterol/Glycopyrronium",
    "Vilanterol/Umeclidinium",
    "Formoterol/Aclidinium",
    "Tiotropium/Olodaterol",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Total over every (group, eosinophil) pair, including unknown for both.
pub fn resolve_treatment(
    risk_group: Option<RiskGroup>,
    eosinophils: Option<u32>,
) -> TreatmentRecommendation {
    let eos_tier = EosinophilTier::from_count(eosinophils);
    let recommendation = match risk_group {
        Some(RiskGroup::A) => group_a(),
        Some(RiskGroup::B) => group_b(eos_tier),
        Some(RiskGroup::E) => group_e(eos_tier),
        None => incomplete(),
    };
    tracing::debug!(
        group = ?risk_group,
        eosinophil_tier = ?eos_tier,
        tier = ?recommendation.tier,
        "treatment resolved"
    );
    recommendation
}

fn group_a() -> TreatmentRecommendation {
    TreatmentRecommendation {
        primary: "A bronchodilator".to_string(),
        options: strings(&[
            "SABA (salbutamol, terbutaline) as needed",
            "SAMA (ipratropium) as needed",
            "LABA (formoterol, salmeterol, indacaterol, olodaterol)",
            "LAMA (tiotropium, glycopyrronium, umeclidinium, aclidinium)",
        ]),
        note: "The choice depends on availability and individual response. Maintenance \
               LABA or LAMA may be considered if symptoms persist despite short-acting \
               bronchodilators."
            .to_string(),
        tier: TreatmentTier::Monotherapy,
        eosinophil_note: None,
    }
}

fn group_b(eos_tier: EosinophilTier) -> TreatmentRecommendation {
    let eosinophil_note = (eos_tier == EosinophilTier::High).then(|| {
        "Eosinophils ≥ 300 cells/µL: ICS is not part of initial therapy for group B, \
         but consider escalation to LABA + LAMA + ICS if exacerbations occur."
            .to_string()
    });
    TreatmentRecommendation {
        primary: "LABA + LAMA combination".to_string(),
        options: strings(&DUAL_EXAMPLES),
        note: "A single-inhaler combination is generally preferred to improve adherence."
            .to_string(),
        tier: TreatmentTier::DualBronchodilator,
        eosinophil_note,
    }
}

fn group_e(eos_tier: EosinophilTier) -> TreatmentRecommendation {
    match eos_tier {
        EosinophilTier::High => TreatmentRecommendation {
            primary: "LABA + LAMA + ICS".to_string(),
            options: strings(&[
                "Formoterol/Glycopyrronium/Budesonide",
                "Vilanterol/Umeclidinium/Fluticasone furoate",
                "Single-inhaler triple therapy is preferred over multiple inhalers",
            ]),
            note: "Strong support for ICS (eosinophils ≥ 300 cells/µL). Monitor \
                   exacerbations and ICS side effects, including pneumonia."
                .to_string(),
            tier: TreatmentTier::TripleTherapy,
            eosinophil_note: None,
        },
        EosinophilTier::Intermediate => {
            let mut options = strings(&DUAL_EXAMPLES);
            options.push(
                "If exacerbations persist on LABA + LAMA, discuss adding ICS \
                 (LABA + LAMA + ICS) case by case"
                    .to_string(),
            );
            TreatmentRecommendation {
                primary: "LABA + LAMA combination".to_string(),
                options,
                note: "Conditional support for ICS (eosinophils 100–299 cells/µL): weigh the \
                       exacerbation history against the risk of pneumonia."
                    .to_string(),
                tier: TreatmentTier::DualWithConditionalIcs,
                eosinophil_note: None,
            }
        }
        EosinophilTier::Low | EosinophilTier::Unknown => {
            let mut options = strings(&DUAL_EXAMPLES);
            options.extend(strings(&[
                "Roflumilast if FEV1 < 50% predicted and chronic bronchitis",
                "Azithromycin, preferentially in former smokers",
            ]));
            TreatmentRecommendation {
                primary: "LABA + LAMA combination".to_string(),
                options,
                note: "Little support for ICS (eosinophils < 100 cells/µL or not measured) \
                       unless there is concomitant asthma. Consider the alternatives listed \
                       if exacerbations persist."
                    .to_string(),
                tier: TreatmentTier::DualWithAlternatives,
                eosinophil_note: None,
            }
        }
    }
}

fn incomplete() -> TreatmentRecommendation {
    TreatmentRecommendation {
        primary: "Incomplete evaluation: the GOLD group cannot be determined.".to_string(),
        options: Vec::new(),
        note: "Please complete the previous steps.".to_string(),
        tier: TreatmentTier::Incomplete,
        eosinophil_note: None,
    }
}

/// Interventional options for symptomatic or high-risk patients with severe
/// or very severe airflow limitation. Empty when either input is unknown.
pub fn interventional_options(
    grade: Option<SeverityGrade>,
    risk_group: Option<RiskGroup>,
) -> Vec<String> {
    let (Some(grade), Some(group)) = (grade, risk_group) else {
        return Vec::new();
    };
    if group == RiskGroup::A || grade < SeverityGrade::Gold3 {
        return Vec::new();
    }

    let mut options = strings(&[
        "Lung volume reduction (endobronchial valves or surgery) in emphysema with severe \
         hyperinflation despite optimal treatment",
        "Bullectomy for a large bulla compressing adjacent lung",
    ]);
    if grade == SeverityGrade::Gold4 {
        options.push(
            "Referral for lung transplant evaluation in very severe, progressive disease"
                .to_string(),
        );
    }
    options
}

/// Non-pharmacological management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NonPharmacological {
    pub essential: Vec<String>,
    pub by_assessment: Vec<String>,
    /// Pulmonary rehabilitation is specifically indicated (groups B and E).
    pub rehabilitation_indicated: bool,
}

pub fn non_pharmacological(risk_group: Option<RiskGroup>) -> NonPharmacological {
    NonPharmacological {
        essential: strings(&[
            "Smoking cessation (advice and cessation support)",
            "Regular, adapted physical activity",
            "Vaccinations (annual influenza, pneumococcal, COVID-19, pertussis)",
        ]),
        by_assessment: strings(&[
            "Pulmonary rehabilitation (symptomatic and/or post-exacerbation patients, \
             notably groups B and E)",
            "Self-management education with a personalised action plan",
            "Nutritional support if needed",
            "Long-term oxygen therapy (severe resting hypoxaemia)",
            "Non-invasive ventilation (selected patients with severe chronic hypercapnia)",
        ]),
        rehabilitation_indicated: matches!(risk_group, Some(RiskGroup::B | RiskGroup::E)),
    }
}
