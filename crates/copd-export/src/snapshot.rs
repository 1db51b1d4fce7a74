use jiff::civil::Date;
use serde::Serialize;
use ts_rs::TS;

use copd_core::{DerivedState, PatientRecord, RiskFactor, Symptom};
use copd_scoring::advisory::advisories;
use copd_scoring::calculators::{
    diagnostic_confirmation, symptom_impact, DiagnosticConfirmation, SymptomImpact,
};
use copd_scoring::treatment::{
    interventional_options, non_pharmacological, EosinophilTier, NonPharmacological,
};
use copd_scoring::{resolve_treatment, TreatmentRecommendation};

pub const DEFAULT_TITLE: &str = "COPD assessment report";

const NOT_ENTERED: &str = "Not entered";

/// Everything the report shows, resolved to display text.
///
/// Unknown values become readable placeholders here rather than in the
/// template, so every template sees the same wording.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ReportSnapshot {
    pub title: String,
    pub date: Date,

    pub patient_name: String,
    pub patient_age: String,
    pub symptoms: Vec<String>,
    pub risk_factors: Vec<String>,

    pub post_ratio: String,
    /// `None` when the ratio is missing or malformed.
    pub diagnosis: Option<String>,
    pub diagnosis_confirmed: Option<bool>,
    /// Grade with the entered percentage, `None` when unknown.
    pub severity: Option<String>,

    pub mmrc: String,
    pub cat_total: String,
    pub symptom_impact: String,
    pub risk_group: String,

    pub exacerbations: String,
    pub hospitalizations: String,
    pub eosinophils: String,
    pub eosinophil_support: Option<String>,

    pub treatment: TreatmentRecommendation,
    pub interventional: Vec<String>,
    pub non_pharmacological: NonPharmacological,
    pub advisories: Vec<String>,

    /// Raw derived values for machine consumers.
    pub derived: DerivedState,
}

fn or_placeholder(raw: &str, placeholder: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

impl ReportSnapshot {
    /// Freeze `record` and its derived values as of `date`.
    pub fn capture(record: &PatientRecord, date: Date) -> Self {
        let derived = copd_scoring::derive(record);
        let eosinophils = record.eosinophils().value();

        let confirmation = diagnostic_confirmation(record);
        let diagnosis = confirmation.map(|c| match c {
            DiagnosticConfirmation::Confirmed => {
                "Airflow obstruction present (consistent with COPD)".to_string()
            }
            DiagnosticConfirmation::NotConfirmed => {
                "No airflow obstruction by this criterion".to_string()
            }
        });

        let severity = derived
            .severity_grade
            .map(|grade| format!("{grade}, {}% predicted", record.fev1_percent_predicted.trim()));

        let symptom_impact = match symptom_impact(derived.questionnaire_total) {
            Some(SymptomImpact::Low) => "Low",
            Some(SymptomImpact::High) => "Medium to high",
            None => "Not assessed",
        };

        let patient_age = match record.patient_age.trim() {
            "" => NOT_ENTERED.to_string(),
            age => format!("{age} years"),
        };
        let eosinophil_text = match record.blood_eosinophils.trim() {
            "" => NOT_ENTERED.to_string(),
            count => format!("{count} cells/µL"),
        };

        let snapshot = Self {
            title: DEFAULT_TITLE.to_string(),
            date,
            patient_name: or_placeholder(&record.patient_name, NOT_ENTERED),
            patient_age,
            symptoms: Symptom::ALL
                .into_iter()
                .filter(|s| record.symptoms.get(*s))
                .map(|s| s.label().to_string())
                .collect(),
            risk_factors: RiskFactor::ALL
                .into_iter()
                .filter(|f| record.risk_factors.get(*f))
                .map(|f| f.label().to_string())
                .collect(),
            post_ratio: or_placeholder(&record.post_bronchodilator_ratio, NOT_ENTERED),
            diagnosis,
            diagnosis_confirmed: confirmation.map(|c| c == DiagnosticConfirmation::Confirmed),
            severity,
            mmrc: or_placeholder(&record.mmrc_score, NOT_ENTERED),
            cat_total: derived
                .questionnaire_total
                .map(|t| format!("{t}/40"))
                .unwrap_or_else(|| "Not calculated".to_string()),
            symptom_impact: symptom_impact.to_string(),
            risk_group: derived
                .risk_group
                .map(|g| g.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            exacerbations: or_placeholder(&record.exacerbations_last_year, "0"),
            hospitalizations: or_placeholder(&record.hospitalizations_last_year, "0"),
            eosinophils: eosinophil_text,
            eosinophil_support: EosinophilTier::from_count(eosinophils)
                .ics_support()
                .map(str::to_string),
            treatment: resolve_treatment(derived.risk_group, eosinophils),
            interventional: interventional_options(derived.severity_grade, derived.risk_group),
            non_pharmacological: non_pharmacological(derived.risk_group),
            advisories: advisories(record, &derived)
                .iter()
                .map(|a| a.message())
                .collect(),
            derived,
        };

        tracing::debug!(
            group = %snapshot.risk_group,
            advisories = snapshot.advisories.len(),
            "report snapshot captured"
        );
        snapshot
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
