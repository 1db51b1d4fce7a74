use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Cardinal symptoms that prompt a COPD work-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Symptom {
    Dyspnea,
    ChronicCough,
    SputumProduction,
    RecurrentInfections,
}

impl Symptom {
    pub const ALL: [Symptom; 4] = [
        Symptom::Dyspnea,
        Symptom::ChronicCough,
        Symptom::SputumProduction,
        Symptom::RecurrentInfections,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Dyspnea => "Progressive dyspnea, worse on exertion, persistent",
            Symptom::ChronicCough => "Chronic cough (may be intermittent and non-productive)",
            Symptom::SputumProduction => "Chronic sputum production",
            Symptom::RecurrentInfections => "Recurrent lower respiratory tract infections",
        }
    }
}

/// Exposures that raise the pre-test probability of COPD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactor {
    Smoking,
    Occupational,
    Biomass,
    AirPollution,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 4] = [
        RiskFactor::Smoking,
        RiskFactor::Occupational,
        RiskFactor::Biomass,
        RiskFactor::AirPollution,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::Smoking => "Tobacco smoking (including popular local preparations)",
            RiskFactor::Occupational => {
                "Occupational dusts, vapours, fumes, gases and other chemicals"
            }
            RiskFactor::Biomass => "Smoke from home cooking and heating fuels",
            RiskFactor::AirPollution => "Outdoor air pollution",
        }
    }
}

/// The eight items of the COPD Assessment Test (CAT), in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CatItem {
    Cough,
    Phlegm,
    ChestTightness,
    Breathlessness,
    ActivityLimitation,
    ConfidenceLeavingHome,
    Sleep,
    Energy,
}

impl CatItem {
    pub const ALL: [CatItem; 8] = [
        CatItem::Cough,
        CatItem::Phlegm,
        CatItem::ChestTightness,
        CatItem::Breathlessness,
        CatItem::ActivityLimitation,
        CatItem::ConfidenceLeavingHome,
        CatItem::Sleep,
        CatItem::Energy,
    ];

    /// Stable identifier, shared with the CAT instrument definition.
    pub fn id(&self) -> &'static str {
        match self {
            CatItem::Cough => "cough",
            CatItem::Phlegm => "phlegm",
            CatItem::ChestTightness => "chest_tightness",
            CatItem::Breathlessness => "breathlessness",
            CatItem::ActivityLimitation => "activity_limitation",
            CatItem::ConfidenceLeavingHome => "confidence_leaving_home",
            CatItem::Sleep => "sleep",
            CatItem::Energy => "energy",
        }
    }

    pub fn field_key(&self) -> FieldKey {
        match self {
            CatItem::Cough => FieldKey::CatCough,
            CatItem::Phlegm => FieldKey::CatPhlegm,
            CatItem::ChestTightness => FieldKey::CatChestTightness,
            CatItem::Breathlessness => FieldKey::CatBreathlessness,
            CatItem::ActivityLimitation => FieldKey::CatActivityLimitation,
            CatItem::ConfidenceLeavingHome => FieldKey::CatConfidenceLeavingHome,
            CatItem::Sleep => FieldKey::CatSleep,
            CatItem::Energy => FieldKey::CatEnergy,
        }
    }
}

impl FromStr for CatItem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatItem::ALL
            .into_iter()
            .find(|item| item.id() == s)
            .ok_or_else(|| CoreError::UnknownCatItem(s.to_string()))
    }
}

/// Every addressable field of the patient record, plus the synthetic
/// [`FieldKey::QuestionnaireTotal`] key used for the composite CAT error.
///
/// Used as the key of validation error maps and to name the target of a
/// [`FieldUpdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKey {
    PatientName,
    PatientAge,

    Dyspnea,
    ChronicCough,
    SputumProduction,
    RecurrentInfections,

    Smoking,
    Occupational,
    Biomass,
    AirPollution,

    PreBronchodilatorRatio,
    PostBronchodilatorRatio,
    Fev1PercentPredicted,

    MmrcScore,

    CatCough,
    CatPhlegm,
    CatChestTightness,
    CatBreathlessness,
    CatActivityLimitation,
    CatConfidenceLeavingHome,
    CatSleep,
    CatEnergy,

    ExacerbationsLastYear,
    HospitalizationsLastYear,
    BloodEosinophils,

    CurrentTreatment,
    Comorbidities,

    /// Composite key: all eight CAT items answered.
    QuestionnaireTotal,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::PatientName => "patient_name",
            FieldKey::PatientAge => "patient_age",
            FieldKey::Dyspnea => "dyspnea",
            FieldKey::ChronicCough => "chronic_cough",
            FieldKey::SputumProduction => "sputum_production",
            FieldKey::RecurrentInfections => "recurrent_infections",
            FieldKey::Smoking => "smoking",
            FieldKey::Occupational => "occupational",
            FieldKey::Biomass => "biomass",
            FieldKey::AirPollution => "air_pollution",
            FieldKey::PreBronchodilatorRatio => "pre_bronchodilator_ratio",
            FieldKey::PostBronchodilatorRatio => "post_bronchodilator_ratio",
            FieldKey::Fev1PercentPredicted => "fev1_percent_predicted",
            FieldKey::MmrcScore => "mmrc_score",
            FieldKey::CatCough => "cat_cough",
            FieldKey::CatPhlegm => "cat_phlegm",
            FieldKey::CatChestTightness => "cat_chest_tightness",
            FieldKey::CatBreathlessness => "cat_breathlessness",
            FieldKey::CatActivityLimitation => "cat_activity_limitation",
            FieldKey::CatConfidenceLeavingHome => "cat_confidence_leaving_home",
            FieldKey::CatSleep => "cat_sleep",
            FieldKey::CatEnergy => "cat_energy",
            FieldKey::ExacerbationsLastYear => "exacerbations_last_year",
            FieldKey::HospitalizationsLastYear => "hospitalizations_last_year",
            FieldKey::BloodEosinophils => "blood_eosinophils",
            FieldKey::CurrentTreatment => "current_treatment",
            FieldKey::Comorbidities => "comorbidities",
            FieldKey::QuestionnaireTotal => "questionnaire_total",
        }
    }

    const ALL: [FieldKey; 28] = [
        FieldKey::PatientName,
        FieldKey::PatientAge,
        FieldKey::Dyspnea,
        FieldKey::ChronicCough,
        FieldKey::SputumProduction,
        FieldKey::RecurrentInfections,
        FieldKey::Smoking,
        FieldKey::Occupational,
        FieldKey::Biomass,
        FieldKey::AirPollution,
        FieldKey::PreBronchodilatorRatio,
        FieldKey::PostBronchodilatorRatio,
        FieldKey::Fev1PercentPredicted,
        FieldKey::MmrcScore,
        FieldKey::CatCough,
        FieldKey::CatPhlegm,
        FieldKey::CatChestTightness,
        FieldKey::CatBreathlessness,
        FieldKey::CatActivityLimitation,
        FieldKey::CatConfidenceLeavingHome,
        FieldKey::CatSleep,
        FieldKey::CatEnergy,
        FieldKey::ExacerbationsLastYear,
        FieldKey::HospitalizationsLastYear,
        FieldKey::BloodEosinophils,
        FieldKey::CurrentTreatment,
        FieldKey::Comorbidities,
        FieldKey::QuestionnaireTotal,
    ];
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A single-field edit, carrying a value of the type that field stores.
///
/// The variant decides which field is written, so an update can never target
/// a field that does not exist or carry a value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldUpdate {
    PatientName(String),
    PatientAge(String),
    Symptom(Symptom, bool),
    RiskFactor(RiskFactor, bool),
    PreBronchodilatorRatio(String),
    PostBronchodilatorRatio(String),
    Fev1PercentPredicted(String),
    MmrcScore(String),
    CatItem(CatItem, String),
    ExacerbationsLastYear(String),
    HospitalizationsLastYear(String),
    BloodEosinophils(String),
    CurrentTreatment(BTreeSet<String>),
    Comorbidities(BTreeSet<String>),
}

impl FieldUpdate {
    /// The record field this update writes.
    pub fn key(&self) -> FieldKey {
        match self {
            FieldUpdate::PatientName(_) => FieldKey::PatientName,
            FieldUpdate::PatientAge(_) => FieldKey::PatientAge,
            FieldUpdate::Symptom(symptom, _) => match symptom {
                Symptom::Dyspnea => FieldKey::Dyspnea,
                Symptom::ChronicCough => FieldKey::ChronicCough,
                Symptom::SputumProduction => FieldKey::SputumProduction,
                Symptom::RecurrentInfections => FieldKey::RecurrentInfections,
            },
            FieldUpdate::RiskFactor(factor, _) => match factor {
                RiskFactor::Smoking => FieldKey::Smoking,
                RiskFactor::Occupational => FieldKey::Occupational,
                RiskFactor::Biomass => FieldKey::Biomass,
                RiskFactor::AirPollution => FieldKey::AirPollution,
            },
            FieldUpdate::PreBronchodilatorRatio(_) => FieldKey::PreBronchodilatorRatio,
            FieldUpdate::PostBronchodilatorRatio(_) => FieldKey::PostBronchodilatorRatio,
            FieldUpdate::Fev1PercentPredicted(_) => FieldKey::Fev1PercentPredicted,
            FieldUpdate::MmrcScore(_) => FieldKey::MmrcScore,
            FieldUpdate::CatItem(item, _) => item.field_key(),
            FieldUpdate::ExacerbationsLastYear(_) => FieldKey::ExacerbationsLastYear,
            FieldUpdate::HospitalizationsLastYear(_) => FieldKey::HospitalizationsLastYear,
            FieldUpdate::BloodEosinophils(_) => FieldKey::BloodEosinophils,
            FieldUpdate::CurrentTreatment(_) => FieldKey::CurrentTreatment,
            FieldUpdate::Comorbidities(_) => FieldKey::Comorbidities,
        }
    }
}
