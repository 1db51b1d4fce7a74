use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::fields::{CatItem, FieldUpdate, RiskFactor, Symptom};
use crate::numeric::{parse_decimal, parse_integer, ParsedNumeric};

/// Presence of the cardinal symptoms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SymptomFlags {
    pub dyspnea: bool,
    pub chronic_cough: bool,
    pub sputum_production: bool,
    pub recurrent_infections: bool,
}

impl SymptomFlags {
    pub fn get(&self, symptom: Symptom) -> bool {
        match symptom {
            Symptom::Dyspnea => self.dyspnea,
            Symptom::ChronicCough => self.chronic_cough,
            Symptom::SputumProduction => self.sputum_production,
            Symptom::RecurrentInfections => self.recurrent_infections,
        }
    }

    fn set(&mut self, symptom: Symptom, present: bool) {
        let slot = match symptom {
            Symptom::Dyspnea => &mut self.dyspnea,
            Symptom::ChronicCough => &mut self.chronic_cough,
            Symptom::SputumProduction => &mut self.sputum_production,
            Symptom::RecurrentInfections => &mut self.recurrent_infections,
        };
        *slot = present;
    }
}

/// Exposure history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RiskFactorFlags {
    pub smoking: bool,
    pub occupational: bool,
    pub biomass: bool,
    pub air_pollution: bool,
}

impl RiskFactorFlags {
    pub fn get(&self, factor: RiskFactor) -> bool {
        match factor {
            RiskFactor::Smoking => self.smoking,
            RiskFactor::Occupational => self.occupational,
            RiskFactor::Biomass => self.biomass,
            RiskFactor::AirPollution => self.air_pollution,
        }
    }

    fn set(&mut self, factor: RiskFactor, present: bool) {
        let slot = match factor {
            RiskFactor::Smoking => &mut self.smoking,
            RiskFactor::Occupational => &mut self.occupational,
            RiskFactor::Biomass => &mut self.biomass,
            RiskFactor::AirPollution => &mut self.air_pollution,
        };
        *slot = present;
    }
}

/// Raw CAT answers, one text value per item (`""` = unanswered).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct CatAnswers {
    pub cough: String,
    pub phlegm: String,
    pub chest_tightness: String,
    pub breathlessness: String,
    pub activity_limitation: String,
    pub confidence_leaving_home: String,
    pub sleep: String,
    pub energy: String,
}

impl CatAnswers {
    pub fn get(&self, item: CatItem) -> &str {
        match item {
            CatItem::Cough => &self.cough,
            CatItem::Phlegm => &self.phlegm,
            CatItem::ChestTightness => &self.chest_tightness,
            CatItem::Breathlessness => &self.breathlessness,
            CatItem::ActivityLimitation => &self.activity_limitation,
            CatItem::ConfidenceLeavingHome => &self.confidence_leaving_home,
            CatItem::Sleep => &self.sleep,
            CatItem::Energy => &self.energy,
        }
    }

    pub fn set(&mut self, item: CatItem, value: impl Into<String>) {
        let slot = match item {
            CatItem::Cough => &mut self.cough,
            CatItem::Phlegm => &mut self.phlegm,
            CatItem::ChestTightness => &mut self.chest_tightness,
            CatItem::Breathlessness => &mut self.breathlessness,
            CatItem::ActivityLimitation => &mut self.activity_limitation,
            CatItem::ConfidenceLeavingHome => &mut self.confidence_leaving_home,
            CatItem::Sleep => &mut self.sleep,
            CatItem::Energy => &mut self.energy,
        };
        *slot = value.into();
    }

    pub fn parsed(&self, item: CatItem) -> ParsedNumeric<u32> {
        parse_integer(self.get(item))
    }

    /// Items with no answer text.
    pub fn unanswered(&self) -> Vec<CatItem> {
        CatItem::ALL
            .into_iter()
            .filter(|item| self.get(*item).trim().is_empty())
            .collect()
    }
}

/// Everything the clinician enters across the wizard, stored as raw input.
///
/// Numeric fields hold the text exactly as typed; an empty string means
/// "not entered". Read them through the typed accessors, which return a
/// [`ParsedNumeric`] so that missing input stays distinguishable from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PatientRecord {
    // Identifying
    pub patient_name: String,
    pub patient_age: String,

    // Clinical indicators
    pub symptoms: SymptomFlags,
    pub risk_factors: RiskFactorFlags,

    // Spirometry
    pub pre_bronchodilator_ratio: String,
    pub post_bronchodilator_ratio: String,
    pub fev1_percent_predicted: String,

    // Symptom assessment
    pub mmrc_score: String,
    pub cat: CatAnswers,

    // Exacerbation history
    pub exacerbations_last_year: String,
    pub hospitalizations_last_year: String,

    pub blood_eosinophils: String,

    // Not consumed by the scoring engine yet
    pub current_treatment: BTreeSet<String>,
    pub comorbidities: BTreeSet<String>,
}

impl PatientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Return a copy of this record with one field changed.
    pub fn with_update(&self, update: FieldUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }

    /// Write one field in place.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::PatientName(v) => self.patient_name = v,
            FieldUpdate::PatientAge(v) => self.patient_age = v,
            FieldUpdate::Symptom(symptom, present) => self.symptoms.set(symptom, present),
            FieldUpdate::RiskFactor(factor, present) => self.risk_factors.set(factor, present),
            FieldUpdate::PreBronchodilatorRatio(v) => self.pre_bronchodilator_ratio = v,
            FieldUpdate::PostBronchodilatorRatio(v) => self.post_bronchodilator_ratio = v,
            FieldUpdate::Fev1PercentPredicted(v) => self.fev1_percent_predicted = v,
            FieldUpdate::MmrcScore(v) => self.mmrc_score = v,
            FieldUpdate::CatItem(item, v) => self.cat.set(item, v),
            FieldUpdate::ExacerbationsLastYear(v) => self.exacerbations_last_year = v,
            FieldUpdate::HospitalizationsLastYear(v) => self.hospitalizations_last_year = v,
            FieldUpdate::BloodEosinophils(v) => self.blood_eosinophils = v,
            FieldUpdate::CurrentTreatment(v) => self.current_treatment = v,
            FieldUpdate::Comorbidities(v) => self.comorbidities = v,
        }
    }

    pub fn age(&self) -> ParsedNumeric<i64> {
        parse_integer(&self.patient_age)
    }

    pub fn pre_ratio(&self) -> ParsedNumeric<f64> {
        parse_decimal(&self.pre_bronchodilator_ratio)
    }

    pub fn post_ratio(&self) -> ParsedNumeric<f64> {
        parse_decimal(&self.post_bronchodilator_ratio)
    }

    pub fn percent_predicted(&self) -> ParsedNumeric<i64> {
        parse_integer(&self.fev1_percent_predicted)
    }

    pub fn dyspnea_scale(&self) -> ParsedNumeric<u32> {
        parse_integer(&self.mmrc_score)
    }

    pub fn exacerbations(&self) -> ParsedNumeric<u32> {
        parse_integer(&self.exacerbations_last_year)
    }

    pub fn hospitalizations(&self) -> ParsedNumeric<u32> {
        parse_integer(&self.hospitalizations_last_year)
    }

    /// Blood eosinophil count in cells/µL; empty means unknown.
    pub fn eosinophils(&self) -> ParsedNumeric<u32> {
        parse_integer(&self.blood_eosinophils)
    }
}

/// A fresh record for a new wizard session: every text empty, every flag off.
pub fn create_initial_record() -> PatientRecord {
    PatientRecord::new()
}

/// Immutable update: returns a new record reflecting one field change.
pub fn update_field(record: &PatientRecord, update: FieldUpdate) -> PatientRecord {
    record.with_update(update)
}
