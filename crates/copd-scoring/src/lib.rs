//! copd-scoring
//!
//! The GOLD scoring engine. Pure functions only: no I/O and no state.
//! Defines the CAT and mMRC instruments, the questionnaire total and
//! severity-grade calculators, the ABE risk-group classifier, the treatment
//! recommendation resolver, and the consistency advisories.

pub mod advisory;
pub mod calculators;
pub mod classify;
pub mod error;
pub mod instruments;
pub mod pipeline;
pub mod scoring;
pub mod treatment;

pub use calculators::{compute_questionnaire_total, compute_severity_grade};
pub use classify::classify_risk_group;
pub use pipeline::derive;
pub use treatment::{resolve_treatment, TreatmentRecommendation};

use error::ScoringError;
use scoring::{Item, ScoreEntry, ScoreRange, ValidationError};

/// Trait implemented by each patient-reported instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "cat", "mmrc").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "COPD Assessment Test (CAT)").
    fn name(&self) -> &str;

    /// The scored items, in presentation order.
    fn items(&self) -> &[Item];

    /// Range of the summed total, for instruments that have one.
    fn total_range(&self) -> Option<ScoreRange> {
        None
    }

    /// Validate a set of score entries against this instrument's item ranges.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            if let Some(item) = self.items().iter().find(|i| i.id == entry.item_id)
                && !item.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    item_id: entry.item_id.clone(),
                    value: entry.value,
                    expected_range: item.range,
                    score_type: item.score_type,
                    message: format!(
                        "{}: {} score {} is outside range [{}, {}]",
                        self.name(),
                        item.name,
                        entry.value,
                        item.range.min,
                        item.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Like [`Instrument::validate_scores`], but also rejects item ids this
    /// instrument does not define, and stops at the first problem.
    fn check_scores(&self, scores: &[ScoreEntry]) -> Result<(), ScoringError> {
        if let Some(entry) = scores
            .iter()
            .find(|e| !self.items().iter().any(|i| i.id == e.item_id))
        {
            return Err(ScoringError::UnknownItem {
                instrument_id: self.id().to_string(),
                item_id: entry.item_id.clone(),
            });
        }
        match self.validate_scores(scores).into_iter().next() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Format answered items as a plain-text block, one line per item.
    fn describe_scores(&self, scores: &[ScoreEntry]) -> String {
        let mut output = format!("{}\n", self.name());
        for item in self.items() {
            match scores.iter().find(|e| e.item_id == item.id) {
                Some(entry) => output.push_str(&format!(
                    "  - {}: {}/{}\n",
                    item.name, entry.value, item.range.max
                )),
                None => output.push_str(&format!("  - {}: not answered\n", item.name)),
            }
        }
        output
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::cat::Cat),
        Box::new(instruments::mmrc::Mmrc),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument by ID, failing with [`ScoringError::UnknownInstrument`].
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, ScoringError> {
    get_instrument(id).ok_or_else(|| ScoringError::UnknownInstrument(id.to_string()))
}
