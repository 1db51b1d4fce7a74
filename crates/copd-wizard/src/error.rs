use thiserror::Error;

use copd_core::CatItem;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("unknown step: {0}")]
    UnknownStep(String),

    #[error("questionnaire incomplete: {} item(s) unanswered", missing.len())]
    IncompleteQuestionnaire { missing: Vec<CatItem> },

    #[error("invalid questionnaire answer for '{item:?}': {value:?}")]
    InvalidAnswer { item: CatItem, value: String },

    #[error(transparent)]
    Scoring(#[from] copd_scoring::error::ScoringError),
}
