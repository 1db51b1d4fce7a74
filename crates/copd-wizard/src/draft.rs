use copd_core::record::CatAnswers;
use copd_core::{CatItem, PatientRecord};
use copd_scoring::instruments::cat::{self, Cat};
use copd_scoring::Instrument;

use crate::error::WizardError;

/// Working copy of the CAT answers while the questionnaire dialog is open.
///
/// Edits stay local until [`QuestionnaireDraft::submit`]; cancelling the
/// dialog just drops the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionnaireDraft {
    answers: CatAnswers,
}

impl QuestionnaireDraft {
    /// Start from the answers already in the record.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            answers: record.cat.clone(),
        }
    }

    pub fn answer(&self, item: CatItem) -> &str {
        self.answers.get(item)
    }

    pub fn set(&mut self, item: CatItem, value: impl Into<String>) {
        self.answers.set(item, value);
    }

    pub fn is_complete(&self) -> bool {
        self.answers.unanswered().is_empty()
    }

    /// Accept the draft when every item is answered with a score in 0–5.
    pub fn submit(self) -> Result<CatAnswers, WizardError> {
        let missing = self.answers.unanswered();
        if !missing.is_empty() {
            return Err(WizardError::IncompleteQuestionnaire { missing });
        }

        if let Some(item) = CatItem::ALL
            .into_iter()
            .find(|item| self.answers.parsed(*item).is_invalid())
        {
            return Err(WizardError::InvalidAnswer {
                item,
                value: self.answers.get(item).to_string(),
            });
        }

        Cat.check_scores(&cat::score_entries(&self.answers))?;
        Ok(self.answers)
    }
}
