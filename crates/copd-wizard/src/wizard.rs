use std::collections::BTreeSet;

use serde::Serialize;
use ts_rs::TS;

use copd_core::{DerivedState, FieldKey, FieldUpdate, PatientRecord};

use crate::draft::QuestionnaireDraft;
use crate::error::WizardError;
use crate::steps::StepId;
use crate::validation::{can_proceed, validate_step, ValidationErrors};

/// Report generation is offered from this step index onward (assessment).
const REPORT_FROM_INDEX: usize = 2;

/// Result of [`Wizard::go_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "outcome", content = "step", rename_all = "snake_case")]
#[ts(export)]
pub enum NextOutcome {
    /// Moved forward to this step.
    Advanced(StepId),
    /// The current step has validation errors; stayed put.
    Blocked,
    /// Already on the last step; nothing further to advance to.
    Finished,
}

/// Label of the forward action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PrimaryAction {
    Next,
    Finish,
}

/// Session state for one patient assessment.
///
/// Owns the single [`PatientRecord`]; every edit goes through
/// [`Wizard::update_field`] or [`Wizard::submit_questionnaire`].
#[derive(Debug, Clone)]
pub struct Wizard {
    current: StepId,
    record: PatientRecord,
    expanded_sections: BTreeSet<String>,
    errors: ValidationErrors,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// First step, blank record, nothing expanded, no errors.
    pub fn new() -> Self {
        Self::with_record(PatientRecord::new())
    }

    /// Start on the first step with a pre-filled record.
    pub fn with_record(record: PatientRecord) -> Self {
        Self {
            current: StepId::FIRST,
            record,
            expanded_sections: BTreeSet::new(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn current_step(&self) -> StepId {
        self.current
    }

    pub fn current_index(&self) -> usize {
        self.current.index()
    }

    pub fn record(&self) -> &PatientRecord {
        &self.record
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn derived(&self) -> DerivedState {
        copd_scoring::derive(&self.record)
    }

    /// Apply one field edit and drop any error shown for that field.
    pub fn update_field(&mut self, update: FieldUpdate) {
        let key = update.key();
        self.record = self.record.with_update(update);
        self.errors.remove(&key);
    }

    pub fn questionnaire_draft(&self) -> QuestionnaireDraft {
        QuestionnaireDraft::from_record(&self.record)
    }

    /// Write a completed questionnaire into the record in one edit.
    pub fn submit_questionnaire(&mut self, draft: QuestionnaireDraft) -> Result<(), WizardError> {
        let answers = draft.submit()?;
        self.record.cat = answers;
        self.errors.remove(&FieldKey::QuestionnaireTotal);
        Ok(())
    }

    /// Validate the current step and keep the resulting errors for display.
    pub fn validate_current(&mut self) -> bool {
        let total = self.derived().questionnaire_total;
        self.errors = validate_step(self.current, &self.record, total);
        self.errors.is_empty()
    }

    pub fn can_proceed(&self) -> bool {
        let total = self.derived().questionnaire_total;
        can_proceed(self.current, &self.record, total, &self.errors)
    }

    pub fn go_next(&mut self) -> NextOutcome {
        if !self.validate_current() {
            tracing::warn!(
                step = %self.current,
                errors = self.errors.len(),
                "next refused: step has validation errors"
            );
            return NextOutcome::Blocked;
        }
        if self.current.is_last() {
            tracing::info!(step = %self.current, "assessment finished");
            return NextOutcome::Finished;
        }
        if !self.can_proceed() {
            tracing::warn!(step = %self.current, "next refused: required fields empty");
            return NextOutcome::Blocked;
        }

        let next = StepId::from_index(self.current_index() + 1).unwrap_or(StepId::LAST);
        tracing::info!(from = %self.current, to = %next, "step advanced");
        self.current = next;
        NextOutcome::Advanced(next)
    }

    /// Always allowed; stays on the first step when already there.
    pub fn go_previous(&mut self) -> StepId {
        let previous = StepId::from_index(self.current_index().saturating_sub(1))
            .unwrap_or(StepId::FIRST);
        if previous != self.current {
            tracing::info!(from = %self.current, to = %previous, "step went back");
        }
        self.current = previous;
        previous
    }

    /// Direct navigation from the step bar. Not gated by validation.
    pub fn jump_to(&mut self, step: StepId) {
        tracing::info!(from = %self.current, to = %step, "jumped to step");
        self.current = step;
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index() > 0
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.current.is_last() {
            PrimaryAction::Finish
        } else {
            PrimaryAction::Next
        }
    }

    /// Toggle an expandable section open or closed; returns the new state.
    pub fn toggle_section(&mut self, key: &str) -> bool {
        if self.expanded_sections.remove(key) {
            false
        } else {
            self.expanded_sections.insert(key.to_string());
            true
        }
    }

    pub fn is_section_expanded(&self, key: &str) -> bool {
        self.expanded_sections.contains(key)
    }

    /// Whether the report action is shown on the current step.
    pub fn report_available(&self) -> bool {
        self.current_index() >= REPORT_FROM_INDEX
    }

    /// Validate the current step before opening the report. Errors stay
    /// visible when it fails.
    pub fn request_report(&mut self) -> bool {
        self.report_available() && self.validate_current()
    }
}
