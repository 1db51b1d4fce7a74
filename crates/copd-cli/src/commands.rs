use std::fmt::Write as _;
use std::path::Path;

use jiff::civil::Date;
use serde::Serialize;

use copd_core::{DerivedState, PatientRecord};
use copd_export::ReportSnapshot;
use copd_scoring::advisory::{advisories, Advisory};
use copd_scoring::calculators::{diagnostic_confirmation, symptom_impact, DiagnosticConfirmation};
use copd_scoring::treatment::{interventional_options, non_pharmacological, NonPharmacological};
use copd_scoring::{resolve_treatment, TreatmentRecommendation};
use copd_wizard::{NextOutcome, StepId, ValidationErrors, Wizard};

use crate::config::{CliConfig, OutputFormat};

pub fn load_record(path: &Path) -> eyre::Result<PatientRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read record at {}: {e}", path.display()))?;
    let record = PatientRecord::from_json(&contents)?;
    tracing::debug!(path = %path.display(), "record loaded");
    Ok(record)
}

/// Derived values plus everything resolved from them.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub derived: DerivedState,
    pub diagnosis: Option<DiagnosticConfirmation>,
    pub treatment: TreatmentRecommendation,
    pub interventional: Vec<String>,
    pub non_pharmacological: NonPharmacological,
    pub advisories: Vec<Advisory>,
}

pub fn assess(record: &PatientRecord) -> Assessment {
    let derived = copd_scoring::derive(record);
    Assessment {
        derived,
        diagnosis: diagnostic_confirmation(record),
        treatment: resolve_treatment(derived.risk_group, record.eosinophils().value()),
        interventional: interventional_options(derived.severity_grade, derived.risk_group),
        non_pharmacological: non_pharmacological(derived.risk_group),
        advisories: advisories(record, &derived),
    }
}

fn or_unknown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

pub fn format_assessment(
    record: &PatientRecord,
    assessment: &Assessment,
    format: OutputFormat,
) -> eyre::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(assessment)?);
    }

    let derived = &assessment.derived;
    let mut out = String::new();
    writeln!(out, "CAT total:       {}", or_unknown(derived.questionnaire_total))?;
    if let Some(impact) = symptom_impact(derived.questionnaire_total) {
        writeln!(out, "Symptom impact:  {impact:?}")?;
    }
    writeln!(out, "Severity grade:  {}", or_unknown(derived.severity_grade))?;
    writeln!(out, "GOLD group:      {}", or_unknown(derived.risk_group))?;
    if let Some(diagnosis) = assessment.diagnosis {
        writeln!(out, "Diagnosis:       {diagnosis:?}")?;
    }
    if record.eosinophils().is_invalid() {
        writeln!(out, "Eosinophils:     not a number, treated as unknown")?;
    }

    writeln!(out, "\nTreatment: {}", assessment.treatment.primary)?;
    for option in &assessment.treatment.options {
        writeln!(out, "  - {option}")?;
    }
    writeln!(out, "  {}", assessment.treatment.note)?;
    if let Some(note) = &assessment.treatment.eosinophil_note {
        writeln!(out, "  {note}")?;
    }
    if !assessment.interventional.is_empty() {
        writeln!(out, "\nInterventional:")?;
        for option in &assessment.interventional {
            writeln!(out, "  - {option}")?;
        }
    }
    if !assessment.advisories.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for advisory in &assessment.advisories {
            writeln!(out, "  ! {}", advisory.message())?;
        }
    }
    Ok(out)
}

/// Where a wizard walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub step: StepId,
    pub completed: bool,
    pub errors: ValidationErrors,
}

/// Drive the wizard forward from the first step until it blocks or finishes.
pub fn walk(record: PatientRecord) -> WalkOutcome {
    let mut wizard = Wizard::with_record(record);
    loop {
        match wizard.go_next() {
            NextOutcome::Advanced(_) => continue,
            NextOutcome::Blocked => {
                return WalkOutcome {
                    step: wizard.current_step(),
                    completed: false,
                    errors: wizard.errors().clone(),
                };
            }
            NextOutcome::Finished => {
                return WalkOutcome {
                    step: wizard.current_step(),
                    completed: true,
                    errors: ValidationErrors::new(),
                };
            }
        }
    }
}

pub fn format_walk(outcome: &WalkOutcome) -> String {
    if outcome.completed {
        return "All steps complete.\n".to_string();
    }
    let mut out = format!(
        "Blocked at step {} ({}):\n",
        outcome.step.index() + 1,
        outcome.step.title()
    );
    for (field, message) in &outcome.errors {
        out.push_str(&format!("  {field}: {message}\n"));
    }
    out
}

/// Render the report with the configured title and template.
pub fn report(record: &PatientRecord, date: Date, config: &CliConfig) -> eyre::Result<String> {
    let snapshot = ReportSnapshot::capture(record, date).with_title(config.report_title.clone());
    let rendered = match &config.report_template {
        Some(path) => {
            let template = copd_export::load_template(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            copd_export::render_report_with(&name, &template, &snapshot)?
        }
        None => copd_export::render_report(&snapshot)?,
    };
    Ok(rendered)
}

pub fn template() -> eyre::Result<String> {
    Ok(PatientRecord::new().to_json_pretty()?)
}
