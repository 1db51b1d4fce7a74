//! copd-wizard
//!
//! The step-by-step assessment flow: the fixed step sequence, per-step
//! validation, the `can_proceed` gate, and the wizard state machine that a
//! host UI drives. Scoring is delegated to `copd-scoring`.

pub mod draft;
pub mod error;
pub mod guidance;
pub mod steps;
pub mod summary;
pub mod validation;
pub mod wizard;

pub use error::WizardError;
pub use steps::{steps, Step, StepId};
pub use validation::{can_proceed, validate_step, ValidationErrors};
pub use wizard::{NextOutcome, PrimaryAction, Wizard};
