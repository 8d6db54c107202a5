//! The section questionnaire as a finite-state machine.
//!
//! States are `Idle` and `Collecting { record, field, input_mode }`; every
//! transition is a method on [`Wizard`] and finishes within one call.

mod engine;

pub use crate::section::ValidationError;
pub use engine::{MAX_BATCH, MissingSection, SubmitOutcome, Wizard, WizardState};
