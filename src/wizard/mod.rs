//! The five-step listing wizard: step table, per-step validation, session
//! state, and the controller that walks a seller from Basic Info to submit.

pub mod controller;
pub mod preview;
pub mod state;
pub mod steps;
pub mod validate;

pub use controller::{ListingWizard, SubmitOutcome, WizardError, WizardEvent};
pub use preview::{build_summary, summary_lines, ListingSummary};
pub use state::{DraftUpdate, Field, WizardErrors, WizardState};
pub use steps::{definition, Step, StepDefinition, STEP_TABLE};
