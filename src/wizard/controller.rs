//! The wizard state machine. A [`ListingWizard`] walks a seller through the
//! five steps, refuses to move forward past a step that does not validate,
//! and hands the finished draft to a [`SubmissionGateway`] exactly once per
//! submit attempt.

use thiserror::Error;

use crate::gateway::{SubmissionError, SubmissionGateway};
use crate::listing::{ImageUpload, ListingDraft, ListingId};
use crate::wizard::state::{DraftUpdate, WizardErrors, WizardState};
use crate::wizard::steps::{definition, Step};

/// What a navigation call did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// The current step changed.
    Moved,
    /// Validation failed; the step is unchanged and the errors say why.
    Blocked,
    /// Nothing to do (already at the boundary the call pushed against).
    NoOp,
}

/// Result of a submit attempt that the session accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The gateway accepted the draft; the session is now terminal.
    Completed(ListingId),
    /// The gateway refused; the reason is also recorded in the submit error
    /// slot and the session stays at Preview for a retry.
    Failed(SubmissionError),
}

/// A call the session cannot honor in its current state. These signal caller
/// bugs, not user input problems, and never change the session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("The listing has already been submitted")]
    AlreadySubmitted,
    #[error("A submission is already in flight")]
    SubmitInFlight,
    #[error("Submit is only available from the Preview step (currently on {current})")]
    NotAtPreview { current: Step },
    #[error("Cannot jump ahead from {from} to {to}")]
    StepNotReachable { from: Step, to: Step },
}

/// One seller's listing-creation session.
///
/// The session exclusively owns its state; every mutation goes through the
/// methods here, and all of them refuse to run once the listing has been
/// submitted.
#[derive(Debug, Default)]
pub struct ListingWizard {
    state: WizardState,
    submitting: bool,
    submitted: Option<ListingId>,
}

impl ListingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn draft(&self) -> &ListingDraft {
        self.state.draft()
    }

    pub fn errors(&self) -> &WizardErrors {
        self.state.errors()
    }

    /// True while a submit call is awaiting the gateway.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True once a submit has succeeded; the session is then terminal.
    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// The id the gateway assigned, once a submit has succeeded.
    pub fn submitted_id(&self) -> Option<ListingId> {
        self.submitted
    }

    fn ensure_mutable(&self) -> Result<(), WizardError> {
        if self.submitted.is_some() {
            Err(WizardError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }

    /// Writes one draft field, clearing any stale error recorded against it.
    pub fn update(&mut self, update: DraftUpdate) -> Result<(), WizardError> {
        self.ensure_mutable()?;
        self.state.apply(update);
        Ok(())
    }

    /// Adds uploads up to the image cap (extras are dropped silently) and
    /// returns how many were accepted.
    pub fn add_images(&mut self, batch: Vec<ImageUpload>) -> Result<usize, WizardError> {
        self.ensure_mutable()?;
        Ok(self.state.add_images(batch))
    }

    /// Removes the image at `index`; later images shift down one position.
    pub fn remove_image(&mut self, index: usize) -> Result<Option<ImageUpload>, WizardError> {
        self.ensure_mutable()?;
        Ok(self.state.remove_image(index))
    }

    /// Validates the current step and advances on success. A failing step
    /// replaces the error set and stays put; the Preview step has nowhere
    /// further to go, so a valid call there only clears errors.
    pub fn next(&mut self) -> Result<WizardEvent, WizardError> {
        self.ensure_mutable()?;
        let current = self.state.step();
        let result = (definition(current).validate)(self.state.draft());
        if !result.is_empty() {
            self.state.errors_mut().set_validation(result);
            return Ok(WizardEvent::Blocked);
        }
        self.state.errors_mut().clear();
        match current.next() {
            Some(next) => {
                self.state.set_step(next);
                Ok(WizardEvent::Moved)
            }
            None => Ok(WizardEvent::NoOp),
        }
    }

    /// Steps back one position without re-validating and without touching
    /// errors; already at the first step is a no-op.
    pub fn previous(&mut self) -> Result<WizardEvent, WizardError> {
        self.ensure_mutable()?;
        match self.state.step().previous() {
            Some(previous) => {
                self.state.set_step(previous);
                Ok(WizardEvent::Moved)
            }
            None => Ok(WizardEvent::NoOp),
        }
    }

    /// Jumps to `target`. Backward jumps are always allowed; the only legal
    /// forward jump is to the immediate next step, and only when the current
    /// step validates. Anything else is rejected with the session unchanged.
    pub fn go_to_step(&mut self, target: Step) -> Result<WizardEvent, WizardError> {
        self.ensure_mutable()?;
        let current = self.state.step();
        if target == current {
            return Ok(WizardEvent::NoOp);
        }
        if target < current {
            self.state.set_step(target);
            return Ok(WizardEvent::Moved);
        }
        if current.next() == Some(target) {
            let result = (definition(current).validate)(self.state.draft());
            if result.is_empty() {
                self.state.errors_mut().clear();
                self.state.set_step(target);
                return Ok(WizardEvent::Moved);
            }
        }
        Err(WizardError::StepNotReachable {
            from: current,
            to: target,
        })
    }

    /// Hands the draft to the gateway. Only legal from the Preview step, and
    /// only one attempt may be in flight at a time. Success makes the session
    /// terminal; a gateway failure lands in the submit error slot and leaves
    /// the session at Preview so the caller can submit again.
    ///
    /// Cancellation is not supported: dropping the returned future mid-flight
    /// leaves the submitting flag set until [`ListingWizard::reset`].
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<SubmitOutcome, WizardError>
    where
        G: SubmissionGateway + ?Sized,
    {
        self.ensure_mutable()?;
        if self.submitting {
            return Err(WizardError::SubmitInFlight);
        }
        let current = self.state.step();
        if !current.is_last() {
            return Err(WizardError::NotAtPreview { current });
        }

        self.submitting = true;
        let result = gateway.create_listing(self.state.draft()).await;
        self.submitting = false;

        match result {
            Ok(id) => {
                self.submitted = Some(id);
                self.state.errors_mut().clear();
                tracing::info!(listing_id = %id, "Listing submitted.");
                Ok(SubmitOutcome::Completed(id))
            }
            Err(err) => {
                self.state.errors_mut().set_submit(err.to_string());
                tracing::warn!(error = %err, "Listing submission failed.");
                Ok(SubmitOutcome::Failed(err))
            }
        }
    }

    /// Abandons the session and starts a fresh one. Also the escape hatch for
    /// a submitting flag left behind by a dropped submit future.
    pub fn reset(&mut self) {
        self.state.reset();
        self.submitting = false;
        self.submitted = None;
    }
}
