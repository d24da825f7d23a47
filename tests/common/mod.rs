use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use auction_core::gateway::{SubmissionError, SubmissionGateway};
use auction_core::listing::{
    Category, Condition, ImageUpload, ListingDraft, ListingId, PaymentMethod,
};
use auction_core::wizard::{DraftUpdate, ListingWizard, Step, WizardEvent};

/// A draft that satisfies every step of the wizard.
#[allow(dead_code)]
pub fn complete_draft() -> ListingDraft {
    let mut draft = ListingDraft::new();
    draft.title = "Gibson Les Paul Standard".into();
    draft.description = "2019, cherry sunburst, includes hard case.".into();
    draft.category = Some(Category::MusicalInstruments);
    draft
        .images
        .push(ImageUpload::new("body.jpg", vec![1, 2, 3]));
    draft.start_price = Some(1800.0);
    draft.condition = Some(Condition::Excellent);
    draft.payment_methods.insert(PaymentMethod::BankTransfer);
    draft
}

#[allow(dead_code)]
pub fn fill_basic_info(wizard: &mut ListingWizard) {
    wizard
        .update(DraftUpdate::Title("Gibson Les Paul Standard".into()))
        .expect("session is live");
    wizard
        .update(DraftUpdate::Description(
            "2019, cherry sunburst, includes hard case.".into(),
        ))
        .expect("session is live");
    wizard
        .update(DraftUpdate::Category(Some(Category::MusicalInstruments)))
        .expect("session is live");
}

#[allow(dead_code)]
pub fn fill_images(wizard: &mut ListingWizard) {
    wizard
        .add_images(vec![
            ImageUpload::new("body.jpg", vec![1, 2, 3]),
            ImageUpload::new("neck.jpg", vec![4, 5]),
        ])
        .expect("session is live");
}

#[allow(dead_code)]
pub fn fill_pricing(wizard: &mut ListingWizard) {
    wizard
        .update(DraftUpdate::StartPrice(Some(1800.0)))
        .expect("session is live");
    wizard
        .update(DraftUpdate::ReservePrice(Some(2200.0)))
        .expect("session is live");
}

#[allow(dead_code)]
pub fn fill_details(wizard: &mut ListingWizard) {
    wizard
        .update(DraftUpdate::Condition(Some(Condition::Excellent)))
        .expect("session is live");
    let mut methods = BTreeSet::new();
    methods.insert(PaymentMethod::PayPal);
    methods.insert(PaymentMethod::BankTransfer);
    wizard
        .update(DraftUpdate::PaymentMethods(methods))
        .expect("session is live");
}

/// Calls `next()` and asserts the step actually moved.
#[allow(dead_code)]
pub fn advance(wizard: &mut ListingWizard) {
    assert_eq!(
        wizard.next().expect("session is live"),
        WizardEvent::Moved,
        "expected a valid step to advance"
    );
}

/// Walks a fresh session through all four gated steps to Preview.
#[allow(dead_code)]
pub fn wizard_at_preview() -> ListingWizard {
    let mut wizard = ListingWizard::new();
    fill_basic_info(&mut wizard);
    advance(&mut wizard);
    fill_images(&mut wizard);
    advance(&mut wizard);
    fill_pricing(&mut wizard);
    advance(&mut wizard);
    fill_details(&mut wizard);
    advance(&mut wizard);
    assert_eq!(wizard.step(), Step::Preview);
    wizard
}

/// Scripted stand-in for the submission backend. Every call records the draft
/// it received and pops the next scripted result.
#[allow(dead_code)]
pub struct StubGateway {
    script: Mutex<Vec<Result<ListingId, SubmissionError>>>,
    received: Mutex<Vec<ListingDraft>>,
}

impl StubGateway {
    #[allow(dead_code)]
    pub fn completing() -> Self {
        Self::with_script(vec![Ok(ListingId::new())])
    }

    #[allow(dead_code)]
    pub fn with_script(script: Vec<Result<ListingId, SubmissionError>>) -> Self {
        Self {
            script: Mutex::new(script),
            received: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.received.lock().expect("received lock").len()
    }

    #[allow(dead_code)]
    pub fn received(&self) -> Vec<ListingDraft> {
        self.received.lock().expect("received lock").clone()
    }
}

#[async_trait]
impl SubmissionGateway for StubGateway {
    async fn create_listing(&self, draft: &ListingDraft) -> Result<ListingId, SubmissionError> {
        self.received
            .lock()
            .expect("received lock")
            .push(draft.clone());
        let mut script = self.script.lock().expect("script lock");
        assert!(
            !script.is_empty(),
            "gateway called more times than scripted"
        );
        script.remove(0)
    }
}

/// Backend stand-in whose submission never resolves, for pinning down what a
/// session does while a submit is still in flight.
#[allow(dead_code)]
pub struct StalledGateway;

#[async_trait]
impl SubmissionGateway for StalledGateway {
    async fn create_listing(&self, _draft: &ListingDraft) -> Result<ListingId, SubmissionError> {
        std::future::pending().await
    }
}
