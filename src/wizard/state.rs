use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::listing::{
    Category, Condition, DurationDays, ImageUpload, ListingDraft, PaymentMethod,
};
use crate::wizard::steps::Step;

/// Names every draft field an error message can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Category,
    Images,
    StartPrice,
    ReservePrice,
    Duration,
    Condition,
    ShippingCost,
    PaymentMethods,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Category => "Category",
            Field::Images => "Images",
            Field::StartPrice => "Starting Price",
            Field::ReservePrice => "Reserve Price",
            Field::Duration => "Auction Duration",
            Field::Condition => "Condition",
            Field::ShippingCost => "Shipping Cost",
            Field::PaymentMethods => "Payment Methods",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single field assignment applied to the draft. Assigning the same value
/// twice leaves the state identical to assigning it once.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    Title(String),
    Description(String),
    Category(Option<Category>),
    StartPrice(Option<f64>),
    ReservePrice(Option<f64>),
    Duration(DurationDays),
    Condition(Option<Condition>),
    ShippingCost(Option<f64>),
    PaymentMethods(BTreeSet<PaymentMethod>),
}

impl DraftUpdate {
    /// The field this update writes to.
    pub fn field(&self) -> Field {
        match self {
            DraftUpdate::Title(_) => Field::Title,
            DraftUpdate::Description(_) => Field::Description,
            DraftUpdate::Category(_) => Field::Category,
            DraftUpdate::StartPrice(_) => Field::StartPrice,
            DraftUpdate::ReservePrice(_) => Field::ReservePrice,
            DraftUpdate::Duration(_) => Field::Duration,
            DraftUpdate::Condition(_) => Field::Condition,
            DraftUpdate::ShippingCost(_) => Field::ShippingCost,
            DraftUpdate::PaymentMethods(_) => Field::PaymentMethods,
        }
    }
}

/// Field-level and submission errors for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardErrors {
    fields: BTreeMap<Field, String>,
    submit: Option<String>,
}

impl WizardErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.submit.is_none()
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<Field, String> {
        &self.fields
    }

    /// The distinguished submission failure slot, set when the gateway says no.
    pub fn submit(&self) -> Option<&str> {
        self.submit.as_deref()
    }

    pub(crate) fn clear(&mut self) {
        self.fields.clear();
        self.submit = None;
    }

    pub(crate) fn clear_field(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    /// Replaces the whole error set with a fresh validation result.
    pub(crate) fn set_validation(&mut self, result: BTreeMap<Field, String>) {
        self.fields = result;
        self.submit = None;
    }

    pub(crate) fn set_submit(&mut self, message: String) {
        self.submit = Some(message);
    }
}

/// Single source of truth for wizard progress: the current step, the draft
/// under construction, and whatever errors the last transition produced.
#[derive(Debug, Clone)]
pub struct WizardState {
    step: Step,
    draft: ListingDraft,
    errors: WizardErrors,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::BasicInfo,
            draft: ListingDraft::new(),
            errors: WizardErrors::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &WizardErrors {
        &self.errors
    }

    /// Writes one field and clears any stale error recorded against it.
    pub(crate) fn apply(&mut self, update: DraftUpdate) {
        let field = update.field();
        match update {
            DraftUpdate::Title(value) => self.draft.title = value,
            DraftUpdate::Description(value) => self.draft.description = value,
            DraftUpdate::Category(value) => self.draft.category = value,
            DraftUpdate::StartPrice(value) => self.draft.start_price = value,
            DraftUpdate::ReservePrice(value) => self.draft.reserve_price = value,
            DraftUpdate::Duration(value) => self.draft.duration = value,
            DraftUpdate::Condition(value) => self.draft.condition = value,
            DraftUpdate::ShippingCost(value) => self.draft.shipping_cost = value,
            DraftUpdate::PaymentMethods(value) => self.draft.payment_methods = value,
        }
        self.errors.clear_field(field);
    }

    pub(crate) fn add_images(&mut self, batch: Vec<ImageUpload>) -> usize {
        let accepted = self.draft.add_images(batch);
        if accepted > 0 {
            self.errors.clear_field(Field::Images);
        }
        accepted
    }

    pub(crate) fn remove_image(&mut self, index: usize) -> Option<ImageUpload> {
        let removed = self.draft.remove_image(index);
        if removed.is_some() {
            self.errors.clear_field(Field::Images);
        }
        removed
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub(crate) fn errors_mut(&mut self) -> &mut WizardErrors {
        &mut self.errors
    }

    /// Back to a pristine session: first step, empty draft, no errors.
    pub fn reset(&mut self) {
        *self = WizardState::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
