use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::listing::{Listing, ListingDraft, ListingId, ListingStatus};
use crate::wizard::steps::STEP_TABLE;

use super::{SubmissionError, SubmissionGateway};

/// Gateway that publishes listings into process memory.
///
/// The marketplace backend re-checks every draft on its own, so this gateway
/// runs the full step validation again and rejects anything incomplete even
/// if a caller bypassed the wizard. Accepted drafts become [`Listing`]
/// records attributed to the configured seller.
pub struct InMemoryGateway {
    seller: String,
    listings: Mutex<Vec<Listing>>,
    fail_next: Mutex<Option<SubmissionError>>,
}

impl InMemoryGateway {
    pub fn new(seller: impl Into<String>) -> Self {
        Self {
            seller: seller.into(),
            listings: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Queues one failure; the next `create_listing` call returns it instead
    /// of publishing, and calls after that behave normally again.
    pub fn fail_next(&self, error: SubmissionError) {
        *self.fail_next.lock().expect("failure queue poisoned") = Some(error);
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.listings.lock().expect("listing store poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.listings.lock().expect("listing store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: ListingId) -> Option<Listing> {
        self.listings
            .lock()
            .expect("listing store poisoned")
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
    }

    fn validation_failures(draft: &ListingDraft) -> Vec<String> {
        STEP_TABLE
            .iter()
            .flat_map(|definition| (definition.validate)(draft).into_values())
            .collect()
    }
}

#[async_trait]
impl SubmissionGateway for InMemoryGateway {
    async fn create_listing(&self, draft: &ListingDraft) -> Result<ListingId, SubmissionError> {
        if let Some(error) = self.fail_next.lock().expect("failure queue poisoned").take() {
            return Err(error);
        }

        let failures = Self::validation_failures(draft);
        if !failures.is_empty() {
            return Err(SubmissionError::Rejected {
                reason: failures.join("; "),
            });
        }
        let (Some(category), Some(condition), Some(start_price)) =
            (draft.category, draft.condition, draft.start_price)
        else {
            return Err(SubmissionError::Rejected {
                reason: "listing draft is incomplete".into(),
            });
        };

        let created_at = Utc::now();
        let listing = Listing {
            id: ListingId::new(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            seller: self.seller.clone(),
            category,
            condition,
            start_price,
            reserve_price: draft.reserve_price,
            current_bid: start_price,
            shipping_cost: draft.shipping_cost,
            payment_methods: draft.payment_methods.clone(),
            image_names: draft
                .images
                .iter()
                .map(|image| image.file_name.clone())
                .collect(),
            status: ListingStatus::Active,
            created_at,
            end_time: created_at + Duration::days(i64::from(draft.duration.days())),
            bid_count: 0,
            watchers: 0,
        };
        let id = listing.id;
        self.listings
            .lock()
            .expect("listing store poisoned")
            .push(listing);
        tracing::debug!(listing_id = %id, seller = %self.seller, "Listing stored in memory.");
        Ok(id)
    }
}
