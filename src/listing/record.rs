use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::catalog::{Category, Condition, PaymentMethod};

/// Identifier assigned by the submission gateway when a listing is accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(Uuid);

impl ListingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ListingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of a published listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Ended,
    Upcoming,
}

/// A published auction listing as the marketplace stores it.
///
/// Produced by a gateway from an accepted draft; the draft's image blobs are
/// not carried over, only their names. A fresh listing opens with the current
/// bid equal to the start price and no bids or watchers yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub seller: String,
    pub category: Category,
    pub condition: Condition,
    pub start_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_price: Option<f64>,
    pub current_bid: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    pub payment_methods: BTreeSet<PaymentMethod>,
    pub image_names: Vec<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub bid_count: u32,
    pub watchers: u32,
}

impl Listing {
    /// Whether bids are still being accepted at `now`.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        self.status == ListingStatus::Active && self.end_time > now
    }
}
