//! The boundary between the wizard and whatever service persists finished
//! listings. The wizard only ever talks to [`SubmissionGateway`]; swapping the
//! in-memory backend for a remote one is a caller concern.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::listing::{ListingDraft, ListingId};

pub use memory::InMemoryGateway;

/// Why a submission did not produce a listing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Listing rejected: {reason}")]
    Rejected { reason: String },
    #[error("Submission service timed out")]
    Timeout,
    #[error("Submission service unavailable: {0}")]
    Unavailable(String),
}

/// External collaborator that turns a finished draft into a published listing.
///
/// Called exactly once per submit attempt; retries only happen when the
/// caller explicitly submits again.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn create_listing(&self, draft: &ListingDraft) -> Result<ListingId, SubmissionError>;
}
