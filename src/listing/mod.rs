//! Listing domain models: catalog enums, the in-progress draft, and the
//! published record.

pub mod catalog;
pub mod draft;
pub mod image;
pub mod record;

pub use catalog::{Category, Condition, DurationDays, PaymentMethod};
pub use draft::{ListingDraft, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
pub use image::{ImageUpload, MAX_LISTING_IMAGES};
pub use record::{Listing, ListingId, ListingStatus};
