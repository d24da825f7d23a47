use std::collections::BTreeSet;

use crate::listing::catalog::{Category, Condition, DurationDays, PaymentMethod};
use crate::listing::image::{ImageUpload, MAX_LISTING_IMAGES};

pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Everything a seller fills in while composing a listing.
///
/// A draft starts empty (apart from the default duration) and is mutated
/// field by field until it is handed to the submission gateway. It carries no
/// identity of its own; ids and timestamps are assigned when the gateway
/// accepts it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub start_price: Option<f64>,
    pub reserve_price: Option<f64>,
    pub duration: DurationDays,
    pub images: Vec<ImageUpload>,
    pub condition: Option<Condition>,
    pub shipping_cost: Option<f64>,
    pub payment_methods: BTreeSet<PaymentMethod>,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends uploads in order until the image cap is reached; anything past
    /// the cap is dropped without complaint. Returns how many were accepted.
    pub fn add_images(&mut self, batch: Vec<ImageUpload>) -> usize {
        let remaining = MAX_LISTING_IMAGES.saturating_sub(self.images.len());
        let before = self.images.len();
        self.images.extend(batch.into_iter().take(remaining));
        self.images.len() - before
    }

    /// Removes the image at `index`, shifting later images down one position.
    /// Out-of-range indices leave the draft untouched.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageUpload> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// The first image in upload order, shown as the listing's main photo.
    pub fn primary_image(&self) -> Option<&ImageUpload> {
        self.images.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str) -> ImageUpload {
        ImageUpload::new(name, vec![0u8; 16])
    }

    #[test]
    fn new_draft_is_empty_except_duration() {
        let draft = ListingDraft::new();
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.category, None);
        assert_eq!(draft.start_price, None);
        assert_eq!(draft.duration, DurationDays::Seven);
        assert!(draft.images.is_empty());
        assert!(draft.payment_methods.is_empty());
    }

    #[test]
    fn add_images_truncates_at_the_cap() {
        let mut draft = ListingDraft::new();
        let first: Vec<_> = (0..5).map(|i| upload(&format!("a{i}.jpg"))).collect();
        assert_eq!(draft.add_images(first), 5);

        let second: Vec<_> = (0..6).map(|i| upload(&format!("b{i}.jpg"))).collect();
        assert_eq!(draft.add_images(second), 3);
        assert_eq!(draft.images.len(), MAX_LISTING_IMAGES);

        // First batch intact, then the first three of the second batch.
        let names: Vec<_> = draft.images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["a0.jpg", "a1.jpg", "a2.jpg", "a3.jpg", "a4.jpg", "b0.jpg", "b1.jpg", "b2.jpg"]
        );
    }

    #[test]
    fn add_images_at_capacity_accepts_nothing() {
        let mut draft = ListingDraft::new();
        draft.add_images((0..8).map(|i| upload(&format!("{i}.jpg"))).collect());
        assert_eq!(draft.add_images(vec![upload("extra.jpg")]), 0);
        assert_eq!(draft.images.len(), MAX_LISTING_IMAGES);
    }

    #[test]
    fn remove_image_shifts_positions() {
        let mut draft = ListingDraft::new();
        draft.add_images(vec![upload("one.jpg"), upload("two.jpg"), upload("three.jpg")]);

        let removed = draft.remove_image(1);
        assert_eq!(removed.map(|i| i.file_name), Some("two.jpg".to_string()));

        let names: Vec<_> = draft.images.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, ["one.jpg", "three.jpg"]);
    }

    #[test]
    fn remove_image_out_of_range_is_a_no_op() {
        let mut draft = ListingDraft::new();
        draft.add_images(vec![upload("only.jpg")]);
        assert!(draft.remove_image(5).is_none());
        assert_eq!(draft.images.len(), 1);
    }

    #[test]
    fn primary_image_is_always_the_first() {
        let mut draft = ListingDraft::new();
        assert!(draft.primary_image().is_none());

        draft.add_images(vec![upload("main.jpg"), upload("side.jpg")]);
        assert_eq!(
            draft.primary_image().map(|i| i.file_name.as_str()),
            Some("main.jpg")
        );

        // Removing the head promotes the next image.
        draft.remove_image(0);
        assert_eq!(
            draft.primary_image().map(|i| i.file_name.as_str()),
            Some("side.jpg")
        );
    }
}
