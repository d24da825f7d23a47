//! Pure per-step validators. Each inspects the draft and reports the fields
//! that block leaving its step; an empty map means the step is satisfied.

use std::collections::BTreeMap;

use crate::listing::{ListingDraft, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::wizard::state::Field;

pub(crate) fn basic_info(draft: &ListingDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();
    if draft.title.trim().is_empty() {
        errors.insert(Field::Title, "Title is required".to_string());
    } else if draft.title.len() > TITLE_MAX_LEN {
        errors.insert(
            Field::Title,
            format!("Title cannot exceed {} characters", TITLE_MAX_LEN),
        );
    }
    if draft.description.trim().is_empty() {
        errors.insert(Field::Description, "Description is required".to_string());
    } else if draft.description.len() > DESCRIPTION_MAX_LEN {
        errors.insert(
            Field::Description,
            format!("Description cannot exceed {} characters", DESCRIPTION_MAX_LEN),
        );
    }
    if draft.category.is_none() {
        errors.insert(Field::Category, "Category is required".to_string());
    }
    errors
}

pub(crate) fn images(draft: &ListingDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();
    if draft.images.is_empty() {
        errors.insert(Field::Images, "At least one image is required".to_string());
    }
    errors
}

pub(crate) fn pricing(draft: &ListingDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();
    match draft.start_price {
        None => {
            errors.insert(Field::StartPrice, "Starting price is required".to_string());
        }
        Some(price) if price <= 0.0 => {
            errors.insert(
                Field::StartPrice,
                "Starting price must be greater than 0".to_string(),
            );
        }
        Some(_) => {}
    }
    if let Some(reserve) = draft.reserve_price {
        if reserve < 0.0 {
            errors.insert(
                Field::ReservePrice,
                "Reserve price must be zero or positive".to_string(),
            );
        }
    }
    if let Some(shipping) = draft.shipping_cost {
        if shipping < 0.0 {
            errors.insert(
                Field::ShippingCost,
                "Shipping cost must be zero or positive".to_string(),
            );
        }
    }
    errors
}

pub(crate) fn details(draft: &ListingDraft) -> BTreeMap<Field, String> {
    let mut errors = BTreeMap::new();
    if draft.condition.is_none() {
        errors.insert(Field::Condition, "Condition is required".to_string());
    }
    errors
}

pub(crate) fn preview(_draft: &ListingDraft) -> BTreeMap<Field, String> {
    BTreeMap::new()
}
