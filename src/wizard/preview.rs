//! Read-only rendering of a draft for the Preview step. Building a summary
//! never touches the session, so it is safe to show at any step.

use crate::listing::{ListingDraft, MAX_LISTING_IMAGES};
use crate::wizard::state::Field;

const UNFILLED: &str = "[unfilled]";

/// Label/value pairs describing a draft, in the order the Preview step
/// presents them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub entries: Vec<(String, String)>,
}

/// Renders every draft field as a label/value pair. Amounts carry the symbol
/// for `currency`, an ISO 4217 code from the seller's settings.
pub fn build_summary(draft: &ListingDraft, currency: &str) -> ListingSummary {
    let symbol = currency_symbol(currency);
    let mut summary = ListingSummary::default();
    push(&mut summary, Field::Title, text(&draft.title));
    push(
        &mut summary,
        Field::Category,
        draft.category.map(|category| category.label().to_string()),
    );
    push(&mut summary, Field::Description, text(&draft.description));
    push(
        &mut summary,
        Field::StartPrice,
        draft.start_price.map(|value| price(value, symbol)),
    );
    push(
        &mut summary,
        Field::ReservePrice,
        draft.reserve_price.map(|value| price(value, symbol)),
    );
    push(
        &mut summary,
        Field::Duration,
        Some(draft.duration.label().to_string()),
    );
    push(
        &mut summary,
        Field::Condition,
        draft.condition.map(|condition| condition.label().to_string()),
    );
    push(
        &mut summary,
        Field::ShippingCost,
        draft.shipping_cost.map(|value| price(value, symbol)),
    );
    push(&mut summary, Field::PaymentMethods, payment_methods(draft));
    push(
        &mut summary,
        Field::Images,
        Some(format!(
            "{} of {} photos",
            draft.images.len(),
            MAX_LISTING_IMAGES
        )),
    );
    summary
}

pub fn summary_lines(summary: &ListingSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Review your listing:".into());
    for (label, value) in &summary.entries {
        lines.push(format!("  {}: {}", label, value));
    }
    lines
}

fn push(summary: &mut ListingSummary, field: Field, value: Option<String>) {
    let value = value.unwrap_or_else(|| UNFILLED.to_string());
    summary.entries.push((field.label().to_string(), value));
}

fn text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn price(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", format_amount(value))
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => code,
    }
}

fn payment_methods(draft: &ListingDraft) -> Option<String> {
    if draft.payment_methods.is_empty() {
        None
    } else {
        let labels: Vec<&str> = draft
            .payment_methods
            .iter()
            .map(|method| method.label())
            .collect();
        Some(labels.join(", "))
    }
}

pub(crate) fn format_amount(value: f64) -> String {
    if (value.fract()).abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{Category, Condition, DurationDays, ImageUpload, PaymentMethod};

    fn complete_draft() -> ListingDraft {
        let mut draft = ListingDraft::new();
        draft.title = "Vintage Omega Seamaster".into();
        draft.description = "1960s automatic, recently serviced.".into();
        draft.category = Some(Category::WatchesJewelry);
        draft.images.push(ImageUpload::new("front.jpg", vec![1]));
        draft.images.push(ImageUpload::new("back.jpg", vec![2]));
        draft.start_price = Some(450.0);
        draft.reserve_price = Some(600.5);
        draft.duration = DurationDays::Ten;
        draft.condition = Some(Condition::Good);
        draft.shipping_cost = Some(25.0);
        draft.payment_methods.insert(PaymentMethod::PayPal);
        draft.payment_methods.insert(PaymentMethod::CreditCard);
        draft
    }

    #[test]
    fn renders_a_complete_draft() {
        let summary = build_summary(&complete_draft(), "USD");
        insta::assert_snapshot!(summary_lines(&summary).join("\n"), @r###"
        Review your listing:
          Title: Vintage Omega Seamaster
          Category: Watches & Jewelry
          Description: 1960s automatic, recently serviced.
          Starting Price: $450
          Reserve Price: $600.50
          Auction Duration: 10 Days
          Condition: Good
          Shipping Cost: $25
          Payment Methods: PayPal, Credit Card
          Images: 2 of 8 photos
        "###);
    }

    #[test]
    fn renders_placeholders_for_an_empty_draft() {
        let summary = build_summary(&ListingDraft::new(), "USD");
        insta::assert_snapshot!(summary_lines(&summary).join("\n"), @r###"
        Review your listing:
          Title: [unfilled]
          Category: [unfilled]
          Description: [unfilled]
          Starting Price: [unfilled]
          Reserve Price: [unfilled]
          Auction Duration: 7 Days
          Condition: [unfilled]
          Shipping Cost: [unfilled]
          Payment Methods: [unfilled]
          Images: 0 of 8 photos
        "###);
    }

    #[test]
    fn amounts_drop_cents_only_when_whole() {
        assert_eq!(format_amount(450.0), "450");
        assert_eq!(format_amount(600.5), "600.50");
        assert_eq!(format_amount(0.99), "0.99");
    }

    #[test]
    fn amounts_render_in_the_configured_currency() {
        let mut draft = ListingDraft::new();
        draft.start_price = Some(450.0);

        let summary = build_summary(&draft, "EUR");
        let start_price = ("Starting Price".to_string(), "€450".to_string());
        assert!(summary.entries.contains(&start_price));

        // Codes without a symbol render as-is.
        let summary = build_summary(&draft, "SEK");
        let start_price = ("Starting Price".to_string(), "SEK450".to_string());
        assert!(summary.entries.contains(&start_price));
    }
}
