use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of marketplace categories a listing can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Electronics,
    ArtCollectibles,
    WatchesJewelry,
    MusicalInstruments,
    Automotive,
    Fashion,
    HomeGarden,
    SportsRecreation,
    BooksMedia,
    Antiques,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::ArtCollectibles,
        Category::WatchesJewelry,
        Category::MusicalInstruments,
        Category::Automotive,
        Category::Fashion,
        Category::HomeGarden,
        Category::SportsRecreation,
        Category::BooksMedia,
        Category::Antiques,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::ArtCollectibles => "Art & Collectibles",
            Category::WatchesJewelry => "Watches & Jewelry",
            Category::MusicalInstruments => "Musical Instruments",
            Category::Automotive => "Automotive",
            Category::Fashion => "Fashion",
            Category::HomeGarden => "Home & Garden",
            Category::SportsRecreation => "Sports & Recreation",
            Category::BooksMedia => "Books & Media",
            Category::Antiques => "Antiques",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Closed set of item conditions, best first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Condition {
    New,
    LikeNew,
    Excellent,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Excellent,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }

    pub fn from_label(label: &str) -> Option<Condition> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.label() == label)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Allowed auction running times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationDays {
    One,
    Three,
    Five,
    Seven,
    Ten,
    Fourteen,
}

impl DurationDays {
    pub const ALL: [DurationDays; 6] = [
        DurationDays::One,
        DurationDays::Three,
        DurationDays::Five,
        DurationDays::Seven,
        DurationDays::Ten,
        DurationDays::Fourteen,
    ];

    /// Whole days the auction stays open.
    pub fn days(&self) -> u32 {
        match self {
            DurationDays::One => 1,
            DurationDays::Three => 3,
            DurationDays::Five => 5,
            DurationDays::Seven => 7,
            DurationDays::Ten => 10,
            DurationDays::Fourteen => 14,
        }
    }

    pub fn from_days(days: u32) -> Option<DurationDays> {
        DurationDays::ALL
            .into_iter()
            .find(|duration| duration.days() == days)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationDays::One => "1 Day",
            DurationDays::Three => "3 Days",
            DurationDays::Five => "5 Days",
            DurationDays::Seven => "7 Days",
            DurationDays::Ten => "10 Days",
            DurationDays::Fourteen => "14 Days",
        }
    }

    pub fn from_label(label: &str) -> Option<DurationDays> {
        DurationDays::ALL
            .into_iter()
            .find(|duration| duration.label() == label)
    }
}

impl Default for DurationDays {
    fn default() -> Self {
        DurationDays::Seven
    }
}

impl fmt::Display for DurationDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payment options a seller can accept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaymentMethod {
    PayPal,
    CreditCard,
    BankTransfer,
    CashOnPickup,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::PayPal,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::CashOnPickup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::CashOnPickup => "Cash on Pickup",
        }
    }

    pub fn from_label(label: &str) -> Option<PaymentMethod> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.label() == label)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
