use std::collections::BTreeMap;
use std::fmt;

use crate::listing::ListingDraft;
use crate::wizard::state::Field;
use crate::wizard::validate;

/// The five stages of the listing wizard, in walk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    BasicInfo,
    Images,
    Pricing,
    Details,
    Preview,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::BasicInfo,
        Step::Images,
        Step::Pricing,
        Step::Details,
        Step::Preview,
    ];

    /// One-based position shown to the user ("Step 3 of 5").
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::Images => "Images",
            Step::Pricing => "Pricing",
            Step::Details => "Details",
            Step::Preview => "Preview",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        match self.number() {
            0 | 1 => None,
            n => Step::from_number(n - 1),
        }
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Step::Preview)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Declarative description of one wizard step: which fields it collects and
/// the pure check that gates leaving it.
pub struct StepDefinition {
    pub step: Step,
    pub required: &'static [Field],
    pub validate: fn(&ListingDraft) -> BTreeMap<Field, String>,
}

// Order must match `Step` declaration order; `definition` indexes by it.
pub static STEP_TABLE: [StepDefinition; 5] = [
    StepDefinition {
        step: Step::BasicInfo,
        required: &[Field::Title, Field::Description, Field::Category],
        validate: validate::basic_info,
    },
    StepDefinition {
        step: Step::Images,
        required: &[Field::Images],
        validate: validate::images,
    },
    StepDefinition {
        step: Step::Pricing,
        required: &[Field::StartPrice],
        validate: validate::pricing,
    },
    StepDefinition {
        step: Step::Details,
        required: &[Field::Condition],
        validate: validate::details,
    },
    StepDefinition {
        step: Step::Preview,
        required: &[],
        validate: validate::preview,
    },
];

pub fn definition(step: Step) -> &'static StepDefinition {
    &STEP_TABLE[step.index()]
}
