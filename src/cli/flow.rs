//! Interactive front end for the listing wizard. Each pass of the loop renders
//! the current step, collects its fields, and lets the session decide whether
//! the seller may move on.

use std::collections::BTreeSet;
use std::{env, fs, path::Path};

use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

use crate::cli::{io, output};
use crate::config::{ConfigError, SettingsManager};
use crate::gateway::InMemoryGateway;
use crate::listing::{
    Category, Condition, DurationDays, ImageUpload, PaymentMethod, MAX_LISTING_IMAGES,
};
use crate::wizard::{
    build_summary, summary_lines, DraftUpdate, ListingWizard, Step, SubmitOutcome, WizardError,
    WizardEvent,
};

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// Entry point for the `auction_core_cli` binary.
pub async fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V") => {
            println!("auction_core {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--categories") => {
            for category in Category::ALL {
                println!("{category}");
            }
            Ok(())
        }
        Some("--conditions") => {
            for condition in Condition::ALL {
                println!("{condition}");
            }
            Ok(())
        }
        Some(other) => Err(CliError::InvalidArguments(format!(
            "unknown argument `{other}`; try --help"
        ))),
        None => run_wizard().await,
    }
}

async fn run_wizard() -> Result<(), CliError> {
    let settings = SettingsManager::new().load()?;
    let gateway = InMemoryGateway::new(settings.seller.clone());
    let theme = ColorfulTheme::default();
    let mut wizard = ListingWizard::new();
    wizard.update(DraftUpdate::Duration(settings.default_duration))?;

    output::section("Create Listing");
    output::info("Each step checks its fields before the next one opens.");

    loop {
        let step = wizard.step();
        output::section(format!(
            "Step {} of {}: {}",
            step.number(),
            Step::ALL.len(),
            step.title()
        ));
        match step {
            Step::BasicInfo => collect_basic_info(&theme, &mut wizard)?,
            Step::Images => collect_images(&theme, &mut wizard)?,
            Step::Pricing => collect_pricing(&theme, &mut wizard)?,
            Step::Details => collect_details(&theme, &mut wizard)?,
            Step::Preview => {
                if review_and_submit(&theme, &mut wizard, &gateway, &settings.currency).await? {
                    return Ok(());
                }
                continue;
            }
        }
        if wizard.next()? == WizardEvent::Blocked {
            report_field_errors(&wizard);
        }
    }
}

fn collect_basic_info(theme: &ColorfulTheme, wizard: &mut ListingWizard) -> Result<(), CliError> {
    let title = io::prompt_text(theme, "Title", Some(wizard.draft().title.as_str()))?;
    wizard.update(DraftUpdate::Title(title))?;

    let description = io::prompt_text(
        theme,
        "Description",
        Some(wizard.draft().description.as_str()),
    )?;
    wizard.update(DraftUpdate::Description(description))?;

    let labels: Vec<&str> = Category::ALL.iter().map(|category| category.label()).collect();
    let default = wizard
        .draft()
        .category
        .and_then(|current| Category::ALL.iter().position(|category| *category == current));
    if let Some(index) = io::select_index(theme, "Category", &labels, default)? {
        wizard.update(DraftUpdate::Category(Some(Category::ALL[index])))?;
    }
    Ok(())
}

fn collect_images(theme: &ColorfulTheme, wizard: &mut ListingWizard) -> Result<(), CliError> {
    output::info(format!(
        "{} of {} photos attached.",
        wizard.draft().images.len(),
        MAX_LISTING_IMAGES
    ));

    let raw = io::prompt_text(theme, "Photo paths (comma separated, blank to skip)", None)?;
    let mut batch = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match fs::read(part) {
            Ok(bytes) => {
                let name = Path::new(part)
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(part);
                batch.push(ImageUpload::new(name, bytes));
            }
            Err(err) => output::warning(format!("Skipping {part}: {err}")),
        }
    }
    if !batch.is_empty() {
        let offered = batch.len();
        let accepted = wizard.add_images(batch)?;
        if accepted < offered {
            output::warning(format!(
                "Attached {accepted} of {offered}; the cap is {MAX_LISTING_IMAGES} photos."
            ));
        } else {
            let payload: usize = wizard.draft().images.iter().map(ImageUpload::size).sum();
            output::success(format!(
                "Attached {accepted} photo(s), {} KB total.",
                payload.div_ceil(1024)
            ));
        }
    }

    if !wizard.draft().images.is_empty()
        && io::confirm_action(theme, "Remove a photo?", false)?
    {
        let names: Vec<String> = wizard
            .draft()
            .images
            .iter()
            .map(|image| image.file_name.clone())
            .collect();
        if let Some(index) = io::select_index(theme, "Remove which photo?", &names, None)? {
            wizard.remove_image(index)?;
        }
    }
    Ok(())
}

fn collect_pricing(theme: &ColorfulTheme, wizard: &mut ListingWizard) -> Result<(), CliError> {
    let start = io::prompt_amount(theme, "Starting price", wizard.draft().start_price)?;
    wizard.update(DraftUpdate::StartPrice(start))?;

    let reserve = io::prompt_amount(
        theme,
        "Reserve price (blank for none)",
        wizard.draft().reserve_price,
    )?;
    wizard.update(DraftUpdate::ReservePrice(reserve))?;

    let shipping = io::prompt_amount(
        theme,
        "Shipping cost (blank for none)",
        wizard.draft().shipping_cost,
    )?;
    wizard.update(DraftUpdate::ShippingCost(shipping))?;
    Ok(())
}

fn collect_details(theme: &ColorfulTheme, wizard: &mut ListingWizard) -> Result<(), CliError> {
    let duration_labels: Vec<&str> = DurationDays::ALL
        .iter()
        .map(|duration| duration.label())
        .collect();
    let duration_default = DurationDays::ALL
        .iter()
        .position(|duration| *duration == wizard.draft().duration);
    if let Some(index) =
        io::select_index(theme, "Auction duration", &duration_labels, duration_default)?
    {
        wizard.update(DraftUpdate::Duration(DurationDays::ALL[index]))?;
    }

    let condition_labels: Vec<&str> = Condition::ALL
        .iter()
        .map(|condition| condition.label())
        .collect();
    let condition_default = wizard
        .draft()
        .condition
        .and_then(|current| Condition::ALL.iter().position(|condition| *condition == current));
    if let Some(index) =
        io::select_index(theme, "Condition", &condition_labels, condition_default)?
    {
        wizard.update(DraftUpdate::Condition(Some(Condition::ALL[index])))?;
    }

    let method_labels: Vec<&str> = PaymentMethod::ALL
        .iter()
        .map(|method| method.label())
        .collect();
    let checked: Vec<bool> = PaymentMethod::ALL
        .iter()
        .map(|method| wizard.draft().payment_methods.contains(method))
        .collect();
    let picked = io::multi_select_indices(theme, "Payment methods", &method_labels, &checked)?;
    let methods: BTreeSet<PaymentMethod> = picked
        .into_iter()
        .map(|index| PaymentMethod::ALL[index])
        .collect();
    wizard.update(DraftUpdate::PaymentMethods(methods))?;
    Ok(())
}

/// Shows the summary and handles the submit menu. Returns `true` once the
/// session is finished, either published or deliberately discarded.
async fn review_and_submit(
    theme: &ColorfulTheme,
    wizard: &mut ListingWizard,
    gateway: &InMemoryGateway,
    currency: &str,
) -> Result<bool, CliError> {
    output::separator();
    for line in summary_lines(&build_summary(wizard.draft(), currency)) {
        println!("{line}");
    }
    println!();

    let choices = ["Submit listing", "Edit a step", "Discard draft"];
    match io::select_index(theme, "Ready to publish?", &choices, Some(0))? {
        Some(0) => match wizard.submit(gateway).await? {
            SubmitOutcome::Completed(id) => {
                output::success(format!("Listing published with id {id}."));
                Ok(true)
            }
            SubmitOutcome::Failed(_) => {
                if let Some(message) = wizard.errors().submit() {
                    output::error(message);
                }
                output::info("The draft is unchanged; you can submit again.");
                Ok(false)
            }
        },
        Some(1) => {
            let titles: Vec<&str> = Step::ALL.iter().take(4).map(|step| step.title()).collect();
            if let Some(index) = io::select_index(theme, "Edit which step?", &titles, None)? {
                wizard.go_to_step(Step::ALL[index])?;
            }
            Ok(false)
        }
        Some(2) => {
            if io::confirm_action(theme, "Discard this draft?", false)? {
                output::info("Draft discarded.");
                return Ok(true);
            }
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn report_field_errors(wizard: &ListingWizard) {
    for message in wizard.errors().fields().values() {
        output::error(message);
    }
}

fn print_usage() {
    println!(
        "Usage: auction_core_cli [OPTION]\n\
         Options:\n  \
         --categories    list the marketplace categories\n  \
         --conditions    list the accepted item conditions\n  \
         -V, --version   print the version\n  \
         -h, --help      show this help\n\
         With no options the interactive listing wizard starts."
    );
}
