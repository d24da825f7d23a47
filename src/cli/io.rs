use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::cli::flow::CliError;
use crate::cli::output;
use crate::wizard::preview::format_amount;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt for free-form text, pre-filling the current value for editing.
/// An empty reply is returned as-is so step validation can speak to it.
pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: Option<&str>,
) -> Result<String, CliError> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(text) = initial {
        if !text.is_empty() {
            input = input.with_initial_text(text);
        }
    }
    input.interact_text().map_err(CliError::from)
}

/// Prompt for an optional money amount. Blank clears the value; anything
/// unparsable re-prompts.
pub fn prompt_amount(
    theme: &ColorfulTheme,
    prompt: &str,
    current: Option<f64>,
) -> Result<Option<f64>, CliError> {
    loop {
        let initial = current.map(format_amount);
        let raw = prompt_text(theme, prompt, initial.as_deref())?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => output::warning("Enter a number, or leave blank to skip."),
        }
    }
}

/// Single-choice selection; Esc keeps whatever is already set.
pub fn select_index<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    default: Option<usize>,
) -> Result<Option<usize>, CliError> {
    let mut select = Select::with_theme(theme).with_prompt(prompt).items(items);
    if let Some(index) = default {
        select = select.default(index);
    }
    select.interact_opt().map_err(CliError::from)
}

/// Multi-choice selection with the current picks checked.
pub fn multi_select_indices<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    checked: &[bool],
) -> Result<Vec<usize>, CliError> {
    let defaults: Vec<bool> = (0..items.len())
        .map(|index| checked.get(index).copied().unwrap_or(false))
        .collect();
    MultiSelect::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .defaults(&defaults)
        .interact()
        .map_err(CliError::from)
}
