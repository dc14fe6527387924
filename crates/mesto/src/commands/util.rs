//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::sync::Arc;

use mesto_core::{Card, CardId, Controller};

use crate::error::CliError;

/// Look a card up in the loaded feed.
pub fn resolve_card(controller: &Controller, identifier: &str) -> Result<Arc<Card>, CliError> {
    let id: CardId = identifier.into();
    controller
        .snapshot()
        .card(&id)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "card".into(),
            identifier: identifier.into(),
            list_command: "cards list".into(),
        })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
/// Without a terminal to ask on, `--yes` is required.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Prompt for a text value, pre-filled with `current`.
pub fn prompt_text(label: &str, current: &str) -> Result<String, CliError> {
    let value: String = dialoguer::Input::new()
        .with_prompt(label)
        .with_initial_text(current)
        .interact_text()?;
    Ok(value)
}
