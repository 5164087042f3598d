//! # Setup Command
//!
//! Creates the global config, or validates and normalizes an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, ui};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    eprintln!("{}\n", "Setting up redeemcode...".bold());

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success("Created global config", &path);
        return Ok(());
    }

    let validation = GlobalConfig::update_if_needed()?;
    if validation.has_changes() {
        let mut notes = Vec::new();
        notes.extend(
            validation
                .missing
                .iter()
                .map(|field| format!("added missing field '{field}'")),
        );
        notes.extend(
            validation
                .invalid
                .iter()
                .map(|field| format!("removed unknown field '{field}'")),
        );
        notes.extend(
            validation
                .migrated
                .iter()
                .map(|(old, new)| format!("renamed '{old}' to '{new}'")),
        );
        ui::print_warnings(&notes);
        ui::print_success("Updated global config", &path);
    } else {
        ui::print_success("Global config already up to date", &path);
    }

    Ok(())
}
