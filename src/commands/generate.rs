//! # Generate Command
//!
//! Generates a batch of redemption codes and prints them one per line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    code::{self, Batch},
    config::{Config, Overrides},
};

/// Arguments for the generate command
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateArgs {
    pub max_scope: Option<u64>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

/// Executes the generate command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let batch = run(args)?;

    if args.verbose {
        eprintln!("{} {}", "layout:".dimmed(), batch.layout);
        eprintln!("{} {}", "timestamp:".dimmed(), batch.timestamp);
    }

    // Output one code per line (for scripting)
    for code in batch.encoded() {
        println!("{code}");
    }

    Ok(())
}

/// Resolves configuration and generates a batch without printing it.
pub fn run(args: GenerateArgs) -> Result<Batch> {
    let config = Config::load()?;
    let generation = config.generation(Overrides {
        max_scope: args.max_scope,
        batch_count: args.count,
    })?;

    match args.seed {
        Some(seed) => code::generate_now(&generation, &mut StdRng::seed_from_u64(seed)),
        None => code::generate_now(&generation, &mut rand::rng()),
    }
    .context("Failed to generate codes")
}
