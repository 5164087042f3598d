//! # Decode Command
//!
//! Decodes redemption codes back into their composite values.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use chrono::DateTime;

use crate::{
    code::{base32, pack},
    constants::MAX_TOTAL_BITS,
};

/// Arguments for the decode command
#[derive(Debug, Clone, Default)]
pub struct DecodeArgs {
    pub codes: Vec<String>,
    /// Width of the random suffix; when set, the timestamp is split out
    pub random_bits: Option<u32>,
}

/// A decoded code, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub code: String,
    pub value: u128,
    /// `(timestamp, suffix)` when the suffix width is known
    pub parts: Option<(u128, u128)>,
}

impl Decoded {
    /// Formats the decoded value as a single output line.
    pub fn line(&self) -> String {
        match self.parts {
            Some((timestamp, suffix)) => {
                let issued = i64::try_from(timestamp)
                    .ok()
                    .and_then(|secs| DateTime::from_timestamp(secs, 0))
                    .map_or_else(|| "-".to_string(), |dt| dt.to_rfc3339());
                format!(
                    "{}\t{}\ttimestamp={timestamp} ({issued})\tsuffix={suffix}",
                    self.code, self.value
                )
            }
            None => format!("{}\t{}", self.code, self.value),
        }
    }
}

/// Executes the decode command.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    for decoded in run(args)? {
        println!("{}", decoded.line());
    }
    Ok(())
}

/// Decodes every code, stopping at the first invalid one.
pub fn run(args: &DecodeArgs) -> Result<Vec<Decoded>> {
    if let Some(bits) = args.random_bits {
        if bits >= MAX_TOTAL_BITS {
            anyhow::bail!("--random-bits must be below {MAX_TOTAL_BITS}");
        }
    }

    args.codes
        .iter()
        .map(|raw| {
            let code = normalize(raw);
            let value =
                base32::decode(&code).with_context(|| format!("Failed to decode '{raw}'"))?;
            let parts = args.random_bits.map(|bits| pack::unpack(value, bits));
            Ok(Decoded { code, value, parts })
        })
        .collect()
}

/// Trims whitespace and upper-cases ASCII letters, as typed codes often differ in case.
fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
