//! # Layout Command
//!
//! Shows the bit layout a batch would use, without generating codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{
    code::{self, BitLayout},
    config::Config,
};

/// Arguments for the layout command
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutArgs {
    pub max_scope: Option<u64>,
    /// Timestamp to size for (defaults to now)
    pub timestamp: Option<u64>,
}

/// Executes the layout command.
pub fn execute(args: LayoutArgs) -> Result<()> {
    let (timestamp, max_scope, layout) = run(args)?;

    println!("{:<16}{}", "timestamp:".dimmed(), timestamp);
    println!("{:<16}{}", "max_scope:".dimmed(), max_scope);
    println!("{:<16}{}", "timestamp_bits:".dimmed(), layout.timestamp_bits);
    println!("{:<16}{}", "random_bits:".dimmed(), layout.random_bits);
    println!("{:<16}{}", "total_bits:".dimmed(), layout.total_bits);
    println!("{:<16}{}", "code_length:".dimmed(), layout.code_len());
    println!("{:<16}{}", "domain_size:".dimmed(), layout.domain_size());

    Ok(())
}

/// Resolves the timestamp and scope, then computes the layout.
pub fn run(args: LayoutArgs) -> Result<(u64, u64, BitLayout)> {
    let max_scope = match args.max_scope {
        Some(scope) => scope,
        None => Config::load()?.max_scope(),
    };
    let timestamp = match args.timestamp {
        Some(ts) => ts,
        None => code::current_timestamp()?,
    };
    let layout = BitLayout::compute(timestamp, max_scope)?;
    Ok((timestamp, max_scope, layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_explicit_inputs() {
        let (timestamp, max_scope, layout) = run(LayoutArgs {
            max_scope: Some(4),
            timestamp: Some(5),
        })
        .unwrap();
        assert_eq!((timestamp, max_scope), (5, 4));
        assert_eq!(layout.total_bits, 5);
        assert_eq!(layout.random_bits, 2);
    }

    #[test]
    fn test_zero_scope_fails() {
        assert!(run(LayoutArgs {
            max_scope: Some(0),
            timestamp: Some(5),
        })
        .is_err());
    }
}
