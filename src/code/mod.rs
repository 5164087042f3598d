//! # Code Generation
//!
//! Generates batches of distinct redemption codes.
//!
//! Each code is a composite of the current UNIX timestamp (high bits) and a
//! random suffix (low bits), rendered in base32 with 5 bits per character:
//!
//! 1. [`BitLayout::compute`] sizes the timestamp and suffix fields
//! 2. [`sampler::sample`] draws distinct suffixes from the suffix domain
//! 3. [`pack::pack`] combines the timestamp with each suffix
//! 4. [`base32::encode`] renders each composite as a fixed-width string
//!
//! Codes are unique within a batch. Nothing is remembered between batches.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;
pub mod layout;
pub mod pack;
pub mod sampler;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, trace};

pub use self::layout::BitLayout;
use crate::error::{CodeError, Result};

/// Parameters for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    max_scope: u64,
    batch_count: usize,
}

impl GenerationConfig {
    /// Validates and creates a generation config.
    ///
    /// # Arguments
    /// * `max_scope` - Minimum number of distinct suffixes before rounding
    /// * `batch_count` - Number of codes per batch
    pub fn new(max_scope: u64, batch_count: usize) -> Result<Self> {
        if max_scope == 0 {
            return Err(CodeError::Config("max_scope must be greater than 0".into()));
        }
        if batch_count == 0 {
            return Err(CodeError::Config("batch_count must be greater than 0".into()));
        }
        Ok(Self {
            max_scope,
            batch_count,
        })
    }

    pub const fn max_scope(&self) -> u64 {
        self.max_scope
    }

    pub const fn batch_count(&self) -> usize {
        self.batch_count
    }
}

/// A single generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionCode {
    /// Packed timestamp and suffix
    pub value: u128,
    /// Random suffix (low bits of `value`)
    pub suffix: u128,
    /// Rendered code
    pub encoded: String,
}

/// The result of one generation run.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Timestamp shared by every code in the batch
    pub timestamp: u64,
    /// Bit layout shared by every code in the batch
    pub layout: BitLayout,
    /// Generated codes, in sampling order
    pub codes: Vec<RedemptionCode>,
}

impl Batch {
    /// Iterates over the rendered codes.
    pub fn encoded(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(|code| code.encoded.as_str())
    }
}

/// Generates a batch for the given timestamp using `rng` for the suffixes.
///
/// Either every code is produced or an error is returned.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerationConfig,
    timestamp: u64,
    rng: &mut R,
) -> Result<Batch> {
    let layout = BitLayout::compute(timestamp, config.max_scope)?;
    debug!(
        timestamp,
        timestamp_bits = layout.timestamp_bits,
        random_bits = layout.random_bits,
        total_bits = layout.total_bits,
        "computed bit layout"
    );

    let suffixes = sampler::sample(rng, layout.random_bits, config.batch_count)?;

    let codes = suffixes
        .into_iter()
        .map(|suffix| {
            let value = pack::pack(timestamp, layout.random_bits, suffix);
            let encoded = base32::encode(value, layout.total_bits);
            trace!(
                suffix = %format!("{suffix:#b}"),
                value = %format!("{value:#b}"),
                %encoded,
                "packed code"
            );
            RedemptionCode {
                value,
                suffix,
                encoded,
            }
        })
        .collect::<Vec<_>>();

    debug!(count = codes.len(), "generated batch");

    Ok(Batch {
        timestamp,
        layout,
        codes,
    })
}

/// Generates a batch stamped with the current wall-clock time.
pub fn generate_now<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Batch> {
    generate(config, current_timestamp()?, rng)
}

/// Returns the current UNIX timestamp in seconds.
pub fn current_timestamp() -> Result<u64> {
    let seconds = Utc::now().timestamp();
    u64::try_from(seconds).map_err(|_| CodeError::Clock(seconds))
}
