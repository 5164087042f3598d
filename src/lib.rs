//! # redeemcode
//!
//! Generates batches of short, human-typable redemption codes.
//!
//! Each code packs the current UNIX timestamp (high bits) with a random
//! suffix (low bits) and renders the result in a 32-symbol alphabet that
//! leaves out the easily confused `0`, `1`, `I` and `O`.
//!
//! ## Features
//!
//! - **Compact**: The bit layout is the smallest whole number of characters
//!   that fits both the timestamp and the requested suffix domain
//! - **Unique Batches**: Suffixes are sampled without replacement
//! - **Reversible**: Codes decode back to their timestamp and suffix
//! - **Reproducible**: Any seeded `rand::Rng` can drive the sampler
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod code;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;

pub use code::{generate, generate_now, Batch, BitLayout, GenerationConfig, RedemptionCode};
pub use config::{set_home_override, Config};
pub use error::CodeError;
