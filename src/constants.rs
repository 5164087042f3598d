//! # Constants
//!
//! Centralized constants for magic values used throughout redeemcode.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Code Format
// =============================================================================

/// Number of bits rendered by one alphabet character.
pub const BITS_PER_CHAR: u32 = 5;

/// Widest composite value a code may carry (25 characters in a `u128`).
pub const MAX_TOTAL_BITS: u32 = 125;

/// Longest code that can be decoded.
pub const MAX_CODE_LEN: usize = (MAX_TOTAL_BITS / BITS_PER_CHAR) as usize;

// =============================================================================
// Generation Defaults
// =============================================================================

/// Default lower bound on the random suffix domain size.
pub const DEFAULT_MAX_SCOPE: u64 = 100_000;

/// Default number of codes generated per batch.
pub const DEFAULT_BATCH_COUNT: usize = 10;

// =============================================================================
// File System
// =============================================================================

/// Project configuration file name (searched upward from the current directory).
pub const PROJECT_CONFIG_FILE: &str = ".redeemcode";

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "redeemcode";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Logging
// =============================================================================

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
