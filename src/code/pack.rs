//! # Bit Packing
//!
//! Combines a timestamp (high bits) with a random suffix (low bits).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Packs `timestamp` above a `random_bits`-wide `suffix`.
///
/// `suffix` must be below `2^random_bits`.
pub fn pack(timestamp: u64, random_bits: u32, suffix: u128) -> u128 {
    debug_assert!(suffix >> random_bits == 0, "suffix wider than random_bits");
    (u128::from(timestamp) << random_bits) | suffix
}

/// Splits a composite back into `(timestamp, suffix)`.
pub fn unpack(composite: u128, random_bits: u32) -> (u128, u128) {
    let mask = (1u128 << random_bits) - 1;
    (composite >> random_bits, composite & mask)
}
