//! # Bit Layout
//!
//! Splits a code into timestamp bits (high) and random suffix bits (low),
//! rounding the total up to whole 5-bit characters.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crate::{
    constants::{BITS_PER_CHAR, MAX_TOTAL_BITS},
    error::{CodeError, Result},
};

/// Bit widths used by every code of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLayout {
    /// Bits occupied by the timestamp
    pub timestamp_bits: u32,
    /// Bits occupied by the random suffix
    pub random_bits: u32,
    /// `timestamp_bits + random_bits`, always a positive multiple of 5
    pub total_bits: u32,
}

impl BitLayout {
    /// Computes the layout for a timestamp and a minimum suffix domain size.
    pub fn compute(timestamp: u64, max_scope: u64) -> Result<Self> {
        if max_scope == 0 {
            return Err(CodeError::Config("max_scope must be greater than 0".into()));
        }

        let timestamp_bits = bit_length(timestamp);
        let min_random_bits = ceil_log2(max_scope);
        // An all-zero input still needs one character.
        let total_bits = round_up_to_char(timestamp_bits + min_random_bits).max(BITS_PER_CHAR);

        if total_bits > MAX_TOTAL_BITS {
            return Err(CodeError::Config(format!(
                "codes would need {total_bits} bits (limit is {MAX_TOTAL_BITS}); lower max_scope"
            )));
        }

        Ok(Self {
            timestamp_bits,
            random_bits: total_bits - timestamp_bits,
            total_bits,
        })
    }

    /// Number of characters in every code of this layout.
    pub const fn code_len(&self) -> usize {
        (self.total_bits / BITS_PER_CHAR) as usize
    }

    /// Number of distinct random suffixes.
    pub const fn domain_size(&self) -> u128 {
        1u128 << self.random_bits
    }

    /// Largest random suffix (also the mask selecting the suffix bits).
    pub const fn random_max(&self) -> u128 {
        self.domain_size() - 1
    }
}

impl fmt::Display for BitLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bits = {} timestamp + {} random ({} chars)",
            self.total_bits,
            self.timestamp_bits,
            self.random_bits,
            self.code_len()
        )
    }
}

/// Number of bits in the binary representation of `value` (0 for 0).
pub const fn bit_length(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

/// `ceil(log2(value))` for `value >= 1`.
const fn ceil_log2(value: u64) -> u32 {
    if value <= 1 {
        0
    } else {
        bit_length(value - 1)
    }
}

const fn round_up_to_char(bits: u32) -> u32 {
    bits.div_ceil(BITS_PER_CHAR) * BITS_PER_CHAR
}
