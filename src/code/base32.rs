//! # Base32 Rendering
//!
//! Renders composite values as fixed-width codes, one character per 5-bit
//! group, most significant group first.
//! Uses alphabet: A-Z excluding I and O, then 2-9 (32 characters).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    constants::{BITS_PER_CHAR, MAX_CODE_LEN},
    error::{CodeError, Result},
};

/// Redemption code alphabet (excludes 0, 1, I, O for readability)
pub const ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Marks bytes that are not part of [`ALPHABET`] in [`DECODE_TABLE`].
const INVALID: u8 = 0xFF;

/// Inverse of [`ALPHABET`]: ASCII byte -> 5-bit group value.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Encodes a composite value into a code of `total_bits / 5` characters.
///
/// Bits above `total_bits` are ignored; callers pass values that fit.
///
/// # Arguments
/// * `value` - The composite value to encode
/// * `total_bits` - Width of the composite, a multiple of 5
///
/// # Returns
/// A `String` of exactly `total_bits / 5` characters
pub fn encode(value: u128, total_bits: u32) -> String {
    debug_assert_eq!(total_bits % BITS_PER_CHAR, 0);
    let group_count = total_bits / BITS_PER_CHAR;
    let mut result = String::with_capacity(group_count as usize);

    for i in 0..group_count {
        let shift = (group_count - 1 - i) * BITS_PER_CHAR;
        let group = ((value >> shift) & 0x1F) as usize;
        result.push(char::from(ALPHABET[group]));
    }

    result
}

/// Decodes a code back into its composite value.
///
/// Decoding is exact: upper-case alphabet characters only.
/// Empty input is rejected because no layout renders a code with zero
/// characters, and input longer than 25 characters would overflow `u128`.
pub fn decode(code: &str) -> Result<u128> {
    let len = code.chars().count();
    if len == 0 || len > MAX_CODE_LEN {
        return Err(CodeError::InvalidLength(len));
    }

    code.chars()
        .enumerate()
        .try_fold(0u128, |acc, (position, character)| {
            let index = lookup(character)
                .ok_or(CodeError::InvalidCharacter { character, position })?;
            Ok((acc << BITS_PER_CHAR) | u128::from(index))
        })
}

/// Returns the 5-bit value of an alphabet character.
pub fn lookup(character: char) -> Option<u8> {
    if !character.is_ascii() {
        return None;
    }
    match DECODE_TABLE[character as usize] {
        INVALID => None,
        index => Some(index),
    }
}
