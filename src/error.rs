//! # Errors
//!
//! Error type shared by the code generation core. Every variant is terminal
//! for the batch that raised it: no partial output is ever returned.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors raised while generating or decoding redemption codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Invalid generation parameters (zero scope, zero count, layout too wide).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// More codes were requested than the random suffix domain can hold.
    #[error(
        "cannot draw {requested} distinct suffixes from a {random_bits}-bit domain \
         ({available} values available)"
    )]
    InsufficientDomain {
        requested: usize,
        random_bits: u32,
        available: u128,
    },

    /// A code contained a character outside the alphabet.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A code was empty or too long to fit a composite value.
    #[error("invalid code length {0} (expected 1-{max} characters)", max = crate::constants::MAX_CODE_LEN)]
    InvalidLength(usize),

    /// The wall clock reported a time before the UNIX epoch.
    #[error("system clock is before the UNIX epoch ({0}s)")]
    Clock(i64),
}

pub type Result<T> = std::result::Result<T, CodeError>;
