//! # Random Sampler
//!
//! Draws distinct random suffixes from `[0, 2^random_bits - 1]` without
//! replacement. Uses Floyd's subset algorithm, so the cost depends only on
//! the number of values drawn, never on the domain size.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};

use crate::error::{CodeError, Result};

/// Draws `count` pairwise-distinct values uniformly from a `random_bits`-bit domain.
///
/// The returned order is itself uniformly shuffled and depends only on the
/// state of `rng`, so a seeded generator reproduces the same batch.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, random_bits: u32, count: usize) -> Result<Vec<u128>> {
    // Layouts never exceed 125 bits, so the shift cannot overflow.
    let domain = 1u128 << random_bits;
    let requested = count as u128;

    if requested > domain {
        return Err(CodeError::InsufficientDomain {
            requested: count,
            random_bits,
            available: domain,
        });
    }

    let mut chosen = HashSet::new();
    let mut values = Vec::new();
    chosen.try_reserve(count).map_err(|_| too_large(count))?;
    values.try_reserve_exact(count).map_err(|_| too_large(count))?;

    for upper in (domain - requested)..domain {
        let candidate = rng.random_range(0..=upper);
        let value = if chosen.contains(&candidate) {
            upper
        } else {
            candidate
        };
        chosen.insert(value);
        values.push(value);
    }

    values.shuffle(rng);
    Ok(values)
}

fn too_large(count: usize) -> CodeError {
    CodeError::Config(format!("batch_count {count} is too large to allocate"))
}
