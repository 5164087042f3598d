//! # Generation Tests
//!
//! End-to-end properties of generated batches: uniqueness, fixed width,
//! round trips and domain containment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::collections::HashSet;

use common::is_alphabet_code;
use rand::{rngs::StdRng, SeedableRng};
use redeemcode::{
    code::{base32, pack},
    generate, BitLayout, CodeError, GenerationConfig,
};

// =============================================================================
// Batch Properties
// =============================================================================

#[test]
fn test_codes_unique_fixed_width_and_reversible() {
    let mut rng = StdRng::seed_from_u64(1);
    let timestamps = [1u64, 5, 1_000, 1_700_000_000, 4_102_444_800];
    let scopes = [1u64, 4, 33, 100_000, 1 << 32];

    for &timestamp in &timestamps {
        for &max_scope in &scopes {
            let layout = BitLayout::compute(timestamp, max_scope).unwrap();
            let count = usize::try_from(layout.domain_size().min(64)).unwrap();
            let config = GenerationConfig::new(max_scope, count).unwrap();
            let batch = generate(&config, timestamp, &mut rng).unwrap();

            assert_eq!(batch.layout, layout);
            assert_eq!(batch.codes.len(), count);

            let unique: HashSet<_> = batch.encoded().collect();
            assert_eq!(unique.len(), count, "duplicate code in batch");

            for code in &batch.codes {
                assert_eq!(code.encoded.len(), layout.code_len());
                assert!(is_alphabet_code(&code.encoded));

                let value = base32::decode(&code.encoded).unwrap();
                assert_eq!(value, code.value);
                assert!(code.suffix <= layout.random_max());
                assert_eq!(value & layout.random_max(), code.suffix);
                assert_eq!(
                    pack::unpack(value, layout.random_bits),
                    (u128::from(timestamp), code.suffix)
                );
            }
        }
    }
}

#[test]
fn test_concrete_scenario() {
    // timestamp 5 (0b101), max_scope 4: one 5-bit character per code
    let layout = BitLayout::compute(5, 4).unwrap();
    assert_eq!(
        (layout.timestamp_bits, layout.random_bits, layout.total_bits),
        (3, 2, 5)
    );
    assert_eq!(layout.random_max(), 3);

    let codes: Vec<String> = [3u128, 0, 2]
        .into_iter()
        .map(|suffix| pack::pack(5, layout.random_bits, suffix))
        .map(|value| base32::encode(value, layout.total_bits))
        .collect();
    assert_eq!(codes, ["Z", "W", "Y"]);
}

#[test]
fn test_full_domain_batch() {
    // 5 (3 bits) + ceil(log2 4) = 5 bits -> 4 suffixes available
    let config = GenerationConfig::new(4, 4).unwrap();
    let batch = generate(&config, 5, &mut StdRng::seed_from_u64(9)).unwrap();

    let mut codes: Vec<&str> = batch.encoded().collect();
    codes.sort_unstable();
    assert_eq!(codes, ["W", "X", "Y", "Z"]);
}

#[test]
fn test_seed_reproduces_batch() {
    let config = GenerationConfig::new(100_000, 20).unwrap();
    let first = generate(&config, 1_700_000_000, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = generate(&config, 1_700_000_000, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first.codes, second.codes);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_insufficient_domain() {
    let config = GenerationConfig::new(4, 5).unwrap();
    let err = generate(&config, 5, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert_eq!(
        err,
        CodeError::InsufficientDomain {
            requested: 5,
            random_bits: 2,
            available: 4,
        }
    );
}

#[test]
fn test_zero_config_rejected() {
    assert!(matches!(
        GenerationConfig::new(0, 10),
        Err(CodeError::Config(_))
    ));
    assert!(matches!(
        GenerationConfig::new(10, 0),
        Err(CodeError::Config(_))
    ));
}

#[test]
fn test_oversized_layout_rejected() {
    let config = GenerationConfig::new(u64::MAX, 1).unwrap();
    let err = generate(&config, u64::MAX, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, CodeError::Config(_)));
}
