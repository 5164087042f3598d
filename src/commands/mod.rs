//! # Commands
//!
//! CLI command implementations for redeemcode.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod decode;
pub mod generate;
pub mod layout;
pub mod setup;

pub use self::{
    completions::execute as completions,
    decode::{execute as decode, DecodeArgs},
    generate::{execute as generate, GenerateArgs},
    layout::{execute as layout, LayoutArgs},
    setup::execute as setup,
};
