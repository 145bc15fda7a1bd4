// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text utilities.
//!
//! Only normalization lives here for now: the Arabic-aware folding that makes a
//! query and a record field comparable token by token.

pub mod normalize;

pub use normalize::normalize;
