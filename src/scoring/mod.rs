// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field weights decide how much a query word is worth; ranking turns the
//! resulting scores into a total order that pagination can rely on.

mod core;
pub mod ranking;

pub use self::core::*;
