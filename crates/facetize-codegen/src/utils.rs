// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared utilities for code generation.
//!
//! This module contains helper functions used across multiple generators.
//!
//! # Submodules
//!
//! - [`docs`] — Doc comment extraction and re-emission
//! - [`marker`] — Attributes placed on generated impl blocks
//! - [`types`] — Type inspection helpers (`Option<T>`, last segments, wrapping)

pub mod docs;
pub mod marker;
pub mod types;
