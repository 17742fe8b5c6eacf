// ABOUTME: Error types re-exported from recipe-core
// ABOUTME: Keeps `crate::errors::*` paths stable for library modules and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::errors::*;
