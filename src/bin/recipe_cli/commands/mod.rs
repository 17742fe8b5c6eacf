// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: Provides recipe browsing, favorites and cooking commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod cook;
pub mod favorites;
pub mod recipes;
