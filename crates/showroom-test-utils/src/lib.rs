// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Showroom integration tests.

pub mod scripted_provider;

pub use scripted_provider::{ScriptedProvider, ScriptedReply};
