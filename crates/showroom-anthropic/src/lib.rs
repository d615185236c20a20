// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude provider adapter for the Showroom assistant.
//!
//! Implements the `ChatProvider` trait over the Messages API with native
//! tool_use / tool_result round-tripping. The wire format stays inside
//! this crate; the conversation loop only sees the role-tagged message
//! model.

pub mod client;
pub mod provider;
pub mod types;

pub use client::AnthropicClient;
pub use provider::AnthropicProvider;
