// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Showroom dealership assistant.
//!
//! This crate provides the conversation message model, the provider trait,
//! and the error type used throughout the Showroom workspace. Higher-level
//! crates (engine, tools, agent, gateway) build on these definitions.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ShowroomError;
pub use traits::ChatProvider;
pub use types::{
    ChatMessage, ChatRole, ProviderRequest, ProviderResponse, TokenUsage, ToolCallRequest,
    ToolDefinition,
};
