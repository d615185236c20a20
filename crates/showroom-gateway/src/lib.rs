// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Showroom dealership assistant.
//!
//! A thin request/response wrapper around the session directory: accepts
//! `{message, sessionId}`, returns `{response, sessionId, timestamp}`,
//! with session clearing and history on separate verbs. The conversation
//! logic lives entirely in `showroom-agent`.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState, ServerConfig};
