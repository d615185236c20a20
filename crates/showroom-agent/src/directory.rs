// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session directory: opaque session keys to live conversation sessions.
//!
//! Sessions are created on first message and destroyed on explicit clear.
//! Each session sits behind its own async mutex, so two submits for the
//! same session serialize (no interleaved or lost history appends) while
//! distinct sessions proceed fully in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use showroom_core::{ChatMessage, ChatProvider};
use showroom_tools::ToolRegistry;
use tokio::sync::Mutex;
use tracing::info;

use crate::session::ChatSession;
use crate::turn::TurnOptions;

/// Maps external session identifiers to conversation sessions.
pub struct SessionDirectory {
    provider: Arc<dyn ChatProvider>,
    registry: Arc<ToolRegistry>,
    opts: TurnOptions,
    system_prompt: String,
    sessions: DashMap<String, Arc<Mutex<ChatSession>>>,
}

impl SessionDirectory {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        registry: Arc<ToolRegistry>,
        opts: TurnOptions,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            registry,
            opts,
            system_prompt: system_prompt.into(),
            sessions: DashMap::new(),
        }
    }

    /// Resolves or creates the session for `session_id` and runs one turn.
    pub async fn submit(&self, session_id: &str, user_text: &str) -> String {
        let session = self.resolve_or_create(session_id);
        // The map shard lock is released; only this session's mutex is
        // held across the provider calls.
        let mut guard = session.lock().await;
        guard.submit(user_text).await
    }

    /// Destroys a session. Returns false when the id was unknown.
    pub fn clear(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            info!(session_id, "session cleared");
        }
        removed
    }

    /// Snapshot of a session's ordered history (system message included;
    /// display callers typically filter it out). `None` when the id is
    /// unknown.
    pub async fn history(&self, session_id: &str) -> Option<Vec<ChatMessage>> {
        let session = self.sessions.get(session_id)?.clone();
        let guard = session.lock().await;
        Some(guard.history().to_vec())
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn resolve_or_create(&self, session_id: &str) -> Arc<Mutex<ChatSession>> {
        if let Some(existing) = self.sessions.get(session_id) {
            return existing.clone();
        }
        let created = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                info!(session_id, "session created");
                Arc::new(Mutex::new(ChatSession::new(
                    Arc::clone(&self.provider),
                    Arc::clone(&self.registry),
                    self.opts.clone(),
                    &self.system_prompt,
                )))
            })
            .clone();
        created
    }
}
