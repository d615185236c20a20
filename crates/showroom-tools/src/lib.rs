// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool layer for the Showroom dealership assistant.
//!
//! Maps tool names to parameter schemas and query-engine operations. The
//! registry advertises capabilities to the LLM provider and dispatches the
//! tool calls it sends back; the six dealership tools translate between
//! the model-facing JSON payloads and the typed engine API.

pub mod dealership;
pub mod tool;

pub use dealership::register_dealership_tools;
pub use tool::{failure, Tool, ToolRegistry};

use std::sync::Arc;

use showroom_engine::QueryEngine;

/// Builds a registry pre-populated with the six dealership tools.
pub fn dealership_registry(engine: Arc<QueryEngine>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_dealership_tools(&mut registry, engine);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_catalog::Catalog;

    #[tokio::test]
    async fn dealership_registry_dispatches_end_to_end() {
        let registry =
            dealership_registry(Arc::new(QueryEngine::new(Arc::new(Catalog::sample()))));
        let result = registry
            .dispatch("searchInventory", r#"{"budget": "economico"}"#)
            .await;
        assert_eq!(result["success"], true);
        assert!(result["totalFound"].as_u64().unwrap() > 0);
    }
}
