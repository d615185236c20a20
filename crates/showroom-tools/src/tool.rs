// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry.
//!
//! The [`Tool`] trait defines the interface every dealership tool
//! implements. The [`ToolRegistry`] serves two masters: it generates the
//! tool definition list advertised to the LLM provider, and it dispatches
//! incoming tool-call requests by name. Dispatch never panics the turn --
//! unknown tools and malformed payloads come back as structured
//! `{"success": false}` values the model can phrase an honest answer from.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::warn;

use showroom_core::{ShowroomError, ToolDefinition};

/// Unified interface for dealership tools.
///
/// Every tool provides a name, description, JSON Schema for its
/// parameters, and an async `invoke`. The conversation loop calls
/// `invoke` with the parsed JSON arguments from the model's tool call and
/// serializes the returned value into the tool-result message.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for lookup and API serialization).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> Value;

    /// Invokes the tool. Domain-level failures (nothing found, slot
    /// taken, bad arguments) are `success: false` payloads, not errors;
    /// the error channel is reserved for faults that should abort the
    /// turn.
    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError>;
}

/// Builds the standard structured failure payload.
pub fn failure(message: impl Into<String>) -> Value {
    json!({ "success": false, "error": message.into() })
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns provider-format tool definitions for all registered tools,
    /// sorted by name for deterministic request payloads.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.parameters_schema(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Dispatches a tool-call request: parses the raw argument payload and
    /// invokes the matching handler. Every failure mode yields a
    /// structured value so the second provider call can still proceed
    /// with the other results.
    pub async fn dispatch(&self, name: &str, raw_arguments: &str) -> Value {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, "model requested unknown tool");
            return failure(format!("Unknown tool: {name}"));
        };

        let trimmed = raw_arguments.trim();
        let input: Value = if trimmed.is_empty() {
            json!({})
        } else {
            match serde_json::from_str(trimmed) {
                Ok(value) => value,
                Err(e) => {
                    warn!(tool = name, error = %e, "malformed tool arguments");
                    return failure(format!("Malformed tool arguments: {e}"));
                }
            }
        };

        match tool.invoke(input).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "tool invocation failed");
                failure(format!("Tool execution failed: {e}"))
            }
        }
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for registry tests.
    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back"
        }

        fn parameters_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string", "description": "Message to echo" }
                },
                "required": ["message"]
            })
        }

        async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
            Ok(json!({ "success": true, "echo": input["message"] }))
        }
    }

    /// A tool that always errors, for dispatch fault tests.
    struct BrokenTool;

    #[async_trait]
    impl Tool for BrokenTool {
        fn name(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "Always fails"
        }

        fn parameters_schema(&self) -> Value {
            json!({"type": "object", "properties": {}})
        }

        async fn invoke(&self, _input: Value) -> Result<Value, ShowroomError> {
            Err(ShowroomError::Internal("boom".into()))
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(BrokenTool));
        registry
    }

    #[test]
    fn registry_registers_and_retrieves() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn tool_definitions_are_sorted_by_name() {
        let defs = registry().tool_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "broken");
        assert_eq!(defs[1].name, "echo");
        assert!(defs[1].input_schema["properties"]["message"].is_object());
    }

    #[tokio::test]
    async fn dispatch_runs_the_matching_handler() {
        let result = registry().dispatch("echo", r#"{"message":"hola"}"#).await;
        assert_eq!(result["success"], true);
        assert_eq!(result["echo"], "hola");
    }

    #[tokio::test]
    async fn dispatch_unknown_tool_is_a_structured_failure() {
        let result = registry().dispatch("createInvoice", "{}").await;
        assert_eq!(result["success"], false);
        assert!(result["error"].as_str().unwrap().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn dispatch_malformed_payload_is_a_structured_failure() {
        let result = registry().dispatch("echo", "{not json").await;
        assert_eq!(result["success"], false);
        assert!(result["error"]
            .as_str()
            .unwrap()
            .contains("Malformed tool arguments"));
    }

    #[tokio::test]
    async fn dispatch_empty_payload_becomes_empty_object() {
        let result = registry().dispatch("echo", "").await;
        assert_eq!(result["success"], true);
        assert!(result["echo"].is_null());
    }

    #[tokio::test]
    async fn dispatch_converts_tool_errors_to_failures() {
        let result = registry().dispatch("broken", "{}").await;
        assert_eq!(result["success"], false);
        assert!(result["error"].as_str().unwrap().contains("boom"));
    }
}
