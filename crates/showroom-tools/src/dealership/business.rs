// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `getBusinessInfo` -- dealership hours, location, contact, services.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{BusinessSection, QueryEngine};

use crate::tool::Tool;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BusinessArgs {
    info_type: Option<String>,
}

pub struct BusinessInfoTool {
    engine: Arc<QueryEngine>,
}

impl BusinessInfoTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for BusinessInfoTool {
    fn name(&self) -> &str {
        "getBusinessInfo"
    }

    fn description(&self) -> &str {
        "Get general business information like hours, location, contact details, and services"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "infoType": {
                    "type": "string",
                    "enum": ["hours", "location", "contact", "services", "all"],
                    "description": "Type of information requested"
                }
            }
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        // Unknown or absent section falls back to "all"; this tool has no
        // failure path.
        let args: BusinessArgs = serde_json::from_value(input).unwrap_or(BusinessArgs {
            info_type: None,
        });
        let section = args
            .info_type
            .as_deref()
            .and_then(|s| s.parse::<BusinessSection>().ok())
            .unwrap_or_default();

        let snapshot = self.engine.business_info(section);
        let mut payload = serde_json::to_value(snapshot)
            .map_err(|e| ShowroomError::Internal(format!("snapshot serialization: {e}")))?;
        payload["success"] = json!(true);
        Ok(payload)
    }
}
