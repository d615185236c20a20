// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `getFinancingOptions` -- financing plans and payment estimates.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{CreditProfile, QueryEngine};

use crate::tool::{failure, Tool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinancingArgs {
    car_price: Option<f64>,
    down_payment: Option<f64>,
    credit_profile: Option<CreditProfile>,
}

pub struct FinancingOptionsTool {
    engine: Arc<QueryEngine>,
}

impl FinancingOptionsTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for FinancingOptionsTool {
    fn name(&self) -> &str {
        "getFinancingOptions"
    }

    fn description(&self) -> &str {
        "Get available financing and leasing options"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "carPrice": {
                    "type": "number",
                    "description": "Price of the car to calculate monthly payments"
                },
                "downPayment": {
                    "type": "number",
                    "description": "Down payment amount"
                },
                "creditProfile": {
                    "type": "string",
                    "enum": ["excellent", "good", "fair", "limited"],
                    "description": "Customer credit profile"
                }
            }
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        let args: FinancingArgs = match serde_json::from_value(input) {
            Ok(a) => a,
            Err(e) => return Ok(failure(format!("Invalid arguments: {e}"))),
        };

        let quotes =
            self.engine
                .financing_quotes(args.car_price, args.down_payment, args.credit_profile);
        let mut payload = serde_json::to_value(quotes)
            .map_err(|e| ShowroomError::Internal(format!("quote serialization: {e}")))?;
        payload["success"] = json!(true);
        Ok(payload)
    }
}
