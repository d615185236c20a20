// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `searchInventory` -- multi-criteria inventory search.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{QueryEngine, SearchCriteria};

use crate::tool::{failure, Tool};

pub struct SearchInventoryTool {
    engine: Arc<QueryEngine>,
}

impl SearchInventoryTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for SearchInventoryTool {
    fn name(&self) -> &str {
        "searchInventory"
    }

    fn description(&self) -> &str {
        "Search for cars in the dealership inventory based on various criteria. \
         The model can flexibly interpret customer needs and apply appropriate filters."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "brand": {
                    "type": "string",
                    "description": "Car brand (e.g., BMW, Toyota, Tesla, Ford, Honda, Audi)"
                },
                "model": {
                    "type": "string",
                    "description": "Specific car model"
                },
                "priceMin": {
                    "type": "number",
                    "description": "Minimum price range"
                },
                "priceMax": {
                    "type": "number",
                    "description": "Maximum price range"
                },
                "year": {
                    "type": "number",
                    "description": "Specific year or minimum year"
                },
                "fuelType": {
                    "type": "string",
                    "enum": ["gasoline", "diesel", "hybrid", "electric"],
                    "description": "Type of fuel/power source"
                },
                "bodyStyle": {
                    "type": "string",
                    "enum": ["sedan", "suv", "hatchback", "coupe", "wagon", "pickup"],
                    "description": "Vehicle body style"
                },
                "transmission": {
                    "type": "string",
                    "enum": ["manual", "automatic"],
                    "description": "Transmission type"
                },
                "maxMileage": {
                    "type": "number",
                    "description": "Maximum acceptable mileage"
                },
                "usage": {
                    "type": "string",
                    "description": "Intended use (e.g., \"commuting\", \"family\", \"work\", \"luxury\")"
                },
                "budget": {
                    "type": "string",
                    "description": "Budget category (e.g., \"economico\", \"mid-range\", \"luxury\")"
                }
            }
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        let criteria: SearchCriteria = match serde_json::from_value(input) {
            Ok(c) => c,
            Err(e) => return Ok(failure(format!("Invalid search criteria: {e}"))),
        };

        let results = self.engine.search(&criteria);
        Ok(json!({
            "success": true,
            "totalFound": results.total_found,
            "cars": results.cars,
        }))
    }
}
