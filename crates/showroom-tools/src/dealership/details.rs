// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `getCarDetails` -- full record lookup for one vehicle.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{DetailOutcome, QueryEngine};

use crate::tool::{failure, Tool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailsArgs {
    car_id: String,
}

pub struct CarDetailsTool {
    engine: Arc<QueryEngine>,
}

impl CarDetailsTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for CarDetailsTool {
    fn name(&self) -> &str {
        "getCarDetails"
    }

    fn description(&self) -> &str {
        "Get detailed information about a specific car by ID"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "carId": {
                    "type": "string",
                    "description": "The unique ID of the car"
                }
            },
            "required": ["carId"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        let args: DetailsArgs = match serde_json::from_value(input) {
            Ok(a) => a,
            Err(e) => return Ok(failure(format!("Invalid arguments: {e}"))),
        };

        let payload = match self.engine.vehicle_details(&args.car_id) {
            DetailOutcome::Found(vehicle) => json!({ "success": true, "car": vehicle }),
            DetailOutcome::NotAvailable { .. } => failure("This car is no longer available"),
            DetailOutcome::NotFound { .. } => failure("Car not found with the provided ID"),
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_catalog::Catalog;

    fn tool() -> CarDetailsTool {
        CarDetailsTool::new(Arc::new(QueryEngine::new(Arc::new(Catalog::sample()))))
    }

    #[tokio::test]
    async fn found_vehicle_returns_full_record() {
        let result = tool()
            .invoke(json!({"carId": "audi-a4-2023-001"}))
            .await
            .unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["car"]["brand"], "Audi");
        // Full record: all features, not the 3-item projection.
        assert_eq!(result["car"]["features"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn unknown_id_and_unavailable_are_distinct_outcomes() {
        let missing = tool().invoke(json!({"carId": "ghost-001"})).await.unwrap();
        assert_eq!(missing["success"], false);
        assert_eq!(missing["error"], "Car not found with the provided ID");

        let mut catalog = Catalog::sample();
        catalog.vehicles[0].is_available = false;
        let id = catalog.vehicles[0].id.clone();
        let tool = CarDetailsTool::new(Arc::new(QueryEngine::new(Arc::new(catalog))));
        let unavailable = tool.invoke(json!({"carId": id})).await.unwrap();
        assert_eq!(unavailable["success"], false);
        assert_eq!(unavailable["error"], "This car is no longer available");
    }

    #[tokio::test]
    async fn missing_required_car_id_is_a_structured_failure() {
        let result = tool().invoke(json!({})).await.unwrap();
        assert_eq!(result["success"], false);
        assert!(result["error"].as_str().unwrap().contains("Invalid arguments"));
    }
}
