// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `getAvailableAppointmentSlots` -- open slots for a date.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{AppointmentType, QueryEngine};

use crate::tool::{failure, Tool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotsArgs {
    /// Date in YYYY-MM-DD format.
    date: NaiveDate,
    /// Echoed back to the model; a booked slot blocks every type.
    appointment_type: Option<AppointmentType>,
}

pub struct AppointmentSlotsTool {
    engine: Arc<QueryEngine>,
}

impl AppointmentSlotsTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for AppointmentSlotsTool {
    fn name(&self) -> &str {
        "getAvailableAppointmentSlots"
    }

    fn description(&self) -> &str {
        "Get available appointment slots for a specific date and type"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Preferred date in YYYY-MM-DD format"
                },
                "appointmentType": {
                    "type": "string",
                    "enum": ["test_drive", "consultation", "inspection", "delivery"],
                    "description": "Type of appointment needed"
                }
            },
            "required": ["date"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        let args: SlotsArgs = match serde_json::from_value(input) {
            Ok(a) => a,
            Err(e) => return Ok(failure(format!("Invalid arguments: {e}"))),
        };

        let slots = self.engine.available_slots(args.date);
        Ok(json!({
            "success": true,
            "date": args.date,
            "availableSlots": slots,
            "appointmentType": args.appointment_type,
        }))
    }
}
