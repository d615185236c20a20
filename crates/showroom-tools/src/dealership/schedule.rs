// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `scheduleAppointment` -- conflict-checked booking.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use showroom_core::ShowroomError;
use showroom_engine::{AppointmentType, QueryEngine, ScheduleOutcome, SlotRequest};

use crate::tool::{failure, Tool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleArgs {
    date: NaiveDate,
    time: String,
    appointment_type: AppointmentType,
    customer_name: String,
    customer_phone: String,
    customer_email: Option<String>,
    car_id: Option<String>,
    notes: Option<String>,
}

pub struct ScheduleAppointmentTool {
    engine: Arc<QueryEngine>,
}

impl ScheduleAppointmentTool {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl Tool for ScheduleAppointmentTool {
    fn name(&self) -> &str {
        "scheduleAppointment"
    }

    fn description(&self) -> &str {
        "Schedule an appointment for the customer. Requires customer contact information."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Appointment date in YYYY-MM-DD format"
                },
                "time": {
                    "type": "string",
                    "description": "Appointment time (e.g., \"10:00 AM\")"
                },
                "appointmentType": {
                    "type": "string",
                    "enum": ["test_drive", "consultation", "inspection", "delivery"],
                    "description": "Type of appointment"
                },
                "customerName": {
                    "type": "string",
                    "description": "Customer full name"
                },
                "customerPhone": {
                    "type": "string",
                    "description": "Customer phone number"
                },
                "customerEmail": {
                    "type": "string",
                    "description": "Customer email address"
                },
                "carId": {
                    "type": "string",
                    "description": "ID of the car if appointment is related to a specific vehicle"
                },
                "notes": {
                    "type": "string",
                    "description": "Additional notes or special requests"
                }
            },
            "required": ["date", "time", "appointmentType", "customerName", "customerPhone"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<Value, ShowroomError> {
        let args: ScheduleArgs = match serde_json::from_value(input) {
            Ok(a) => a,
            Err(e) => return Ok(failure(format!("Invalid arguments: {e}"))),
        };

        let outcome = self.engine.schedule(SlotRequest {
            date: args.date,
            time: args.time,
            kind: args.appointment_type,
            customer_name: args.customer_name,
            customer_phone: args.customer_phone,
            customer_email: args.customer_email,
            car_id: args.car_id,
            notes: args.notes,
        });

        let payload = match outcome {
            ScheduleOutcome::Booked(appointment) => {
                let confirmation = appointment.id.clone();
                json!({
                    "success": true,
                    "appointment": appointment,
                    "confirmationNumber": confirmation,
                    "message": format!(
                        "Appointment scheduled successfully! Your confirmation number is {confirmation}."
                    ),
                })
            }
            ScheduleOutcome::Conflict { .. } => {
                failure("This time slot is already booked. Please choose a different time.")
            }
        };
        Ok(payload)
    }
}
