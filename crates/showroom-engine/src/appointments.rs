// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appointment ledger: slot availability and conflict-checked booking.
//!
//! The ledger is shared mutable state across all sessions. Booking is a
//! single critical section -- the conflict check and the append happen
//! under one mutex guard with no await point in between, so two racing
//! bookings for the same (date, time) can never both succeed.
//!
//! A slot booked for any appointment type blocks every type at that time
//! on that date; the slot catalog does not distinguish purposes.

use std::sync::Mutex;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info};

use showroom_catalog::TIME_SLOTS;

/// Kind of appointment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    TestDrive,
    Consultation,
    Inspection,
    Delivery,
}

/// Lifecycle status of an appointment. Cancelled appointments release
/// their slot; every other status holds it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
}

/// A booked appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Sequentially assigned id, e.g. "apt-1". Doubles as the
    /// confirmation number handed to the customer.
    pub id: String,
    pub date: NaiveDate,
    /// One of the fixed slot catalog values.
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Referenced vehicle, if any. Deliberately not validated against the
    /// catalog -- customers may ask about a car a colleague quoted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

/// A booking request. Field presence is enforced by the tool schema; the
/// ledger itself only checks the slot.
#[derive(Debug, Clone)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub time: String,
    pub kind: AppointmentType,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub car_id: Option<String>,
    pub notes: Option<String>,
}

/// Outcome of a booking attempt.
#[derive(Debug, Clone)]
pub enum ScheduleOutcome {
    Booked(Appointment),
    /// The slot is already held by a non-cancelled appointment. Nothing
    /// was mutated.
    Conflict { date: NaiveDate, time: String },
}

struct LedgerInner {
    appointments: Vec<Appointment>,
    next_id: u64,
}

/// In-memory appointment store, process lifetime.
pub struct AppointmentLedger {
    inner: Mutex<LedgerInner>,
}

impl AppointmentLedger {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LedgerInner {
                appointments: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns the fixed slot catalog minus slots consumed by
    /// non-cancelled appointments on `date`.
    pub fn available_slots(&self, date: NaiveDate) -> Vec<&'static str> {
        let inner = self.inner.lock().expect("appointment ledger poisoned");
        TIME_SLOTS
            .into_iter()
            .filter(|slot| {
                !inner.appointments.iter().any(|apt| {
                    apt.date == date
                        && apt.time == *slot
                        && apt.status != AppointmentStatus::Cancelled
                })
            })
            .collect()
    }

    /// Books a slot, rejecting with [`ScheduleOutcome::Conflict`] when a
    /// non-cancelled appointment already holds (date, time).
    pub fn schedule(&self, request: SlotRequest) -> ScheduleOutcome {
        let mut inner = self.inner.lock().expect("appointment ledger poisoned");

        let conflict = inner.appointments.iter().any(|apt| {
            apt.date == request.date
                && apt.time == request.time
                && apt.status != AppointmentStatus::Cancelled
        });
        if conflict {
            debug!(date = %request.date, time = %request.time, "booking conflict");
            return ScheduleOutcome::Conflict {
                date: request.date,
                time: request.time,
            };
        }

        let id = format!("apt-{}", inner.next_id);
        inner.next_id += 1;

        let appointment = Appointment {
            id,
            date: request.date,
            time: request.time,
            kind: request.kind,
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            customer_email: request.customer_email,
            car_id: request.car_id,
            notes: request.notes,
            status: AppointmentStatus::Scheduled,
        };
        inner.appointments.push(appointment.clone());

        info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            kind = %appointment.kind,
            "appointment booked"
        );
        ScheduleOutcome::Booked(appointment)
    }

    /// Number of appointments ever booked (including cancelled ones).
    pub fn len(&self) -> usize {
        self.inner.lock().expect("appointment ledger poisoned").appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all appointments, for display and tests.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.inner
            .lock()
            .expect("appointment ledger poisoned")
            .appointments
            .clone()
    }

    /// Transitions an appointment's status. Returns false when the id is
    /// unknown. Cancelling releases the slot for new bookings.
    pub fn set_status(&self, id: &str, status: AppointmentStatus) -> bool {
        let mut inner = self.inner.lock().expect("appointment ledger poisoned");
        match inner.appointments.iter_mut().find(|apt| apt.id == id) {
            Some(apt) => {
                apt.status = status;
                true
            }
            None => false,
        }
    }
}

impl Default for AppointmentLedger {
    fn default() -> Self {
        Self::new()
    }
}
