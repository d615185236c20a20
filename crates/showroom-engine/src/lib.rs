// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query engine for the Showroom dealership assistant.
//!
//! Stateless query functions over the immutable catalog plus one piece of
//! shared mutable state, the appointment ledger. Every "no data" condition
//! (empty search, unknown vehicle, booking conflict) is a first-class
//! result value; nothing here returns an error for missing data.

pub mod appointments;
pub mod business;
pub mod financing;
pub mod inventory;

use std::sync::Arc;

use chrono::NaiveDate;

use showroom_catalog::Catalog;

pub use appointments::{
    Appointment, AppointmentLedger, AppointmentStatus, AppointmentType, ScheduleOutcome,
    SlotRequest,
};
pub use business::{business_info, BusinessSection, BusinessSnapshot};
pub use financing::{financing_quotes, monthly_payment, CreditProfile, FinancingQuotes};
pub use inventory::{
    search, vehicle_details, DetailOutcome, SearchCriteria, SearchResults, VehicleSummary,
};

/// The query engine: the catalog and the appointment ledger, constructed
/// once at process start and shared across all sessions.
pub struct QueryEngine {
    catalog: Arc<Catalog>,
    ledger: AppointmentLedger,
}

impl QueryEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            ledger: AppointmentLedger::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &AppointmentLedger {
        &self.ledger
    }

    /// Inventory search. Never fails; empty results are a valid outcome.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchResults {
        inventory::search(&self.catalog, criteria)
    }

    /// Full vehicle record by id.
    pub fn vehicle_details(&self, id: &str) -> DetailOutcome {
        inventory::vehicle_details(&self.catalog, id)
    }

    /// Open slots on a date. Slot exclusion ignores appointment type.
    pub fn available_slots(&self, date: NaiveDate) -> Vec<&'static str> {
        self.ledger.available_slots(date)
    }

    /// Conflict-checked booking.
    pub fn schedule(&self, request: SlotRequest) -> ScheduleOutcome {
        self.ledger.schedule(request)
    }

    /// Business record projection.
    pub fn business_info(&self, section: BusinessSection) -> BusinessSnapshot {
        business::business_info(&self.catalog.business, section)
    }

    /// Financing options with optional per-plan payment estimates.
    pub fn financing_quotes(
        &self,
        car_price: Option<f64>,
        down_payment: Option<f64>,
        credit_profile: Option<CreditProfile>,
    ) -> FinancingQuotes {
        financing::financing_quotes(&self.catalog, car_price, down_payment, credit_profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_wires_catalog_and_ledger() {
        let engine = QueryEngine::new(Arc::new(Catalog::sample()));
        assert_eq!(engine.search(&SearchCriteria::default()).total_found, 6);
        assert!(engine.ledger().is_empty());

        let date: NaiveDate = "2026-10-01".parse().unwrap();
        assert_eq!(engine.available_slots(date).len(), 9);

        let outcome = engine.schedule(SlotRequest {
            date,
            time: "9:00 AM".into(),
            kind: AppointmentType::Consultation,
            customer_name: "Luis Pérez".into(),
            customer_phone: "555-0101".into(),
            customer_email: None,
            car_id: None,
            notes: None,
        });
        assert!(matches!(outcome, ScheduleOutcome::Booked(_)));
        assert_eq!(engine.available_slots(date).len(), 8);
    }

    #[test]
    fn engine_shares_one_ledger_across_clones_of_the_arc() {
        let engine = Arc::new(QueryEngine::new(Arc::new(Catalog::sample())));
        let date: NaiveDate = "2026-10-02".parse().unwrap();

        let other = Arc::clone(&engine);
        other.schedule(SlotRequest {
            date,
            time: "10:00 AM".into(),
            kind: AppointmentType::TestDrive,
            customer_name: "Ana".into(),
            customer_phone: "555".into(),
            customer_email: None,
            car_id: None,
            notes: None,
        });
        assert!(!engine.available_slots(date).contains(&"10:00 AM"));
    }
}
