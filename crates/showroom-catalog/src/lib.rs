// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog store for the Showroom dealership assistant.
//!
//! Pure data, no behavior: the vehicle inventory, the business record, the
//! financing plans, and the fixed appointment slot set. A [`Catalog`] is
//! built once at process start and is immutable for the process lifetime;
//! the query engine holds it behind an `Arc`.

pub mod business;
pub mod financing;
mod sample;
pub mod vehicle;

pub use business::{BusinessInfo, DayHours};
pub use financing::FinancingPlan;
pub use vehicle::{BodyStyle, FuelType, Transmission, Vehicle};

/// The fixed set of bookable appointment times on any given date.
pub const TIME_SLOTS: [&str; 9] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM",
];

/// The immutable dealership catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub vehicles: Vec<Vehicle>,
    pub business: BusinessInfo,
    pub financing_plans: Vec<FinancingPlan>,
}

impl Catalog {
    /// Builds the sample catalog standing in for a real inventory database.
    pub fn sample() -> Self {
        Self {
            vehicles: sample::sample_inventory(),
            business: sample::sample_business(),
            financing_plans: sample::sample_financing_plans(),
        }
    }

    /// Looks up a vehicle by exact id.
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}
