// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dealership business record: identity, contact details, opening hours, services.

use serde::{Deserialize, Serialize};

/// Opening hours for one day, kept in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayHours {
    pub day: String,
    pub hours: String,
}

/// The dealership business record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub hours: Vec<DayHours>,
    pub services: Vec<String>,
}
