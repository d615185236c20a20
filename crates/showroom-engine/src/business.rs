// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Business info projection keyed by section.

use serde::Serialize;
use strum::{Display, EnumString};

use showroom_catalog::{BusinessInfo, DayHours};

/// Which slice of the business record a caller wants.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BusinessSection {
    Hours,
    Location,
    Contact,
    Services,
    #[default]
    All,
}

/// A projection of the business record. Absent fields serialize away, so
/// each section yields exactly the keys the original system exposed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Vec<DayHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

/// Projects the requested section of the business record. No failure
/// path: any section value resolves to a subset, `All` to everything.
pub fn business_info(info: &BusinessInfo, section: BusinessSection) -> BusinessSnapshot {
    match section {
        BusinessSection::Hours => BusinessSnapshot {
            hours: Some(info.hours.clone()),
            ..Default::default()
        },
        BusinessSection::Location => BusinessSnapshot {
            name: Some(info.name.clone()),
            address: Some(info.address.clone()),
            ..Default::default()
        },
        BusinessSection::Contact => BusinessSnapshot {
            phone: Some(info.phone.clone()),
            email: Some(info.email.clone()),
            website: Some(info.website.clone()),
            ..Default::default()
        },
        BusinessSection::Services => BusinessSnapshot {
            services: Some(info.services.clone()),
            ..Default::default()
        },
        BusinessSection::All => BusinessSnapshot {
            name: Some(info.name.clone()),
            address: Some(info.address.clone()),
            phone: Some(info.phone.clone()),
            email: Some(info.email.clone()),
            website: Some(info.website.clone()),
            hours: Some(info.hours.clone()),
            services: Some(info.services.clone()),
        },
    }
}
