// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inventory search and vehicle detail lookup.
//!
//! Search never fails: every criterion is optional, unmatched criteria
//! simply narrow nothing, and an empty result set is an ordinary outcome
//! the model reports honestly to the customer.

use serde::{Deserialize, Serialize};

use showroom_catalog::{BodyStyle, Catalog, FuelType, Transmission, Vehicle};

/// Vehicles priced below this count as "economy" for budget hints.
pub const ECONOMY_PRICE_CAP: u32 = 30_000;
/// Vehicles priced above this count as "luxury" for usage and budget hints.
pub const LUXURY_PRICE_FLOOR: u32 = 40_000;
/// Inclusive mid-range price band for budget hints.
pub const MID_RANGE_BAND: (u32, u32) = (25_000, 45_000);
/// Brands treated as luxury regardless of price.
pub const LUXURY_BRANDS: [&str; 2] = ["BMW", "Audi"];
/// Combined-mpg threshold above which a vehicle ranks as efficient.
pub const EFFICIENT_COMBINED_MPG: u16 = 30;

/// How many features the reduced list projection surfaces per vehicle.
const KEY_FEATURE_COUNT: usize = 3;

/// Search criteria. All fields are optional and combine as AND predicates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    /// Case-insensitive substring match on brand.
    pub brand: Option<String>,
    /// Case-insensitive substring match on model.
    pub model: Option<String>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    /// Minimum model year.
    pub year: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub body_style: Option<BodyStyle>,
    pub transmission: Option<Transmission>,
    pub max_mileage: Option<u32>,
    /// Free-text intended-use hint, e.g. "commuting", "familia", "luxury".
    pub usage: Option<String>,
    /// Free-text budget hint, e.g. "economico", "mid-range", "premium".
    pub budget: Option<String>,
}

/// Reduced vehicle projection for list views: first few features only,
/// no images, no lot internals beyond the location tag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: u32,
    pub color: String,
    pub mileage: u32,
    pub fuel_type: FuelType,
    pub body_style: BodyStyle,
    pub transmission: Transmission,
    pub fuel_economy: String,
    pub key_features: Vec<String>,
    pub description: String,
    pub location: String,
}

impl VehicleSummary {
    fn from_vehicle(v: &Vehicle) -> Self {
        Self {
            id: v.id.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            year: v.year,
            price: v.price,
            color: v.color.clone(),
            mileage: v.mileage,
            fuel_type: v.fuel_type,
            body_style: v.body_style,
            transmission: v.transmission,
            fuel_economy: v.fuel_economy.clone(),
            key_features: v.features.iter().take(KEY_FEATURE_COUNT).cloned().collect(),
            description: v.description.clone(),
            location: v.location.clone(),
        }
    }
}

/// Result of an inventory search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub total_found: usize,
    pub cars: Vec<VehicleSummary>,
}

/// Outcome of a vehicle detail lookup. All three cases are caller-visible
/// values, not errors.
#[derive(Debug, Clone)]
pub enum DetailOutcome {
    Found(Vehicle),
    /// The vehicle exists but its availability flag is off.
    NotAvailable { id: String },
    NotFound { id: String },
}

/// Searches the inventory: availability, structured filters, then the
/// usage and budget hints, in that order.
pub fn search(catalog: &Catalog, criteria: &SearchCriteria) -> SearchResults {
    let mut results: Vec<&Vehicle> = catalog.vehicles.iter().filter(|v| v.is_available).collect();

    if let Some(brand) = &criteria.brand {
        let needle = brand.to_lowercase();
        results.retain(|v| v.brand.to_lowercase().contains(&needle));
    }
    if let Some(model) = &criteria.model {
        let needle = model.to_lowercase();
        results.retain(|v| v.model.to_lowercase().contains(&needle));
    }
    if let Some(min) = criteria.price_min {
        results.retain(|v| v.price >= min);
    }
    if let Some(max) = criteria.price_max {
        results.retain(|v| v.price <= max);
    }
    if let Some(year) = criteria.year {
        results.retain(|v| v.year >= year);
    }
    if let Some(fuel) = criteria.fuel_type {
        results.retain(|v| v.fuel_type == fuel);
    }
    if let Some(body) = criteria.body_style {
        results.retain(|v| v.body_style == body);
    }
    if let Some(transmission) = criteria.transmission {
        results.retain(|v| v.transmission == transmission);
    }
    if let Some(max_mileage) = criteria.max_mileage {
        results.retain(|v| v.mileage <= max_mileage);
    }

    if let Some(usage) = &criteria.usage {
        apply_usage_hint(&mut results, usage);
    }
    if let Some(budget) = &criteria.budget {
        apply_budget_hint(&mut results, budget);
    }

    SearchResults {
        total_found: results.len(),
        cars: results.iter().map(|v| VehicleSummary::from_vehicle(v)).collect(),
    }
}

/// Classifies a usage hint and applies it. Commuting re-ranks without
/// dropping anything; family and luxury narrow; unrecognized hints are
/// no-ops.
fn apply_usage_hint(results: &mut Vec<&Vehicle>, usage: &str) {
    let usage = usage.to_lowercase();
    if contains_any(&usage, &["commut", "work", "trabajo"]) {
        // Stable sort: efficient vehicles first, relative order preserved
        // within each class.
        results.sort_by_key(|v| !is_efficient(v));
    } else if contains_any(&usage, &["family", "familia"]) {
        results.retain(|v| {
            matches!(
                v.body_style,
                BodyStyle::Suv | BodyStyle::Wagon | BodyStyle::Pickup
            )
        });
    } else if contains_any(&usage, &["luxury", "lujo"]) {
        results.retain(|v| is_luxury(v));
    }
}

/// Classifies a budget hint and applies the matching price filter.
/// Unrecognized hints are no-ops.
fn apply_budget_hint(results: &mut Vec<&Vehicle>, budget: &str) {
    let budget = budget.to_lowercase();
    if contains_any(&budget, &["econom", "cheap", "affordable", "barato"]) {
        results.retain(|v| v.price < ECONOMY_PRICE_CAP);
    } else if contains_any(&budget, &["luxury", "premium", "lujo"]) {
        results.retain(|v| v.price > LUXURY_PRICE_FLOOR);
    } else if contains_any(&budget, &["mid", "medio"]) {
        let (lo, hi) = MID_RANGE_BAND;
        results.retain(|v| v.price >= lo && v.price <= hi);
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// A vehicle ranks as efficient when it is electric/hybrid or its
/// structured combined economy clears the threshold.
fn is_efficient(v: &Vehicle) -> bool {
    matches!(v.fuel_type, FuelType::Electric | FuelType::Hybrid)
        || v.combined_mpg >= EFFICIENT_COMBINED_MPG
}

fn is_luxury(v: &Vehicle) -> bool {
    LUXURY_BRANDS.contains(&v.brand.as_str()) || v.price > LUXURY_PRICE_FLOOR
}

/// Looks up the full record of one vehicle by id, distinguishing
/// "unknown id" from "known but unavailable".
pub fn vehicle_details(catalog: &Catalog, id: &str) -> DetailOutcome {
    match catalog.vehicle(id) {
        None => DetailOutcome::NotFound { id: id.to_string() },
        Some(v) if !v.is_available => DetailOutcome::NotAvailable { id: id.to_string() },
        Some(v) => DetailOutcome::Found(v.clone()),
    }
}
