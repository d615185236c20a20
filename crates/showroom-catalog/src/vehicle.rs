// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vehicle entity and its attribute enums.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Fuel or power source of a vehicle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

/// Body style of a vehicle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BodyStyle {
    Sedan,
    Suv,
    Hatchback,
    Coupe,
    Wagon,
    Pickup,
}

/// Transmission type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// A vehicle in the dealership inventory.
///
/// Loaded once at process start and immutable thereafter. `fuel_economy`
/// is a display string; ranking decisions use the structured
/// `combined_mpg` value instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Stable unique identifier, e.g. "bmw-x5-2024-001".
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    /// Price in whole currency units.
    pub price: u32,
    pub color: String,
    pub mileage: u32,
    pub fuel_type: FuelType,
    pub body_style: BodyStyle,
    pub transmission: Transmission,
    /// Engine descriptor, e.g. "3.0L I6 Turbo".
    pub engine_size: String,
    /// Free-text economy descriptor shown to customers, e.g. "28 city / 39 highway mpg".
    pub fuel_economy: String,
    /// Combined fuel economy in mpg (MPGe for electric vehicles).
    pub combined_mpg: u16,
    /// Ordered feature list; list views surface only the first few.
    pub features: Vec<String>,
    pub description: String,
    pub is_available: bool,
    /// Lot location tag, e.g. "Main Lot B-5".
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn fuel_type_round_trips() {
        for ft in [
            FuelType::Gasoline,
            FuelType::Diesel,
            FuelType::Hybrid,
            FuelType::Electric,
        ] {
            assert_eq!(FuelType::from_str(&ft.to_string()).unwrap(), ft);
        }
    }

    #[test]
    fn body_style_serializes_lowercase() {
        let json = serde_json::to_string(&BodyStyle::Pickup).unwrap();
        assert_eq!(json, "\"pickup\"");
        let parsed: BodyStyle = serde_json::from_str("\"suv\"").unwrap();
        assert_eq!(parsed, BodyStyle::Suv);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        assert!(serde_json::from_str::<Transmission>("\"cvt\"").is_err());
        assert!(FuelType::from_str("steam").is_err());
    }
}
