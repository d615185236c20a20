// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Financing plan definitions.

use serde::{Deserialize, Serialize};

/// A financing or leasing plan offered by the dealership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingPlan {
    /// Stable plan identifier, e.g. "standard-financing".
    pub id: String,
    pub name: String,
    /// Annual percentage rate. A rate of exactly zero is legal and the
    /// payment estimator must special-case it.
    pub apr: f64,
    pub term_months: u32,
    pub description: String,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financing_plan_serializes_camel_case() {
        let plan = FinancingPlan {
            id: "lease-option".into(),
            name: "Lease".into(),
            apr: 2.9,
            term_months: 36,
            description: "d".into(),
            requirements: vec![],
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["termMonths"], 36);
        assert_eq!(json["apr"], 2.9);
    }
}
