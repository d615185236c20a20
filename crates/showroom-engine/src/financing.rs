// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Financing quotes: plan filtering by credit profile and monthly payment
//! estimation via the standard amortizing-loan formula.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use showroom_catalog::{Catalog, FinancingPlan};

/// Plans available to customers with a limited credit history.
const LIMITED_PROFILE_PLANS: [&str; 2] = ["first-time-buyer", "standard-financing"];
/// Plans withheld from customers with a fair credit profile.
const FAIR_PROFILE_EXCLUDED: [&str; 1] = ["lease-option"];

/// Disclaimer attached to every quote response.
const DISCLAIMER: &str =
    "All rates and terms subject to credit approval. Monthly payments are estimates.";

/// Customer credit profile tiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CreditProfile {
    Excellent,
    Good,
    Fair,
    Limited,
}

/// A financing plan with an optional payment estimate attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingQuote {
    #[serde(flatten)]
    pub plan: FinancingPlan,
    /// Estimated monthly payment in whole currency units. Present only
    /// when the request carried a car price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_payment: Option<i64>,
}

/// Result of a financing query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingQuotes {
    pub financing_options: Vec<FinancingQuote>,
    pub note: String,
}

/// Produces the financing options available to a customer.
///
/// Profile restrictions: `limited` keeps only the allow-listed plans,
/// `fair` drops the lease program, `excellent`/`good` see everything.
/// With a car price, each remaining plan gets an estimated monthly
/// payment for `car_price - down_payment` (down payment defaults to 0).
pub fn financing_quotes(
    catalog: &Catalog,
    car_price: Option<f64>,
    down_payment: Option<f64>,
    credit_profile: Option<CreditProfile>,
) -> FinancingQuotes {
    let plans = catalog.financing_plans.iter().filter(|plan| match credit_profile {
        Some(CreditProfile::Limited) => LIMITED_PROFILE_PLANS.contains(&plan.id.as_str()),
        Some(CreditProfile::Fair) => !FAIR_PROFILE_EXCLUDED.contains(&plan.id.as_str()),
        Some(CreditProfile::Excellent) | Some(CreditProfile::Good) | None => true,
    });

    let financing_options = plans
        .map(|plan| {
            let estimated_monthly_payment = car_price.map(|price| {
                let principal = price - down_payment.unwrap_or(0.0);
                monthly_payment(principal, plan.apr, plan.term_months)
            });
            FinancingQuote {
                plan: plan.clone(),
                estimated_monthly_payment,
            }
        })
        .collect();

    FinancingQuotes {
        financing_options,
        note: DISCLAIMER.to_string(),
    }
}

/// Standard amortizing-loan monthly payment, rounded to the nearest whole
/// currency unit. A zero APR makes the closed-form formula divide by zero,
/// so it falls back to flat principal-over-term.
pub fn monthly_payment(principal: f64, apr: f64, term_months: u32) -> i64 {
    if term_months == 0 {
        return principal.round() as i64;
    }
    let n = term_months as f64;
    if apr == 0.0 {
        return (principal / n).round() as i64;
    }
    let r = apr / 100.0 / 12.0;
    let factor = (1.0 + r).powf(n);
    (principal * r * factor / (factor - 1.0)).round() as i64
}
