//! Schedule row and summary structures

use serde::{Deserialize, Serialize};

/// Repayment structure of a month-by-month schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleKind {
    /// Level payments of principal plus interest
    Standard,
    /// Interest every month, principal returned in the last month
    InterestOnly,
    /// Investor share reinvested, everything paid at maturity
    Compound,
}

/// A single month of a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    pub month: u32,
    pub initial_balance: f64,

    /// Interest on the initial balance
    pub interest: f64,

    /// VAT charged on top of the interest
    pub vat: f64,
    pub interest_plus_vat: f64,

    /// Total paid this month
    pub payment: f64,

    /// Investor's share of interest plus VAT
    pub investor_payment: f64,

    /// Principal returned this month
    pub amortization: f64,
    pub final_balance: f64,
}

impl ScheduleRow {
    pub fn new(month: u32, initial_balance: f64) -> Self {
        Self {
            month,
            initial_balance,
            interest: 0.0,
            vat: 0.0,
            interest_plus_vat: 0.0,
            payment: 0.0,
            investor_payment: 0.0,
            amortization: 0.0,
            final_balance: initial_balance,
        }
    }
}

/// Totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    /// Sum of interest plus VAT
    pub total_interest: f64,
    pub total_vat: f64,
    pub net_profit: f64,
    pub total_to_receive: f64,

    /// Taxes charged to a compounding investor; VAT is borne by the borrower
    pub total_compound_taxes: f64,
}
