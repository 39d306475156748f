//! Goal mode: capital required to reach a desired payout
//!
//! Each function inverts one of the schedules in [`crate::schedule`].
//! Shares and rates take the same units as [`InvestmentParameters`].

use crate::error::{ProjectionError, Result};
use crate::params::InvestmentParameters;

/// Capital whose monthly investor payment (share of interest plus VAT) equals `desired`
pub fn required_capital_for_monthly(
    desired: f64,
    monthly_interest_rate: f64,
    investor_share_percent: f64,
    vat_rate: f64,
) -> Result<f64> {
    let params = check(desired, monthly_interest_rate, 1, investor_share_percent, vat_rate)?;
    let per_unit = params.monthly_rate() * (1.0 + vat_rate) * params.investor_share();
    if per_unit == 0.0 {
        return Err(ProjectionError::Unreachable(
            "a zero rate or zero investor share pays nothing monthly".to_string(),
        ));
    }
    Ok(desired / per_unit)
}

/// Capital that grows to `desired` under the compound schedule
pub fn required_capital_for_compound(
    desired: f64,
    monthly_interest_rate: f64,
    term_months: u32,
    investor_share_percent: f64,
    vat_rate: f64,
) -> Result<f64> {
    let params = check(desired, monthly_interest_rate, term_months, investor_share_percent, vat_rate)?;
    let growth_rate = params.monthly_rate() * params.investor_share() * (1.0 + vat_rate);
    Ok(desired / (1.0 + growth_rate).powf(f64::from(term_months)))
}

/// Capital whose final interest-only payment (principal plus one month) equals `desired`.
///
/// With a zero rate or zero share the final payment is the principal alone,
/// so the answer is `desired` itself.
pub fn required_capital_for_interest_only(
    desired: f64,
    monthly_interest_rate: f64,
    investor_share_percent: f64,
    vat_rate: f64,
) -> Result<f64> {
    let params = check(desired, monthly_interest_rate, 1, investor_share_percent, vat_rate)?;
    let final_payment_factor = 1.0 + params.monthly_rate() * (1.0 + vat_rate) * params.investor_share();
    Ok(desired / final_payment_factor)
}

fn check(
    desired: f64,
    monthly_interest_rate: f64,
    term_months: u32,
    investor_share_percent: f64,
    vat_rate: f64,
) -> Result<InvestmentParameters> {
    if !desired.is_finite() || desired < 0.0 {
        return Err(ProjectionError::invalid(
            "desired",
            format!("must be a non-negative amount, got {}", desired),
        ));
    }
    InvestmentParameters::new(desired, monthly_interest_rate, term_months, investor_share_percent, vat_rate)
}
