//! Return models
//!
//! These functions are arithmetic only. They trust their inputs; validation
//! happens once in [`ReturnCalculator`](super::ReturnCalculator).

use serde::{Deserialize, Serialize};

use super::result::InvestmentResult;
use super::state::CompoundingState;
use crate::params::InvestmentParameters;

/// Named return model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnModel {
    /// Investor's gross share compounds monthly, VAT withheld on the total at the end
    CompoundReinvestment,
    /// Investor's after-VAT share is what gets reinvested each month
    CompoundNetReinvestment,
    /// Flat interest on the original principal, nothing reinvested
    TraditionalFixedInstallment,
}

impl ReturnModel {
    pub const ALL: [ReturnModel; 3] = [
        ReturnModel::CompoundReinvestment,
        ReturnModel::CompoundNetReinvestment,
        ReturnModel::TraditionalFixedInstallment,
    ];

    /// Run the model without validating `params`
    pub fn apply(self, params: &InvestmentParameters) -> InvestmentResult {
        match self {
            ReturnModel::CompoundReinvestment => compound_reinvestment(params),
            ReturnModel::CompoundNetReinvestment => compound_net_reinvestment(params),
            ReturnModel::TraditionalFixedInstallment => traditional_fixed_installment(params),
        }
    }
}

/// Investor's share of the nominal monthly rate, as a fraction
pub fn effective_monthly_rate(params: &InvestmentParameters) -> f64 {
    params.monthly_rate() * params.investor_share()
}

/// Compound reinvestment: the balance grows by the effective monthly rate
/// once per period; VAT is withheld on the accumulated gross profit.
///
/// A zero term applies no periods and returns the capital untouched.
pub fn compound_reinvestment(params: &InvestmentParameters) -> InvestmentResult {
    let rate = effective_monthly_rate(params);
    let mut state = CompoundingState::new(params.capital);

    for _month in 1..=params.term_months {
        state.advance_month(rate);
    }

    let gross_profit = state.balance - params.capital;
    InvestmentResult::from_gross(params.capital, state.balance, gross_profit, params.vat_rate)
}

/// Compound reinvestment of the after-VAT share.
///
/// Each month the investor's gross share is credited, VAT is withheld from it,
/// and only the remainder joins the balance. The final balance is exactly what
/// the investor receives.
pub fn compound_net_reinvestment(params: &InvestmentParameters) -> InvestmentResult {
    let rate = effective_monthly_rate(params);
    let mut state = CompoundingState::new(params.capital);

    for _month in 1..=params.term_months {
        state.advance_month_net(rate, params.vat_rate);
    }

    InvestmentResult::from_totals(params.capital, state.balance, state.gross_profit, state.vat_paid)
}

/// Traditional fixed installments: interest on the original principal only,
/// paid out every month. Totals are linear in the term.
pub fn traditional_fixed_installment(params: &InvestmentParameters) -> InvestmentResult {
    let monthly_interest = params.capital * params.monthly_rate();
    let monthly_investor_share = monthly_interest * params.investor_share();
    let monthly_vat = monthly_investor_share * params.vat_rate;
    let monthly_net = monthly_investor_share - monthly_vat;

    let months = f64::from(params.term_months);
    let gross_profit = monthly_investor_share * months;
    let vat_paid = monthly_vat * months;
    let net_profit = monthly_net * months;

    InvestmentResult {
        final_capital: params.capital,
        gross_profit,
        vat_paid,
        net_profit,
        total_to_receive: params.capital + net_profit,
    }
}
