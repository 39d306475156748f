//! Output records for return projections

use serde::{Deserialize, Serialize};

/// Relative tolerance for the VAT and total identities
pub const IDENTITY_TOLERANCE: f64 = 1e-6;

/// What the investor ends up with under one model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    /// Principal plus any reinvested growth
    pub final_capital: f64,

    /// Investor's profit share before VAT
    pub gross_profit: f64,

    /// VAT withheld on the gross profit share
    pub vat_paid: f64,

    /// Gross profit minus VAT
    pub net_profit: f64,

    /// Capital plus net profit
    pub total_to_receive: f64,
}

impl InvestmentResult {
    /// Build a result from the investor's gross profit share.
    ///
    /// VAT is withheld once on the total, never compounded.
    pub fn from_gross(capital: f64, final_capital: f64, gross_profit: f64, vat_rate: f64) -> Self {
        let vat_paid = gross_profit * vat_rate;
        let net_profit = gross_profit - vat_paid;
        Self {
            final_capital,
            gross_profit,
            vat_paid,
            net_profit,
            total_to_receive: capital + net_profit,
        }
    }

    /// Build a result from separately accumulated gross and VAT totals
    pub(crate) fn from_totals(capital: f64, final_capital: f64, gross_profit: f64, vat_paid: f64) -> Self {
        let net_profit = gross_profit - vat_paid;
        Self {
            final_capital,
            gross_profit,
            vat_paid,
            net_profit,
            total_to_receive: capital + net_profit,
        }
    }

    /// Check `total = capital + net`, `net = gross - vat` and `vat = gross * vat_rate`
    pub fn is_consistent(&self, capital: f64, vat_rate: f64) -> bool {
        close(self.total_to_receive, capital + self.net_profit)
            && close(self.net_profit + self.vat_paid, self.gross_profit)
            && close(self.vat_paid, self.gross_profit * vat_rate)
    }
}

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= IDENTITY_TOLERANCE * scale
}

/// Side-by-side results of the compound and traditional models
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelComparison {
    pub compound: InvestmentResult,
    pub traditional: InvestmentResult,
}

impl ModelComparison {
    /// Extra amount received by reinvesting instead of taking fixed installments
    pub fn advantage(&self) -> f64 {
        self.compound.total_to_receive - self.traditional.total_to_receive
    }
}
