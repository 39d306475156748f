//! Investment parameter record and boundary validation

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// VAT withheld from a normal taxpayer's profit share
pub const STANDARD_VAT_RATE: f64 = 0.12;

/// VAT withheld under the small-taxpayer regime
pub const SMALL_TAXPAYER_VAT_RATE: f64 = 0.05;

/// House default monthly rate, in percentage points
pub const DEFAULT_MONTHLY_INTEREST_RATE: f64 = 1.5;

pub const DEFAULT_TERM_MONTHS: u32 = 12;

pub const DEFAULT_INVESTOR_SHARE_PERCENT: f64 = 70.0;

/// Inputs to a single return projection
///
/// Rates follow the quoting conventions of the product sheet:
/// `monthly_interest_rate` and `investor_share_percent` are in percentage
/// points (`1.5` means 1.5 %), while `vat_rate` is a fraction (`0.12`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentParameters {
    /// Principal invested
    pub capital: f64,

    /// Nominal monthly rate in percentage points
    #[serde(alias = "interestRate")]
    pub monthly_interest_rate: f64,

    /// Number of monthly periods
    pub term_months: u32,

    /// Investor's share of gross interest, 0-100
    #[serde(alias = "investorPercentage")]
    pub investor_share_percent: f64,

    /// Fraction of the investor's gross share withheld as VAT, 0-1
    pub vat_rate: f64,
}

impl InvestmentParameters {
    /// Smart constructor: builds and validates in one step
    pub fn new(
        capital: f64,
        monthly_interest_rate: f64,
        term_months: u32,
        investor_share_percent: f64,
        vat_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            capital,
            monthly_interest_rate,
            term_months,
            investor_share_percent,
            vat_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Builder seeded with the house defaults
    pub fn builder() -> InvestmentParametersBuilder {
        InvestmentParametersBuilder::default()
    }

    /// Check every field against its documented domain.
    ///
    /// NaN compares false against every bound, so finiteness is checked first.
    pub fn validate(&self) -> Result<()> {
        finite("capital", self.capital)?;
        finite("monthly_interest_rate", self.monthly_interest_rate)?;
        finite("investor_share_percent", self.investor_share_percent)?;
        finite("vat_rate", self.vat_rate)?;

        if self.capital < 0.0 {
            return Err(ProjectionError::invalid(
                "capital",
                format!("must not be negative, got {}", self.capital),
            ));
        }
        if self.monthly_interest_rate < 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_interest_rate",
                format!("must not be negative, got {}", self.monthly_interest_rate),
            ));
        }
        if self.term_months == 0 {
            return Err(ProjectionError::invalid(
                "term_months",
                "must be a positive number of months",
            ));
        }
        if !(0.0..=100.0).contains(&self.investor_share_percent) {
            return Err(ProjectionError::invalid(
                "investor_share_percent",
                format!("must lie in [0, 100], got {}", self.investor_share_percent),
            ));
        }
        if !(0.0..=1.0).contains(&self.vat_rate) {
            return Err(ProjectionError::invalid(
                "vat_rate",
                format!("must lie in [0, 1], got {}", self.vat_rate),
            ));
        }
        Ok(())
    }

    /// Monthly rate as a decimal fraction
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_interest_rate / 100.0
    }

    /// Investor share as a decimal fraction
    pub fn investor_share(&self) -> f64 {
        self.investor_share_percent / 100.0
    }

    pub fn with_term(self, term_months: u32) -> Self {
        Self { term_months, ..self }
    }

    pub fn with_vat_rate(self, vat_rate: f64) -> Self {
        Self { vat_rate, ..self }
    }

    pub fn with_investor_share(self, investor_share_percent: f64) -> Self {
        Self { investor_share_percent, ..self }
    }

    pub fn with_monthly_rate(self, monthly_interest_rate: f64) -> Self {
        Self { monthly_interest_rate, ..self }
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, format!("must be finite, got {}", value)))
    }
}

/// Builder for [`InvestmentParameters`]; `build` validates
#[derive(Debug, Clone)]
pub struct InvestmentParametersBuilder {
    capital: f64,
    monthly_interest_rate: f64,
    term_months: u32,
    investor_share_percent: f64,
    vat_rate: f64,
}

impl Default for InvestmentParametersBuilder {
    fn default() -> Self {
        Self {
            capital: 0.0,
            monthly_interest_rate: DEFAULT_MONTHLY_INTEREST_RATE,
            term_months: DEFAULT_TERM_MONTHS,
            investor_share_percent: DEFAULT_INVESTOR_SHARE_PERCENT,
            vat_rate: STANDARD_VAT_RATE,
        }
    }
}

impl InvestmentParametersBuilder {
    pub fn capital(mut self, capital: f64) -> Self {
        self.capital = capital;
        self
    }

    pub fn monthly_interest_rate(mut self, rate: f64) -> Self {
        self.monthly_interest_rate = rate;
        self
    }

    pub fn term_months(mut self, term_months: u32) -> Self {
        self.term_months = term_months;
        self
    }

    pub fn investor_share_percent(mut self, share: f64) -> Self {
        self.investor_share_percent = share;
        self
    }

    pub fn vat_rate(mut self, vat_rate: f64) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    pub fn build(self) -> Result<InvestmentParameters> {
        InvestmentParameters::new(
            self.capital,
            self.monthly_interest_rate,
            self.term_months,
            self.investor_share_percent,
            self.vat_rate,
        )
    }
}
