//! Validating entry point for return projections

use log::debug;

use super::models::ReturnModel;
use super::result::{InvestmentResult, ModelComparison};
use crate::error::Result;
use crate::params::InvestmentParameters;
use crate::schedule::{self, ScheduleKind, ScheduleRow, ScheduleSummary};

/// Return calculator
///
/// Stateless and `Copy`: share it freely across threads. Every method
/// validates the parameters once before any model arithmetic runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnCalculator;

impl ReturnCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Run `model` over validated parameters
    pub fn calculate(&self, model: ReturnModel, params: &InvestmentParameters) -> Result<InvestmentResult> {
        params.validate()?;
        let result = model.apply(params);
        debug!(
            "{:?}: capital={} rate={} term={} share={} vat={} -> total={:.2}",
            model,
            params.capital,
            params.monthly_interest_rate,
            params.term_months,
            params.investor_share_percent,
            params.vat_rate,
            result.total_to_receive,
        );
        Ok(result)
    }

    pub fn compound(&self, params: &InvestmentParameters) -> Result<InvestmentResult> {
        self.calculate(ReturnModel::CompoundReinvestment, params)
    }

    pub fn traditional(&self, params: &InvestmentParameters) -> Result<InvestmentResult> {
        self.calculate(ReturnModel::TraditionalFixedInstallment, params)
    }

    /// Compound and traditional results for the same parameters
    pub fn compare(&self, params: &InvestmentParameters) -> Result<ModelComparison> {
        params.validate()?;
        Ok(ModelComparison {
            compound: ReturnModel::CompoundReinvestment.apply(params),
            traditional: ReturnModel::TraditionalFixedInstallment.apply(params),
        })
    }

    /// Month-by-month schedule of the given kind, with its summary
    pub fn schedule(
        &self,
        kind: ScheduleKind,
        params: &InvestmentParameters,
    ) -> Result<(Vec<ScheduleRow>, ScheduleSummary)> {
        params.validate()?;
        let rows = schedule::generate(kind, params);
        let summary = schedule::summarize(&rows, params.capital, params.vat_rate, kind);
        debug!("{:?} schedule: {} rows, total={:.2}", kind, rows.len(), summary.total_to_receive);
        Ok((rows, summary))
    }
}
