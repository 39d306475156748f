//! Batch runner for evaluating many parameter sets
//!
//! Items are independent, so batches are spread across the rayon pool.
//! Results come back in input order.

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::params::{InvestmentParameters, LabeledParameters};
use crate::projection::{InvestmentResult, ModelComparison, ReturnCalculator, ReturnModel};

/// Runs one return model over batches of parameters
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new(ReturnModel::CompoundReinvestment);
/// let results = runner.run(&params);
/// let summary = BatchSummary::from_results(&results);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    model: ReturnModel,
    calculator: ReturnCalculator,
}

impl BatchRunner {
    pub fn new(model: ReturnModel) -> Self {
        Self {
            model,
            calculator: ReturnCalculator::new(),
        }
    }

    pub fn model(&self) -> ReturnModel {
        self.model
    }

    /// Validate and evaluate every parameter set; invalid items fail individually
    pub fn run(&self, batch: &[InvestmentParameters]) -> Vec<Result<InvestmentResult>> {
        info!("running {:?} over {} parameter sets", self.model, batch.len());
        batch
            .par_iter()
            .map(|params| {
                let result = self.calculator.calculate(self.model, params);
                if let Err(e) = &result {
                    warn!("rejected parameter set: {}", e);
                }
                result
            })
            .collect()
    }

    /// Evaluate labeled rows, keeping each row's id beside its result
    pub fn run_labeled(&self, batch: &[LabeledParameters]) -> Vec<Result<LabeledResult>> {
        info!("running {:?} over {} labeled rows", self.model, batch.len());
        batch
            .par_iter()
            .map(|row| {
                let result = self.calculator.calculate(self.model, &row.params);
                if let Err(e) = &result {
                    warn!("rejected row {}: {}", row.id, e);
                }
                Ok(LabeledResult {
                    id: row.id,
                    params: row.params,
                    result: result?,
                })
            })
            .collect()
    }

    /// Compound against traditional for every labeled row
    pub fn compare_labeled(&self, batch: &[LabeledParameters]) -> Vec<Result<LabeledComparison>> {
        info!("comparing models over {} labeled rows", batch.len());
        batch
            .par_iter()
            .map(|row| {
                let comparison = self.calculator.compare(&row.params);
                if let Err(e) = &comparison {
                    warn!("rejected row {}: {}", row.id, e);
                }
                Ok(LabeledComparison {
                    id: row.id,
                    params: row.params,
                    comparison: comparison?,
                })
            })
            .collect()
    }

    /// Compound against traditional for every parameter set
    pub fn compare_all(&self, batch: &[InvestmentParameters]) -> Vec<Result<ModelComparison>> {
        info!("comparing models over {} parameter sets", batch.len());
        batch.par_iter().map(|params| self.calculator.compare(params)).collect()
    }
}

/// A result tagged with the id of the row that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledResult {
    pub id: u32,
    pub params: InvestmentParameters,
    pub result: InvestmentResult,
}

/// A model comparison tagged with the id of the row that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledComparison {
    pub id: u32,
    pub params: InvestmentParameters,
    pub comparison: ModelComparison,
}

/// Totals over the successful items of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub evaluated: usize,
    pub rejected: usize,
    pub total_capital: f64,
    pub total_gross_profit: f64,
    pub total_vat_paid: f64,
    pub total_net_profit: f64,
    pub total_to_receive: f64,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<InvestmentResult>]) -> Self {
        let mut summary = Self::default();
        for item in results {
            match item {
                Ok(result) => summary.add(result),
                Err(_) => summary.rejected += 1,
            }
        }
        summary
    }

    pub fn from_labeled(results: &[Result<LabeledResult>]) -> Self {
        let mut summary = Self::default();
        for item in results {
            match item {
                Ok(labeled) => summary.add(&labeled.result),
                Err(_) => summary.rejected += 1,
            }
        }
        summary
    }

    fn add(&mut self, result: &InvestmentResult) {
        self.evaluated += 1;
        self.total_capital += result.total_to_receive - result.net_profit;
        self.total_gross_profit += result.gross_profit;
        self.total_vat_paid += result.vat_paid;
        self.total_net_profit += result.net_profit;
        self.total_to_receive += result.total_to_receive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn batch() -> Vec<InvestmentParameters> {
        vec![
            InvestmentParameters::new(50_000.0, 1.5, 60, 70.0, 0.12).unwrap(),
            InvestmentParameters::new(50_000.0, 1.5, 12, 70.0, 0.12).unwrap(),
            InvestmentParameters::new(50_000.0, 1.5, 60, 70.0, 0.05).unwrap(),
        ]
    }

    #[test]
    fn test_run_preserves_order() {
        let results = BatchRunner::new(ReturnModel::TraditionalFixedInstallment).run(&batch());

        assert_eq!(results.len(), 3);
        assert_abs_diff_eq!(results[0].as_ref().unwrap().gross_profit, 31_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(results[1].as_ref().unwrap().gross_profit, 6_300.0, epsilon = 1e-6);
        assert_abs_diff_eq!(results[2].as_ref().unwrap().vat_paid, 1_575.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_items_fail_individually() {
        let mut items = batch();
        items[1].term_months = 0;

        let results = BatchRunner::new(ReturnModel::CompoundReinvestment).run(&items);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());

        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.evaluated, 2);
        assert_eq!(summary.rejected, 1);
        assert_abs_diff_eq!(summary.total_capital, 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_summary_totals() {
        let results = BatchRunner::new(ReturnModel::TraditionalFixedInstallment).run(&batch());
        let summary = BatchSummary::from_results(&results);

        assert_abs_diff_eq!(summary.total_gross_profit, 31_500.0 + 6_300.0 + 31_500.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_vat_paid, 3_780.0 + 756.0 + 1_575.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            summary.total_to_receive,
            summary.total_capital + summary.total_net_profit,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_compare_all_dominance() {
        let comparisons = BatchRunner::new(ReturnModel::CompoundReinvestment).compare_all(&batch());
        for comparison in comparisons {
            assert!(comparison.unwrap().advantage() > 0.0);
        }
    }

    fn labeled(batch: Vec<InvestmentParameters>) -> Vec<LabeledParameters> {
        batch
            .into_iter()
            .enumerate()
            .map(|(i, params)| LabeledParameters { id: 100 + i as u32, params })
            .collect()
    }

    #[test]
    fn test_run_labeled_keeps_ids() {
        let results = BatchRunner::new(ReturnModel::CompoundReinvestment).run_labeled(&labeled(batch()));
        let ids: Vec<u32> = results.iter().map(|r| r.as_ref().unwrap().id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
        assert_eq!(BatchSummary::from_labeled(&results).evaluated, 3);
    }

    #[test]
    fn test_run_labeled_validates_rows() {
        let mut rows = labeled(batch());
        rows[0].params.vat_rate = 1.5;
        rows[2].params.capital = -10.0;

        let results = BatchRunner::new(ReturnModel::TraditionalFixedInstallment).run_labeled(&rows);
        assert_eq!(results[0].as_ref().unwrap_err().field(), Some("vat_rate"));
        assert_eq!(results[1].as_ref().unwrap().id, 101);
        assert_eq!(results[2].as_ref().unwrap_err().field(), Some("capital"));

        let summary = BatchSummary::from_labeled(&results);
        assert_eq!(summary.evaluated, 1);
        assert_eq!(summary.rejected, 2);
    }

    #[test]
    fn test_compare_labeled() {
        let mut rows = labeled(batch());
        rows[1].params.term_months = 0;

        let results = BatchRunner::new(ReturnModel::CompoundReinvestment).compare_labeled(&rows);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.id, 100);
        assert_abs_diff_eq!(first.comparison.advantage(), 88_343.96 - 77_720.0, epsilon = 0.01);
        assert_eq!(results[1].as_ref().unwrap_err().field(), Some("term_months"));
        assert_eq!(results[2].as_ref().unwrap().id, 102);
    }
}
