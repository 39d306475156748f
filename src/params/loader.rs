//! Load batches of investment parameters from CSV

use super::InvestmentParameters;
use crate::error::{ProjectionError, Result};
use csv::Reader;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Raw CSV row matching the batch file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Capital")]
    capital: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "TermMonths")]
    term_months: u32,
    #[serde(rename = "InvestorPercentage")]
    investor_percentage: f64,
    #[serde(rename = "VatRate")]
    vat_rate: f64,
}

impl CsvRow {
    fn into_labeled(self) -> Result<LabeledParameters> {
        let params = InvestmentParameters::new(
            self.capital,
            self.interest_rate,
            self.term_months,
            self.investor_percentage,
            self.vat_rate,
        )?;
        Ok(LabeledParameters { id: self.id, params })
    }
}

/// A parameter set tagged with the identifier from its source row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledParameters {
    pub id: u32,
    pub params: InvestmentParameters,
}

/// Load and validate all parameter sets from a CSV file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledParameters>> {
    let file = File::open(path)?;
    collect_rows(Reader::from_reader(file))
}

/// Load parameter sets from any reader (e.g., string buffer, stdin)
pub fn load_parameters_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LabeledParameters>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LabeledParameters>> {
    let mut rows = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let record = index + 1;
        let row: CsvRow = result?;
        let labeled = row.into_labeled().map_err(|source| ProjectionError::InvalidRow {
            record,
            source: Box::new(source),
        })?;
        rows.push(labeled);
    }

    Ok(rows)
}
