//! Investment parameters, validation and batch loading

mod data;
pub mod loader;

pub use data::{
    InvestmentParameters, InvestmentParametersBuilder, DEFAULT_INVESTOR_SHARE_PERCENT,
    DEFAULT_MONTHLY_INTEREST_RATE, DEFAULT_TERM_MONTHS, SMALL_TAXPAYER_VAT_RATE,
    STANDARD_VAT_RATE,
};
pub use loader::{load_parameters, load_parameters_from_reader, LabeledParameters};
