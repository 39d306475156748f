//! Return calculator: compound and traditional investor return models

mod state;
mod engine;
mod models;
mod result;

pub use state::CompoundingState;
pub use engine::ReturnCalculator;
pub use models::{
    compound_net_reinvestment, compound_reinvestment, effective_monthly_rate,
    traditional_fixed_installment, ReturnModel,
};
pub use result::{InvestmentResult, ModelComparison, IDENTITY_TOLERANCE};
