//! Investment Projection - return engine for investor financing products
//!
//! This library provides:
//! - Compound reinvestment and traditional fixed-installment return models
//! - Boundary validation of investment parameters
//! - Month-by-month financing schedules (amortization, interest-only, compound)
//! - Goal mode: capital required for a desired payout
//! - Parallel batch evaluation

pub mod error;
pub mod params;
pub mod projection;
pub mod schedule;
pub mod goal;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::InvestmentParameters;
pub use projection::{InvestmentResult, ModelComparison, ReturnCalculator, ReturnModel};
pub use schedule::{ScheduleKind, ScheduleRow, ScheduleSummary};
pub use scenario::{BatchRunner, BatchSummary};
