//! Month-by-month financing schedules and their summaries

mod builder;
mod rows;

pub use builder::{
    amortization_schedule, compound_schedule, generate, interest_only_schedule, level_payment,
    summarize,
};
pub use rows::{ScheduleKind, ScheduleRow, ScheduleSummary};
