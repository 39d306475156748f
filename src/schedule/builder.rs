//! Schedule generation
//!
//! In these schedules VAT is charged on top of the interest the borrower pays,
//! and the investor receives their share of interest plus VAT.

use super::rows::{ScheduleKind, ScheduleRow, ScheduleSummary};
use crate::params::InvestmentParameters;

/// Balances below this are treated as fully repaid
const ZERO_BALANCE_THRESHOLD: f64 = 0.01;

/// Level monthly payment at the VAT-inclusive rate `rate * (1 + vat) / 100`
pub fn level_payment(capital: f64, monthly_interest_rate: f64, term_months: u32, vat_rate: f64) -> f64 {
    if term_months == 0 {
        return 0.0;
    }
    let rate = monthly_interest_rate * (1.0 + vat_rate) / 100.0;
    if rate == 0.0 {
        return capital / f64::from(term_months);
    }
    // Discount form stays finite for long terms and tends to `capital * rate`
    capital * rate / (1.0 - (1.0 + rate).powf(-f64::from(term_months)))
}

/// Dispatch on schedule kind
pub fn generate(kind: ScheduleKind, params: &InvestmentParameters) -> Vec<ScheduleRow> {
    match kind {
        ScheduleKind::Standard => amortization_schedule(params),
        ScheduleKind::InterestOnly => interest_only_schedule(params),
        ScheduleKind::Compound => compound_schedule(params),
    }
}

/// Level-payment amortization on a declining balance
pub fn amortization_schedule(params: &InvestmentParameters) -> Vec<ScheduleRow> {
    let payment = level_payment(
        params.capital,
        params.monthly_interest_rate,
        params.term_months,
        params.vat_rate,
    );
    let mut balance = params.capital;
    let mut rows = Vec::with_capacity(params.term_months as usize);

    for month in 1..=params.term_months {
        let mut row = ScheduleRow::new(month, balance);
        row.interest = balance * params.monthly_rate();
        row.vat = row.interest * params.vat_rate;
        row.interest_plus_vat = row.interest + row.vat;
        row.payment = payment;
        row.investor_payment = row.interest_plus_vat * params.investor_share();
        row.amortization = payment - row.interest_plus_vat;

        // Snap only the reported balance; the carried balance keeps its residual
        balance -= row.amortization;
        row.final_balance = if balance < ZERO_BALANCE_THRESHOLD { 0.0 } else { balance };

        rows.push(row);
    }

    rows
}

/// Flat interest on the principal; principal returned with the last payment
pub fn interest_only_schedule(params: &InvestmentParameters) -> Vec<ScheduleRow> {
    let interest = params.capital * params.monthly_rate();
    let vat = interest * params.vat_rate;
    let investor_payment = (interest + vat) * params.investor_share();

    (1..=params.term_months)
        .map(|month| {
            let mut row = ScheduleRow::new(month, params.capital);
            row.interest = interest;
            row.vat = vat;
            row.interest_plus_vat = interest + vat;
            row.investor_payment = investor_payment;
            if month < params.term_months {
                row.payment = investor_payment;
            } else {
                row.payment = investor_payment + params.capital;
                row.amortization = params.capital;
                row.final_balance = 0.0;
            }
            row
        })
        .collect()
}

/// Investor share of interest plus its VAT is added to the balance each month
pub fn compound_schedule(params: &InvestmentParameters) -> Vec<ScheduleRow> {
    let mut balance = params.capital;
    let mut rows = Vec::with_capacity(params.term_months as usize);

    for month in 1..=params.term_months {
        let mut row = ScheduleRow::new(month, balance);
        row.interest = balance * params.monthly_rate();
        row.vat = row.interest * params.vat_rate;
        row.interest_plus_vat = row.interest + row.vat;
        row.investor_payment = row.interest_plus_vat * params.investor_share();

        let investor_interest = row.interest * params.investor_share();
        row.final_balance = balance + investor_interest * (1.0 + params.vat_rate);

        if month == params.term_months {
            row.payment = row.final_balance;
            row.amortization = balance;
        }

        balance = row.final_balance;
        rows.push(row);
    }

    rows
}

/// Totals for a schedule of the given kind
pub fn summarize(rows: &[ScheduleRow], capital: f64, vat_rate: f64, kind: ScheduleKind) -> ScheduleSummary {
    let total_interest: f64 = rows.iter().map(|r| r.interest_plus_vat).sum();
    let total_vat: f64 = rows.iter().map(|r| r.vat).sum();

    let (net_profit, total_to_receive) = match kind {
        ScheduleKind::Compound => {
            let final_balance = rows.last().map(|r| r.final_balance).unwrap_or(capital);
            (final_balance - capital, final_balance)
        }
        ScheduleKind::InterestOnly => {
            let total_payments: f64 = rows.iter().map(|r| r.payment).sum();
            (total_payments - capital, total_payments)
        }
        ScheduleKind::Standard => {
            // Investor payments include VAT; strip it back out of the total
            let net: f64 = rows.iter().map(|r| r.investor_payment).sum();
            let vat_on_profit = net * vat_rate / (1.0 + vat_rate);
            (net, capital + net - vat_on_profit)
        }
    };

    ScheduleSummary {
        total_interest,
        total_vat,
        net_profit,
        total_to_receive,
        total_compound_taxes: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn base() -> InvestmentParameters {
        InvestmentParameters::new(50_000.0, 1.5, 12, 70.0, 0.12).unwrap()
    }

    #[test]
    fn test_level_payment() {
        assert_abs_diff_eq!(level_payment(50_000.0, 1.5, 12, 0.12), 4_635.55, epsilon = 0.01);
        assert_abs_diff_eq!(level_payment(12_000.0, 0.0, 12, 0.12), 1_000.0, epsilon = 1e-9);
        assert_eq!(level_payment(12_000.0, 1.5, 0, 0.12), 0.0);
    }

    #[test]
    fn test_level_payment_long_terms() {
        for term in [100_000, 3_000_000_000, u32::MAX] {
            let payment = level_payment(1_000.0, 1.5, term, 0.12);
            assert!(payment.is_finite(), "term {}", term);
            assert_abs_diff_eq!(payment, 16.8, epsilon = 1e-9);
        }

        let thirty_years = level_payment(1_000.0, 1.5, 360, 0.12);
        assert!(thirty_years > 16.8 && thirty_years < 17.0);
    }

    #[test]
    fn test_amortization_first_month() {
        let rows = amortization_schedule(&base());
        assert_eq!(rows.len(), 12);

        let first = &rows[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.initial_balance, 50_000.0);
        assert_abs_diff_eq!(first.interest, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.vat, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.interest_plus_vat, 840.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.investor_payment, 588.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.payment, 4_635.55, epsilon = 0.01);
        assert_abs_diff_eq!(first.amortization, 3_795.55, epsilon = 0.01);
    }

    #[test]
    fn test_amortization_repays_principal() {
        let rows = amortization_schedule(&base());
        let total: f64 = rows.iter().map(|r| r.amortization).sum();

        assert_eq!(rows[11].final_balance, 0.0);
        assert!((total - 50_000.0).abs() < 1.0);

        let single = amortization_schedule(&base().with_term(1));
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].final_balance, 0.0);
    }

    #[test]
    fn test_amortization_summary() {
        let rows = amortization_schedule(&base());
        let summary = summarize(&rows, 50_000.0, 0.12, ScheduleKind::Standard);

        assert_abs_diff_eq!(summary.total_interest, 5_626.66, epsilon = 0.01);
        assert_abs_diff_eq!(summary.net_profit, 3_938.66, epsilon = 0.01);
        assert_abs_diff_eq!(summary.total_to_receive, 53_516.66, epsilon = 0.01);
    }

    #[test]
    fn test_small_taxpayer_vat_in_schedule() {
        let rows = amortization_schedule(&base().with_vat_rate(0.05));
        assert_abs_diff_eq!(rows[0].vat, 37.5, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].interest_plus_vat, 787.5, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_principal_schedule() {
        let rows = amortization_schedule(&InvestmentParameters { capital: 0.0, ..base() });
        assert_eq!(rows.len(), 12);
        for row in &rows {
            assert_eq!(row.interest, 0.0);
            assert_eq!(row.vat, 0.0);
            assert_eq!(row.payment, 0.0);
        }
    }

    #[test]
    fn test_interest_only_schedule() {
        let rows = interest_only_schedule(&base());
        assert_eq!(rows.len(), 12);

        for row in &rows[..11] {
            assert_eq!(row.initial_balance, 50_000.0);
            assert_eq!(row.final_balance, 50_000.0);
            assert_eq!(row.amortization, 0.0);
            assert_abs_diff_eq!(row.payment, 588.0, epsilon = 1e-9);
        }

        let last = &rows[11];
        assert_abs_diff_eq!(last.payment, 50_588.0, epsilon = 1e-9);
        assert_eq!(last.amortization, 50_000.0);
        assert_eq!(last.final_balance, 0.0);
    }

    #[test]
    fn test_interest_only_summary() {
        let rows = interest_only_schedule(&base());
        let summary = summarize(&rows, 50_000.0, 0.12, ScheduleKind::InterestOnly);

        assert_abs_diff_eq!(summary.total_interest, 10_080.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.net_profit, 7_056.0, epsilon = 1e-6);
        assert_abs_diff_eq!(summary.total_to_receive, 57_056.0, epsilon = 1e-6);
    }

    #[test]
    fn test_compound_schedule() {
        let rows = compound_schedule(&base());
        assert_eq!(rows.len(), 12);

        assert_eq!(rows[0].initial_balance, 50_000.0);
        assert_abs_diff_eq!(rows[0].interest, 750.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].vat, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0].final_balance, 50_588.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[1].initial_balance, 50_588.0, epsilon = 1e-9);

        let mut balance = 50_000.0;
        for _ in 0..12 {
            let investor_interest = balance * 0.015 * 0.7;
            balance += investor_interest * 1.12;
        }
        assert_abs_diff_eq!(rows[11].final_balance, balance, epsilon = 1e-6);
        assert_abs_diff_eq!(rows[11].payment, balance, epsilon = 1e-6);
    }

    #[test]
    fn test_compound_summary() {
        let rows = compound_schedule(&base());
        let summary = summarize(&rows, 50_000.0, 0.12, ScheduleKind::Compound);

        assert_eq!(summary.total_compound_taxes, 0.0);
        assert_abs_diff_eq!(summary.total_to_receive, rows[11].final_balance, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.total_to_receive, 57_530.75, epsilon = 0.01);
    }

    #[test]
    fn test_full_share_compounds_faster() {
        let full = compound_schedule(&base().with_investor_share(100.0));
        let partial = compound_schedule(&base());
        assert!(full[11].final_balance > partial[11].final_balance);
    }

    #[test]
    fn test_generate_dispatch() {
        for kind in [ScheduleKind::Standard, ScheduleKind::InterestOnly, ScheduleKind::Compound] {
            assert_eq!(generate(kind, &base()).len(), 12);
        }
    }
}
