//! Running balance for period-by-period compounding

/// State of a compounding balance at a point during projection
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundingState {
    /// Periods applied so far
    pub period: u32,

    /// Current balance including reinvested growth
    pub balance: f64,

    /// Investor gross share credited so far
    pub gross_profit: f64,

    /// VAT withheld so far
    pub vat_paid: f64,
}

impl CompoundingState {
    pub fn new(capital: f64) -> Self {
        Self {
            period: 0,
            balance: capital,
            gross_profit: 0.0,
            vat_paid: 0.0,
        }
    }

    /// Apply one period of growth to the whole balance
    pub fn advance_month(&mut self, growth_rate: f64) {
        self.period += 1;
        self.balance *= 1.0 + growth_rate;
    }

    /// Credit one period's investor share, withhold VAT and reinvest the remainder
    pub fn advance_month_net(&mut self, investor_rate: f64, vat_rate: f64) {
        self.period += 1;
        let gross = self.balance * investor_rate;
        let vat = gross * vat_rate;
        self.gross_profit += gross;
        self.vat_paid += vat;
        self.balance += gross - vat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance_month() {
        let mut state = CompoundingState::new(1_000.0);
        state.advance_month(0.01);
        state.advance_month(0.01);

        assert_eq!(state.period, 2);
        assert_relative_eq!(state.balance, 1_020.1, max_relative = 1e-12);
    }

    #[test]
    fn test_advance_month_net_reinvests_after_vat() {
        let mut state = CompoundingState::new(1_000.0);
        state.advance_month_net(0.01, 0.2);

        assert_relative_eq!(state.gross_profit, 10.0, max_relative = 1e-12);
        assert_relative_eq!(state.vat_paid, 2.0, max_relative = 1e-12);
        assert_relative_eq!(state.balance, 1_008.0, max_relative = 1e-12);
    }
}
