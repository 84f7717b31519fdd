use serde::{Deserialize, Serialize};

use super::FinanceError;

/// One signed cash movement. Period 0 is the present; outflows are
/// negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub period: u32,
    pub amount: f64,
}

impl CashFlow {
    pub fn new(period: u32, amount: f64) -> Self {
        Self { period, amount }
    }
}

/// A validated, transient schedule of cash flows.
///
/// Construction rejects empty schedules and non-finite amounts so the
/// solvers never see malformed input. Entries keep their submitted
/// order; periods need not be contiguous or sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CashFlow>", into = "Vec<CashFlow>")]
pub struct CashFlowSchedule {
    entries: Vec<CashFlow>,
}

impl CashFlowSchedule {
    pub fn new(entries: Vec<CashFlow>) -> Result<Self, FinanceError> {
        if entries.is_empty() {
            return Err(FinanceError::EmptySchedule);
        }
        for entry in &entries {
            if !entry.amount.is_finite() {
                return Err(FinanceError::NonFiniteAmount {
                    period: entry.period,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Convenience constructor from `(period, amount)` pairs.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (u32, f64)>,
    ) -> Result<Self, FinanceError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(period, amount)| CashFlow::new(period, amount))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[CashFlow] {
        &self.entries
    }
}

impl From<CashFlowSchedule> for Vec<CashFlow> {
    fn from(schedule: CashFlowSchedule) -> Self {
        schedule.entries
    }
}

impl TryFrom<Vec<CashFlow>> for CashFlowSchedule {
    type Error = FinanceError;

    fn try_from(entries: Vec<CashFlow>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_schedule() {
        assert_eq!(
            CashFlowSchedule::new(Vec::new()),
            Err(FinanceError::EmptySchedule)
        );
    }

    #[test]
    fn rejects_non_finite_amounts() {
        let result = CashFlowSchedule::from_pairs([(0, -1000.0), (1, f64::NAN)]);
        assert_eq!(result, Err(FinanceError::NonFiniteAmount { period: 1 }));
    }

    #[test]
    fn deserialization_runs_the_same_validation() {
        let parsed: Result<CashFlowSchedule, _> = serde_json::from_str("[]");
        assert!(parsed.is_err());

        let schedule: CashFlowSchedule = serde_json::from_str(
            r#"[{ "period": 0, "amount": -1000.0 }, { "period": 1, "amount": 500.0 }]"#,
        )
        .expect("well-formed schedule parses");
        assert_eq!(schedule.entries().len(), 2);
    }
}
