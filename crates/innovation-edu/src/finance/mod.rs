//! Financial teaching calculators: discounted cash-flow valuation and
//! the simple planning figures the curriculum walks through.
//!
//! Everything here is pure computation over validated in-memory
//! schedules; malformed input fails before any arithmetic runs.

mod schedule;
mod solver;

pub use schedule::{CashFlow, CashFlowSchedule};
pub use solver::{
    break_even, irr, npv, payback_period, BreakEvenPoint, IrrOptions, IrrResolution,
    DEFAULT_IRR_MAX_ITERATIONS, DEFAULT_IRR_TOLERANCE, IRR_SEARCH_UPPER_BOUND,
};

/// Failure raised by the financial calculators.
///
/// The first two variants are validation failures (malformed input,
/// rejected before computation); the remainder are domain failures
/// (well-formed input on which the requested operation is undefined).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinanceError {
    #[error("cash-flow schedule must contain at least one entry")]
    EmptySchedule,
    #[error("cash-flow amount for period {period} is not a finite number")]
    NonFiniteAmount { period: u32 },
    #[error("{field} must be a finite number")]
    NonFiniteInput { field: &'static str },
    #[error("discount rate {rate} is undefined for NPV (must be greater than -1)")]
    RateOutOfDomain { rate: f64 },
    #[error("unit price {unit_price} does not exceed unit variable cost {unit_variable_cost}")]
    NonPositiveMargin {
        unit_price: f64,
        unit_variable_cost: f64,
    },
}
