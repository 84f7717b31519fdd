use serde::Serialize;

use super::schedule::CashFlowSchedule;
use super::FinanceError;

/// Upper end of the IRR search bracket (500% per period). Cash flows
/// whose true IRR lies above this are reported as `NoSolution`; a
/// documented limitation of the fixed bracket, not a defect.
pub const IRR_SEARCH_UPPER_BOUND: f64 = 5.0;

/// Absolute NPV-unit convergence threshold. Suits the small
/// illustrative figures the curriculum uses; callers working in large
/// currency units should widen it.
pub const DEFAULT_IRR_TOLERANCE: f64 = 1e-4;

pub const DEFAULT_IRR_MAX_ITERATIONS: u32 = 1000;

/// Net present value of `schedule` at the given discount rate.
///
/// Period-0 entries are undiscounted, so the initial investment is
/// supplied as a negative amount at period 0. Rates at or below -1
/// are undefined and rejected.
pub fn npv(schedule: &CashFlowSchedule, rate: f64) -> Result<f64, FinanceError> {
    if !rate.is_finite() || rate <= -1.0 {
        return Err(FinanceError::RateOutOfDomain { rate });
    }

    Ok(schedule
        .entries()
        .iter()
        .map(|flow| flow.amount / (1.0 + rate).powf(f64::from(flow.period)))
        .sum())
}

/// Tuning knobs for the IRR bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrOptions {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for IrrOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_IRR_TOLERANCE,
            max_iterations: DEFAULT_IRR_MAX_ITERATIONS,
        }
    }
}

/// Outcome of an IRR search. `NoSolution` is a defined business result
/// for cash-flow shapes without a detectable root, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IrrResolution {
    /// The bisection drove |NPV| under the tolerance.
    Converged { rate: f64 },
    /// Iterations ran out first; `rate` is the best midpoint found and
    /// `residual` the |NPV| remaining there.
    Approximate { rate: f64, residual: f64 },
    /// No sign change between rates 0 and [`IRR_SEARCH_UPPER_BOUND`].
    NoSolution,
}

/// Internal rate of return of `schedule` via bisection over
/// `[0, IRR_SEARCH_UPPER_BOUND]`.
pub fn irr(
    schedule: &CashFlowSchedule,
    options: IrrOptions,
) -> Result<IrrResolution, FinanceError> {
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(FinanceError::NonFiniteInput { field: "tolerance" });
    }

    let low_npv = npv(schedule, 0.0)?;
    if low_npv.abs() < options.tolerance {
        return Ok(IrrResolution::Converged { rate: 0.0 });
    }
    let high_npv = npv(schedule, IRR_SEARCH_UPPER_BOUND)?;
    if high_npv.abs() < options.tolerance {
        return Ok(IrrResolution::Converged {
            rate: IRR_SEARCH_UPPER_BOUND,
        });
    }
    if low_npv * high_npv > 0.0 {
        return Ok(IrrResolution::NoSolution);
    }

    let low_is_negative = low_npv < 0.0;
    let mut low = 0.0_f64;
    let mut high = IRR_SEARCH_UPPER_BOUND;
    let mut best_rate = low;
    let mut best_residual = low_npv.abs();

    for _ in 0..options.max_iterations {
        let mid = (low + high) / 2.0;
        let mid_npv = npv(schedule, mid)?;

        if mid_npv.abs() < best_residual {
            best_rate = mid;
            best_residual = mid_npv.abs();
        }
        if mid_npv.abs() < options.tolerance {
            return Ok(IrrResolution::Converged { rate: mid });
        }

        // Keep the half that still brackets the sign change, judged
        // against the sign at the original low end.
        if (mid_npv < 0.0) == low_is_negative {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok(IrrResolution::Approximate {
        rate: best_rate,
        residual: best_residual,
    })
}

/// Units and revenue at which contribution margin covers fixed costs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEvenPoint {
    pub units: f64,
    pub revenue: f64,
}

/// Break-even volume for a fixed cost base and per-unit economics.
pub fn break_even(
    fixed_costs: f64,
    unit_price: f64,
    unit_variable_cost: f64,
) -> Result<BreakEvenPoint, FinanceError> {
    for (field, value) in [
        ("fixed_costs", fixed_costs),
        ("unit_price", unit_price),
        ("unit_variable_cost", unit_variable_cost),
    ] {
        if !value.is_finite() {
            return Err(FinanceError::NonFiniteInput { field });
        }
    }

    let margin = unit_price - unit_variable_cost;
    if margin <= 0.0 {
        return Err(FinanceError::NonPositiveMargin {
            unit_price,
            unit_variable_cost,
        });
    }

    let units = fixed_costs / margin;
    Ok(BreakEvenPoint {
        units,
        revenue: units * unit_price,
    })
}

/// First period at which the cumulative cash flow turns non-negative,
/// or `None` when the schedule never recovers its outflows.
pub fn payback_period(schedule: &CashFlowSchedule) -> Option<u32> {
    let mut entries: Vec<_> = schedule.entries().to_vec();
    entries.sort_by_key(|flow| flow.period);

    let mut cumulative = 0.0_f64;
    let mut index = 0;
    while index < entries.len() {
        let period = entries[index].period;
        // Sum every entry sharing this period before judging recovery.
        while index < entries.len() && entries[index].period == period {
            cumulative += entries[index].amount;
            index += 1;
        }
        if cumulative >= 0.0 {
            return Some(period);
        }
    }
    None
}
