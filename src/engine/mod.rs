//! Calculation engine: pure transformation of a quote request into a
//! 25-year net-cost projection

pub mod calc;
pub mod cashflows;
pub mod financing;

pub use calc::{calculate, current_annual_spend, self_consumption_split};
pub use cashflows::{CalcResponse, CashflowYear};
pub use financing::FinancingMode;

/// Length of the cash-flow projection in years
pub const PROJECTION_YEARS: u32 = 25;
