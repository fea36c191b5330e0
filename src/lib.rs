//! PV Sales Calculator - Financial comparison engine for photovoltaic installations
//!
//! This library provides:
//! - A validated quote request model with boundary range checks
//! - A pure calculation engine producing a 25-year net-cost projection
//! - Installer offer catalog loading and offer-to-request conversion

pub mod catalog;
pub mod engine;
pub mod quote;

// Re-export commonly used types
pub use catalog::{Catalog, HouseholdProfile, Offer};
pub use engine::{calculate, CalcResponse, CashflowYear, FinancingMode};
pub use quote::{CalcRequest, ValidationError};
