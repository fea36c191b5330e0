//! Quote request model and boundary validation

pub mod data;
pub mod validate;

pub use data::CalcRequest;
pub use validate::ValidationError;
