//! Pricing
//!
//! Monetary arithmetic for configurator quotes and cart totals.
//! All computation happens in `Decimal`; `f64` only at the model boundary.

pub mod money;

pub use money::{format_brl, to_decimal, to_f64};
