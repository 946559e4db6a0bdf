//! Metric engine for the gross profit margin calculator.
//!
//! This module turns a [`ValidatedInput`](crate::ValidatedInput) into a
//! [`CalculationResult`](crate::CalculationResult). Everything here is a
//! pure function of its arguments.

pub mod common;
pub mod gross_margin;

pub use gross_margin::compute;
