//! Financial Computation Engine
//!
//! This crate computes document line and document totals for invoices, quotes
//! and purchases, and derives payroll concept amounts from a catalog of
//! Colombian income and deduction rules.

#![warn(missing_docs)]

pub mod calculation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
