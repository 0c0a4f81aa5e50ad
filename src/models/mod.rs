//! Core data models for the payroll dispatch engine.
//!
//! This module contains the plain data types that flow into and out of a
//! payrun.

mod pay_notice;
mod pay_record;
mod payrun_result;

pub use pay_notice::PayNotice;
pub use pay_record::{PayKind, PayRecord};
pub use payrun_result::{PayrunResult, PayrunTotals};
