//! Payroll dispatch engine.
//!
//! This crate pays a roster of [`PayRecord`](models::PayRecord)s. Each record
//! names its pay arrangement with a kind tag; an
//! [`EmployeeFactory`](payable::EmployeeFactory) turns the record into a
//! [`Payable`](payable::Payable) employee once, and the payrun loop then works
//! purely through that trait.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod delivery;
pub mod error;
pub mod models;
pub mod payable;
