//! Attendance reconciliation and salary proration engine.
//!
//! This crate turns sparse clock-in/clock-out records into a full calendar
//! month of classified days, aggregates an attendance rate, and prorates a
//! base salary by that rate. The [`service`] module wires the pure
//! [`calculation`] functions to the [`store`] collaborators, and [`api`]
//! exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
