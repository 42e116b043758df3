//! Settlement Comparator
//!
//! This crate estimates what an employee receives when leaving a job under two
//! scenarios, voluntary resignation and indirect termination (employer fault),
//! and quantifies the difference between them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod telemetry;
