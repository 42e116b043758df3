//! Core data models for the Settlement Comparator.
//!
//! This module contains all the domain models used throughout the engine.

mod comparison_result;
mod settlement_input;

pub use comparison_result::{
    AuditStep, AuditTrace, ComparisonReport, ComparisonResult, Scenario, SettlementBreakdown,
    SettlementComponent,
};
pub use settlement_input::{ReasonCode, SettlementInput, max_amount};
