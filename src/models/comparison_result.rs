//! Comparison result models for the Settlement Comparator.
//!
//! This module contains the [`ComparisonResult`] type and the structures around
//! it: the per-scenario [`SettlementBreakdown`], the audit trace, and the
//! [`ComparisonReport`] envelope returned by the service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SettlementInput;

/// One of the two termination scenarios being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// The employee resigns voluntarily.
    Resignation,
    /// The employee terminates because of employer fault.
    IndirectTermination,
}

impl Scenario {
    /// Returns the human-readable title of the scenario.
    pub fn title(self) -> &'static str {
        match self {
            Scenario::Resignation => "Pedido de Demissão",
            Scenario::IndirectTermination => "Rescisão Indireta",
        }
    }
}

/// A line item of a settlement breakdown.
///
/// # Example
///
/// ```
/// use settlement_comparator::models::SettlementComponent;
///
/// assert_eq!(SettlementComponent::FundExitPenalty.label(), "Multa 40% FGTS");
/// assert!(!SettlementComponent::FundExitPenalty.is_base());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementComponent {
    /// Salary owed for the last month worked.
    AccruedSalary,
    /// Proportional year-end (13th salary) bonus.
    ProportionalThirteenthPay,
    /// Vacation entitlement including the one-third bonus.
    VacationAccrual,
    /// Payment in lieu of working out the notice period.
    NoticePayInLieu,
    /// 40% penalty on the severance fund balance.
    FundExitPenalty,
    /// Release of the severance fund balance.
    FundWithdrawal,
}

impl SettlementComponent {
    /// All components, in breakdown order.
    pub const ALL: [SettlementComponent; 6] = [
        SettlementComponent::AccruedSalary,
        SettlementComponent::ProportionalThirteenthPay,
        SettlementComponent::VacationAccrual,
        SettlementComponent::NoticePayInLieu,
        SettlementComponent::FundExitPenalty,
        SettlementComponent::FundWithdrawal,
    ];

    /// Returns the display label for this component.
    pub fn label(self) -> &'static str {
        match self {
            SettlementComponent::AccruedSalary => "Saldo de Salário",
            SettlementComponent::ProportionalThirteenthPay => "13º Proporcional",
            SettlementComponent::VacationAccrual => "Férias + 1/3 Constitucional",
            SettlementComponent::NoticePayInLieu => "Aviso Prévio Indenizado",
            SettlementComponent::FundExitPenalty => "Multa 40% FGTS",
            SettlementComponent::FundWithdrawal => "Saque FGTS",
        }
    }

    /// Returns true for the components owed under both scenarios.
    pub fn is_base(self) -> bool {
        matches!(
            self,
            SettlementComponent::AccruedSalary
                | SettlementComponent::ProportionalThirteenthPay
                | SettlementComponent::VacationAccrual
        )
    }
}

/// The itemized amounts owed under one scenario.
///
/// `total` is always the exact sum of the six components. Build values with
/// [`SettlementBreakdown::from_components`] to keep that true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    /// Salary owed for the last month worked.
    pub accrued_salary: Decimal,
    /// Proportional year-end bonus.
    pub proportional_thirteenth_pay: Decimal,
    /// Vacation accrual including the one-third bonus.
    pub vacation_accrual: Decimal,
    /// Notice pay in lieu (zero under resignation).
    pub notice_pay_in_lieu: Decimal,
    /// Severance fund exit penalty (zero under resignation).
    pub fund_exit_penalty: Decimal,
    /// Severance fund withdrawal (zero under resignation).
    pub fund_withdrawal: Decimal,
    /// Sum of the six components above.
    pub total: Decimal,
}

impl SettlementBreakdown {
    /// Builds a breakdown from its components, computing the total.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_comparator::models::SettlementBreakdown;
    /// use rust_decimal::Decimal;
    ///
    /// let breakdown = SettlementBreakdown::from_components(
    ///     Decimal::new(3000, 0),
    ///     Decimal::new(250, 0),
    ///     Decimal::new(4000, 0),
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    /// );
    /// assert_eq!(breakdown.total, Decimal::new(7250, 0));
    /// ```
    pub fn from_components(
        accrued_salary: Decimal,
        proportional_thirteenth_pay: Decimal,
        vacation_accrual: Decimal,
        notice_pay_in_lieu: Decimal,
        fund_exit_penalty: Decimal,
        fund_withdrawal: Decimal,
    ) -> Self {
        let total = accrued_salary
            + proportional_thirteenth_pay
            + vacation_accrual
            + notice_pay_in_lieu
            + fund_exit_penalty
            + fund_withdrawal;

        Self {
            accrued_salary,
            proportional_thirteenth_pay,
            vacation_accrual,
            notice_pay_in_lieu,
            fund_exit_penalty,
            fund_withdrawal,
            total,
        }
    }

    /// Returns the amount for a single component.
    pub fn amount(&self, component: SettlementComponent) -> Decimal {
        match component {
            SettlementComponent::AccruedSalary => self.accrued_salary,
            SettlementComponent::ProportionalThirteenthPay => self.proportional_thirteenth_pay,
            SettlementComponent::VacationAccrual => self.vacation_accrual,
            SettlementComponent::NoticePayInLieu => self.notice_pay_in_lieu,
            SettlementComponent::FundExitPenalty => self.fund_exit_penalty,
            SettlementComponent::FundWithdrawal => self.fund_withdrawal,
        }
    }

    /// Returns every component with its amount, in breakdown order.
    pub fn lines(&self) -> impl Iterator<Item = (SettlementComponent, Decimal)> + '_ {
        SettlementComponent::ALL
            .into_iter()
            .map(move |component| (component, self.amount(component)))
    }
}

/// Both scenario breakdowns and the difference between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Amounts owed if the employee resigns.
    pub resignation: SettlementBreakdown,
    /// Amounts owed under indirect termination.
    pub indirect_termination: SettlementBreakdown,
    /// `indirect_termination.total - resignation.total`.
    pub difference: Decimal,
}

impl ComparisonResult {
    /// Builds a result from the two breakdowns, computing the difference.
    pub fn new(resignation: SettlementBreakdown, indirect_termination: SettlementBreakdown) -> Self {
        Self {
            resignation,
            indirect_termination,
            difference: indirect_termination.total - resignation.total,
        }
    }

    /// Returns the breakdown for a scenario.
    pub fn scenario(&self, scenario: Scenario) -> &SettlementBreakdown {
        match scenario {
            Scenario::Resignation => &self.resignation,
            Scenario::IndirectTermination => &self.indirect_termination,
        }
    }
}

/// Represents a single step in the comparison audit trail.
///
/// Each step records a rule that was applied, including its inputs,
/// outputs, and the reasoning behind the figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number (1-indexed).
    pub step_number: u32,
    /// Unique identifier for the rule applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The legal provision the rule is based on.
    pub legal_ref: String,
    /// The input values for this step (as JSON).
    pub input: serde_json::Value,
    /// The output values from this step (as JSON).
    pub output: serde_json::Value,
    /// Explanation of how the figure was reached.
    pub reasoning: String,
}

/// The complete audit trail for a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope returned by the service for one comparison.
///
/// Unlike [`ComparisonResult`], a report carries an identifier and a
/// timestamp, so two reports for the same input differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Unique identifier for this comparison.
    pub calculation_id: Uuid,
    /// When the comparison was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the comparison.
    pub engine_version: String,
    /// The facts the comparison was computed from.
    pub input: SettlementInput,
    /// The comparison itself.
    pub result: ComparisonResult,
    /// Audit trail of every rule applied.
    pub audit_trace: AuditTrace,
}
