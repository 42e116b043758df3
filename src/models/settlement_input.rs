//! Settlement input model and related types.
//!
//! This module defines the [`SettlementInput`] value object and the
//! [`ReasonCode`] enum describing why the employee is leaving.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The situation the employee reports as the context for leaving.
///
/// The reason is informational. It is carried through to exported documents
/// and share messages but never changes the calculated amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Moral harassment or humiliation by the employer.
    Harassment,
    /// Repeated late payment of wages.
    WageDelay,
    /// Employer not depositing into the severance fund.
    FundNonPayment,
    /// The employee simply wants to leave.
    VoluntaryExit,
}

impl ReasonCode {
    /// All reason codes, in display order.
    pub const ALL: [ReasonCode; 4] = [
        ReasonCode::Harassment,
        ReasonCode::WageDelay,
        ReasonCode::FundNonPayment,
        ReasonCode::VoluntaryExit,
    ];

    /// Returns the snake_case tag used on the wire.
    pub fn tag(self) -> &'static str {
        match self {
            ReasonCode::Harassment => "harassment",
            ReasonCode::WageDelay => "wage_delay",
            ReasonCode::FundNonPayment => "fund_non_payment",
            ReasonCode::VoluntaryExit => "voluntary_exit",
        }
    }

    /// Returns the human-readable label shown to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_comparator::models::ReasonCode;
    ///
    /// assert_eq!(ReasonCode::WageDelay.label(), "Atraso Reiterado de Salário");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            ReasonCode::Harassment => "Assédio Moral ou Humilhação",
            ReasonCode::WageDelay => "Atraso Reiterado de Salário",
            ReasonCode::FundNonPayment => "Não Recolhimento de FGTS",
            ReasonCode::VoluntaryExit => "Desejo de Desligamento Voluntário",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReasonCode {
    type Err = EngineError;

    /// Parses either the wire tag or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ReasonCode::ALL
            .into_iter()
            .find(|code| {
                code.tag().eq_ignore_ascii_case(trimmed) || code.label() == trimmed
            })
            .ok_or_else(|| EngineError::InvalidReason {
                value: trimmed.to_string(),
            })
    }
}

/// The facts a settlement comparison is computed from.
///
/// Values are constructed fresh for every comparison and never mutated.
///
/// # Example
///
/// ```
/// use settlement_comparator::models::{ReasonCode, SettlementInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     gross_monthly_salary: Decimal::new(300000, 2),
///     severance_fund_balance: Decimal::new(1500000, 2),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     reason: ReasonCode::WageDelay,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// Gross monthly salary.
    pub gross_monthly_salary: Decimal,
    /// Accumulated balance of the employer-funded severance fund.
    pub severance_fund_balance: Decimal,
    /// The first day of employment.
    pub hire_date: NaiveDate,
    /// The (planned) last day of employment.
    pub exit_date: NaiveDate,
    /// The reported context for leaving.
    pub reason: ReasonCode,
}

/// The largest salary or fund balance accepted (one quadrillion).
///
/// Amounts up to this ceiling keep every rule's intermediate products well
/// inside `Decimal`'s range for any representable tenure.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

impl SettlementInput {
    /// Checks the input shape.
    ///
    /// Amounts must be between zero and [`max_amount`] and the exit date must
    /// not precede the hire date. The comparison still produces a defined
    /// result for dates that fail this check; callers are expected to reject
    /// it first.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("gross_monthly_salary", self.gross_monthly_salary)?;
        check_amount("severance_fund_balance", self.severance_fund_balance)?;

        if self.exit_date < self.hire_date {
            return Err(EngineError::InvalidDateRange {
                hire_date: self.hire_date,
                exit_date: self.exit_date,
            });
        }

        Ok(())
    }
}

fn check_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: format!("must not be negative (got {})", amount),
        });
    }
    if amount > max_amount() {
        return Err(EngineError::InvalidAmount {
            field: field.to_string(),
            message: format!("must not exceed {} (got {})", max_amount(), amount),
        });
    }
    Ok(())
}
