//! Vacation accrual calculation.
//!
//! This module computes the vacation entitlement owed at exit, including the
//! one-third constitutional bonus.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::tenure::{MONTHS_PER_YEAR, Tenure};

/// Divisor of the constitutional vacation bonus (one third).
pub const VACATION_BONUS_DIVISOR: u32 = 3;

/// The result of calculating vacation accrual.
#[derive(Debug, Clone)]
pub struct VacationAccrualResult {
    /// Vacation owed before the one-third bonus.
    pub base_amount: Decimal,
    /// The one-third bonus on top of `base_amount`.
    pub bonus: Decimal,
    /// `base_amount + bonus`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates vacation accrual from tenure.
///
/// With at least one full year of tenure, one complete vacation period (a
/// full salary) is owed plus a proportional fraction for the leftover months.
/// Otherwise only the proportional fraction is owed. The subtotal is then
/// increased by one third.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::{calculate_vacation_accrual, Tenure};
/// use rust_decimal::Decimal;
///
/// let tenure = Tenure { elapsed_days: 1461, full_years: 4, remaining_months: 0 };
/// let result = calculate_vacation_accrual(Decimal::new(3000, 0), &tenure, 5);
/// assert_eq!(result.amount, Decimal::new(4000, 0));
/// ```
pub fn calculate_vacation_accrual(
    gross_monthly_salary: Decimal,
    tenure: &Tenure,
    step_number: u32,
) -> VacationAccrualResult {
    let proportional = gross_monthly_salary * Decimal::from(tenure.remaining_months)
        / Decimal::from(MONTHS_PER_YEAR);
    let has_full_period = tenure.full_years >= 1;

    let base_amount = if has_full_period {
        gross_monthly_salary + proportional
    } else {
        proportional
    };
    let bonus = base_amount / Decimal::from(VACATION_BONUS_DIVISOR);
    let amount = base_amount + bonus;

    let reasoning = if has_full_period {
        format!(
            "(R${} full period + R${} for {} months) + 1/3 = R${}",
            gross_monthly_salary.normalize(),
            proportional.normalize(),
            tenure.remaining_months,
            amount.normalize()
        )
    } else {
        format!(
            "R${} for {} months (no full period) + 1/3 = R${}",
            proportional.normalize(),
            tenure.remaining_months,
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "vacation_accrual".to_string(),
        rule_name: "Vacation Accrual + 1/3".to_string(),
        legal_ref: "CF art. 7º XVII; CLT arts. 146-147".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "full_years": tenure.full_years,
            "remaining_months": tenure.remaining_months
        }),
        output: serde_json::json!({
            "full_period_owed": has_full_period,
            "base_amount": base_amount.normalize().to_string(),
            "bonus": bonus.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    VacationAccrualResult {
        base_amount,
        bonus,
        amount,
        audit_step,
    }
}
