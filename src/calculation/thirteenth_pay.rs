//! Proportional year-end bonus (13th salary) calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::tenure::MONTHS_PER_YEAR;

/// The result of calculating the proportional year-end bonus.
#[derive(Debug, Clone)]
pub struct ThirteenthPayResult {
    /// The proportional bonus owed.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the year-end bonus owed for months worked in the exit year.
///
/// The bonus is one twelfth of the monthly salary per month worked in the
/// exit calendar year: `salary / 12 * months`. The multiplication is done
/// first so whole-month inputs stay exact.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::calculate_thirteenth_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_thirteenth_pay(Decimal::new(3000, 0), 5, 4);
/// assert_eq!(result.amount, Decimal::new(1250, 0));
/// ```
pub fn calculate_thirteenth_pay(
    gross_monthly_salary: Decimal,
    months_in_exit_year: u32,
    step_number: u32,
) -> ThirteenthPayResult {
    let amount =
        gross_monthly_salary * Decimal::from(months_in_exit_year) / Decimal::from(MONTHS_PER_YEAR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_pay".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        legal_ref: "Lei 4.090/1962 art. 3º".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "months_in_exit_year": months_in_exit_year
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} / {} x {} months = R${}",
            gross_monthly_salary.normalize(),
            MONTHS_PER_YEAR,
            months_in_exit_year,
            amount.normalize()
        ),
    };

    ThirteenthPayResult { amount, audit_step }
}
