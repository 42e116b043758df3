//! Accrued salary calculation.
//!
//! The engine always assumes exactly one unpaid month is owed. It does not
//! prorate from a specific payroll cutoff day.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of calculating accrued salary, including the audit step.
#[derive(Debug, Clone)]
pub struct AccruedSalaryResult {
    /// The salary owed for the last month worked.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the salary balance owed at exit: one full monthly salary.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::calculate_accrued_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_accrued_salary(Decimal::new(3000, 0), 3);
/// assert_eq!(result.amount, Decimal::new(3000, 0));
/// ```
pub fn calculate_accrued_salary(gross_monthly_salary: Decimal, step_number: u32) -> AccruedSalaryResult {
    let amount = gross_monthly_salary;

    let audit_step = AuditStep {
        step_number,
        rule_id: "accrued_salary".to_string(),
        rule_name: "Accrued Salary".to_string(),
        legal_ref: "CLT art. 477".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "One full month owed: R${}",
            amount.normalize()
        ),
    };

    AccruedSalaryResult { amount, audit_step }
}
