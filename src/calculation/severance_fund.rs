//! Severance fund (FGTS) penalty and withdrawal calculation.
//!
//! Under indirect termination the employer pays a 40% penalty on the fund
//! balance and the employee gains access to the full balance. Under
//! resignation neither applies.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns the fund exit penalty rate (40%).
pub fn fund_exit_penalty_rate() -> Decimal {
    Decimal::new(4, 1)
}

/// The result of calculating the fund exit penalty.
#[derive(Debug, Clone)]
pub struct FundExitPenaltyResult {
    /// Penalty amount (40% of the balance).
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The result of calculating the fund withdrawal.
#[derive(Debug, Clone)]
pub struct FundWithdrawalResult {
    /// Amount released to the employee.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the 40% penalty on the severance fund balance.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::calculate_fund_exit_penalty;
/// use rust_decimal::Decimal;
///
/// let result = calculate_fund_exit_penalty(Decimal::new(15000, 0), 7);
/// assert_eq!(result.amount, Decimal::new(6000, 0));
/// ```
pub fn calculate_fund_exit_penalty(severance_fund_balance: Decimal, step_number: u32) -> FundExitPenaltyResult {
    let rate = fund_exit_penalty_rate();
    let amount = severance_fund_balance * rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "fund_exit_penalty".to_string(),
        rule_name: "Severance Fund Exit Penalty".to_string(),
        legal_ref: "Lei 8.036/1990 art. 18 §1º".to_string(),
        input: serde_json::json!({
            "severance_fund_balance": severance_fund_balance.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "R${} x {} = R${}",
            severance_fund_balance.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    FundExitPenaltyResult { amount, audit_step }
}

/// Calculates the severance fund amount released to the employee.
///
/// The full balance becomes available; nothing is deducted.
pub fn calculate_fund_withdrawal(severance_fund_balance: Decimal, step_number: u32) -> FundWithdrawalResult {
    let amount = severance_fund_balance;

    let audit_step = AuditStep {
        step_number,
        rule_id: "fund_withdrawal".to_string(),
        rule_name: "Severance Fund Withdrawal".to_string(),
        legal_ref: "Lei 8.036/1990 art. 20 I".to_string(),
        input: serde_json::json!({
            "severance_fund_balance": severance_fund_balance.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!("Full balance released: R${}", amount.normalize()),
    };

    FundWithdrawalResult { amount, audit_step }
}
