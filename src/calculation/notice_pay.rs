//! Notice pay in lieu calculation.
//!
//! Only owed under indirect termination. The notice period grows with tenure:
//! 30 days plus 3 days for each full year worked.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::tenure::DAYS_PER_MONTH;

/// Base notice period in days.
pub const BASE_NOTICE_DAYS: u32 = 30;

/// Extra notice days per full year of tenure.
pub const NOTICE_DAYS_PER_YEAR: u32 = 3;

/// The result of calculating notice pay in lieu.
#[derive(Debug, Clone)]
pub struct NoticePayResult {
    /// Length of the notice period in days.
    pub notice_days: u32,
    /// Salary per day (`salary / 30`).
    pub daily_rate: Decimal,
    /// Amount owed in lieu of notice.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the notice period length for a number of full years.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::notice_period_days;
///
/// assert_eq!(notice_period_days(0), 30);
/// assert_eq!(notice_period_days(4), 42);
/// ```
pub fn notice_period_days(full_years: u32) -> u32 {
    BASE_NOTICE_DAYS + NOTICE_DAYS_PER_YEAR * full_years
}

/// Calculates notice pay in lieu at the daily rate.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::calculate_notice_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_notice_pay(Decimal::new(3000, 0), 4, 6);
/// assert_eq!(result.notice_days, 42);
/// assert_eq!(result.amount, Decimal::new(4200, 0));
/// ```
pub fn calculate_notice_pay(gross_monthly_salary: Decimal, full_years: u32, step_number: u32) -> NoticePayResult {
    let notice_days = notice_period_days(full_years);
    let daily_rate = gross_monthly_salary / Decimal::from(DAYS_PER_MONTH);
    let amount = gross_monthly_salary * Decimal::from(notice_days) / Decimal::from(DAYS_PER_MONTH);

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_pay_in_lieu".to_string(),
        rule_name: "Notice Pay in Lieu".to_string(),
        legal_ref: "CLT art. 487; Lei 12.506/2011".to_string(),
        input: serde_json::json!({
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "full_years": full_years
        }),
        output: serde_json::json!({
            "notice_days": notice_days,
            "daily_rate": daily_rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} x {} years = {} days at R${}/day = R${}",
            BASE_NOTICE_DAYS,
            NOTICE_DAYS_PER_YEAR,
            full_years,
            notice_days,
            daily_rate.normalize(),
            amount.normalize()
        ),
    };

    NoticePayResult {
        notice_days,
        daily_rate,
        amount,
        audit_step,
    }
}
