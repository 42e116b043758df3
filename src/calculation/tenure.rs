//! Tenure decomposition functionality.
//!
//! Tenure is measured with a fixed 365-day year and a fixed 30-day month.
//! This ignores leap years and real month lengths. The comparison is an
//! estimate and its published figures depend on this approximation, so it
//! must not be replaced with calendar-accurate arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Days in a year for tenure purposes.
pub const DAYS_PER_YEAR: i64 = 365;

/// Days in a month for tenure and daily-rate purposes.
pub const DAYS_PER_MONTH: i64 = 30;

/// Months in a year, used for proportional entitlements.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Length of employment split into whole years and leftover months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Calendar days between hire and exit.
    pub elapsed_days: i64,
    /// `floor(elapsed_days / 365)`.
    pub full_years: u32,
    /// `floor((elapsed_days mod 365) / 30)`.
    pub remaining_months: u32,
}

/// The result of decomposing tenure, including the audit step.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// The decomposed tenure.
    pub tenure: Tenure,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Splits the time between hire and exit into full years and leftover months.
///
/// The day count is taken as an absolute value, so reversed dates still
/// produce a defined tenure.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::decompose_tenure;
/// use chrono::NaiveDate;
///
/// let result = decompose_tenure(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     1,
/// );
/// assert_eq!(result.tenure.elapsed_days, 1461);
/// assert_eq!(result.tenure.full_years, 4);
/// assert_eq!(result.tenure.remaining_months, 0);
/// ```
pub fn decompose_tenure(hire_date: NaiveDate, exit_date: NaiveDate, step_number: u32) -> TenureResult {
    let elapsed_days = (exit_date - hire_date).num_days().abs();
    let full_years = (elapsed_days / DAYS_PER_YEAR) as u32;
    let remaining_months = ((elapsed_days % DAYS_PER_YEAR) / DAYS_PER_MONTH) as u32;

    let tenure = Tenure {
        elapsed_days,
        full_years,
        remaining_months,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure".to_string(),
        rule_name: "Tenure Decomposition".to_string(),
        legal_ref: "CLT art. 478".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "exit_date": exit_date.to_string()
        }),
        output: serde_json::json!({
            "elapsed_days": elapsed_days,
            "full_years": full_years,
            "remaining_months": remaining_months
        }),
        reasoning: format!(
            "{} days / {} = {} full years; {} leftover days / {} = {} months",
            elapsed_days,
            DAYS_PER_YEAR,
            full_years,
            elapsed_days % DAYS_PER_YEAR,
            DAYS_PER_MONTH,
            remaining_months
        ),
    };

    TenureResult { tenure, audit_step }
}

/// The result of counting months worked in the exit year.
#[derive(Debug, Clone)]
pub struct ExitYearMonthsResult {
    /// Months worked in the exit calendar year (0 to 12).
    pub months: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts the months worked in the calendar year of the exit date.
///
/// Days since January 1 of the exit year are divided by a 30-day month and
/// rounded up, so any started month counts. The count is capped at 12.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::months_in_exit_year;
/// use chrono::NaiveDate;
///
/// let result = months_in_exit_year(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(), 2);
/// assert_eq!(result.months, 3);
/// ```
pub fn months_in_exit_year(exit_date: NaiveDate, step_number: u32) -> ExitYearMonthsResult {
    let days_since_year_start = i64::from(exit_date.ordinal0());
    let started_months = (days_since_year_start + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH;
    let months = (started_months as u32).min(MONTHS_PER_YEAR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "exit_year_months".to_string(),
        rule_name: "Months Worked in Exit Year".to_string(),
        legal_ref: "Lei 4.090/1962 art. 1º §2º".to_string(),
        input: serde_json::json!({
            "exit_date": exit_date.to_string(),
            "days_since_year_start": days_since_year_start
        }),
        output: serde_json::json!({
            "months": months
        }),
        reasoning: format!(
            "ceil({} days / {}) = {} months (capped at {})",
            days_since_year_start, DAYS_PER_MONTH, months, MONTHS_PER_YEAR
        ),
    };

    ExitYearMonthsResult { months, audit_step }
}
