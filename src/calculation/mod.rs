//! Calculation logic for the Settlement Comparator.
//!
//! This module contains the rules that turn a settlement input into the two
//! scenario breakdowns: tenure decomposition, months worked in the exit year,
//! accrued salary, proportional 13th salary, vacation accrual with the
//! one-third bonus, notice pay in lieu, and the severance fund penalty and
//! withdrawal. [`compare_scenarios`] composes them.

mod accrued_salary;
mod comparison;
mod notice_pay;
mod severance_fund;
mod tenure;
mod thirteenth_pay;
mod vacation;

pub use accrued_salary::{AccruedSalaryResult, calculate_accrued_salary};
pub use comparison::{AuditedComparison, compare_scenarios, compare_scenarios_audited};
pub use notice_pay::{
    BASE_NOTICE_DAYS, NOTICE_DAYS_PER_YEAR, NoticePayResult, calculate_notice_pay,
    notice_period_days,
};
pub use severance_fund::{
    FundExitPenaltyResult, FundWithdrawalResult, calculate_fund_exit_penalty,
    calculate_fund_withdrawal, fund_exit_penalty_rate,
};
pub use tenure::{
    DAYS_PER_MONTH, DAYS_PER_YEAR, ExitYearMonthsResult, MONTHS_PER_YEAR, Tenure, TenureResult,
    decompose_tenure, months_in_exit_year,
};
pub use thirteenth_pay::{ThirteenthPayResult, calculate_thirteenth_pay};
pub use vacation::{VACATION_BONUS_DIVISOR, VacationAccrualResult, calculate_vacation_accrual};
