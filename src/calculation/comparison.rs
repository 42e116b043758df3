//! Scenario comparison.
//!
//! This module composes the individual rules into the two scenario
//! breakdowns. Everything here is a pure function of the [`SettlementInput`]:
//! no clock, no randomness, no shared state. Calling it twice with the same
//! input yields identical results.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ComparisonResult, SettlementBreakdown, SettlementInput};

use super::accrued_salary::calculate_accrued_salary;
use super::notice_pay::calculate_notice_pay;
use super::severance_fund::{calculate_fund_exit_penalty, calculate_fund_withdrawal};
use super::tenure::{Tenure, decompose_tenure, months_in_exit_year};
use super::thirteenth_pay::calculate_thirteenth_pay;
use super::vacation::calculate_vacation_accrual;

/// A comparison result together with the audit steps that produced it.
#[derive(Debug, Clone)]
pub struct AuditedComparison {
    /// The decomposed tenure used by the rules.
    pub tenure: Tenure,
    /// Months worked in the exit calendar year.
    pub months_in_exit_year: u32,
    /// The two breakdowns and their difference.
    pub result: ComparisonResult,
    /// Every rule applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Compares resignation against indirect termination.
///
/// Never fails. Input that would be rejected by
/// [`SettlementInput::validate`] still yields a defined, if meaningless,
/// result.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::compare_scenarios;
/// use settlement_comparator::models::{ReasonCode, SettlementInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     gross_monthly_salary: Decimal::new(3000, 0),
///     severance_fund_balance: Decimal::new(15000, 0),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     reason: ReasonCode::Harassment,
/// };
///
/// let result = compare_scenarios(&input);
/// assert_eq!(result.resignation.total, Decimal::new(7000, 0));
/// assert_eq!(result.indirect_termination.total, Decimal::new(32200, 0));
/// assert_eq!(result.difference, Decimal::new(25200, 0));
/// ```
pub fn compare_scenarios(input: &SettlementInput) -> ComparisonResult {
    compare_scenarios_audited(input).result
}

/// Compares both scenarios and records an audit step for every rule.
///
/// Steps are numbered from 1 in the order the rules run: tenure, exit-year
/// months, the three shared figures, the three indirect-termination figures,
/// and a final summary step.
pub fn compare_scenarios_audited(input: &SettlementInput) -> AuditedComparison {
    let mut audit_steps = Vec::with_capacity(9);
    let mut step_number: u32 = 1;
    let salary = input.gross_monthly_salary;
    let fund = input.severance_fund_balance;

    let tenure_result = decompose_tenure(input.hire_date, input.exit_date, step_number);
    let tenure = tenure_result.tenure;
    audit_steps.push(tenure_result.audit_step);
    step_number += 1;

    let exit_year_result = months_in_exit_year(input.exit_date, step_number);
    let exit_year_months = exit_year_result.months;
    audit_steps.push(exit_year_result.audit_step);
    step_number += 1;

    // Figures owed under both scenarios
    let accrued = calculate_accrued_salary(salary, step_number);
    audit_steps.push(accrued.audit_step);
    step_number += 1;

    let thirteenth = calculate_thirteenth_pay(salary, exit_year_months, step_number);
    audit_steps.push(thirteenth.audit_step);
    step_number += 1;

    let vacation = calculate_vacation_accrual(salary, &tenure, step_number);
    audit_steps.push(vacation.audit_step);
    step_number += 1;

    // Figures owed only under indirect termination
    let notice = calculate_notice_pay(salary, tenure.full_years, step_number);
    audit_steps.push(notice.audit_step);
    step_number += 1;

    let penalty = calculate_fund_exit_penalty(fund, step_number);
    audit_steps.push(penalty.audit_step);
    step_number += 1;

    let withdrawal = calculate_fund_withdrawal(fund, step_number);
    audit_steps.push(withdrawal.audit_step);
    step_number += 1;

    let resignation = SettlementBreakdown::from_components(
        accrued.amount,
        thirteenth.amount,
        vacation.amount,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    );

    let indirect_termination = SettlementBreakdown::from_components(
        accrued.amount,
        thirteenth.amount,
        vacation.amount,
        notice.amount,
        penalty.amount,
        withdrawal.amount,
    );

    let result = ComparisonResult::new(resignation, indirect_termination);
    audit_steps.push(summary_step(&result, input, step_number));

    AuditedComparison {
        tenure,
        months_in_exit_year: exit_year_months,
        result,
        audit_steps,
    }
}

fn summary_step(result: &ComparisonResult, input: &SettlementInput, step_number: u32) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "scenario_comparison".to_string(),
        rule_name: "Scenario Comparison".to_string(),
        legal_ref: "CLT art. 483".to_string(),
        input: serde_json::json!({
            "reason": input.reason,
            "resignation_total": result.resignation.total.normalize().to_string(),
            "indirect_termination_total": result.indirect_termination.total.normalize().to_string()
        }),
        output: serde_json::json!({
            "difference": result.difference.normalize().to_string()
        }),
        reasoning: format!(
            "R${} - R${} = R${} (reason '{}' does not affect amounts)",
            result.indirect_termination.total.normalize(),
            result.resignation.total.normalize(),
            result.difference.normalize(),
            input.reason.tag()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReasonCode, SettlementComponent};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_input(
        salary: &str,
        fund: &str,
        hire_date: NaiveDate,
        exit_date: NaiveDate,
    ) -> SettlementInput {
        SettlementInput {
            gross_monthly_salary: dec(salary),
            severance_fund_balance: dec(fund),
            hire_date,
            exit_date,
            reason: ReasonCode::WageDelay,
        }
    }

    #[test]
    fn test_four_year_scenario() {
        let input = create_input("3000.00", "15000.00", date(2020, 1, 1), date(2024, 1, 1));
        let audited = compare_scenarios_audited(&input);
        let result = audited.result;

        assert_eq!(audited.tenure.full_years, 4);
        assert_eq!(audited.months_in_exit_year, 0);

        assert_eq!(result.resignation.accrued_salary, dec("3000"));
        assert_eq!(result.resignation.proportional_thirteenth_pay, Decimal::ZERO);
        assert_eq!(result.resignation.vacation_accrual, dec("4000"));
        assert_eq!(result.resignation.total, dec("7000"));

        assert_eq!(result.indirect_termination.notice_pay_in_lieu, dec("4200"));
        assert_eq!(result.indirect_termination.fund_exit_penalty, dec("6000"));
        assert_eq!(result.indirect_termination.fund_withdrawal, dec("15000"));
        assert_eq!(result.indirect_termination.total, dec("32200"));

        assert_eq!(result.difference, dec("25200"));
    }

    #[test]
    fn test_resignation_excludes_indirect_components() {
        let input = create_input("4500", "22000", date(2015, 3, 10), date(2025, 8, 20));
        let result = compare_scenarios(&input);

        assert_eq!(result.resignation.notice_pay_in_lieu, Decimal::ZERO);
        assert_eq!(result.resignation.fund_exit_penalty, Decimal::ZERO);
        assert_eq!(result.resignation.fund_withdrawal, Decimal::ZERO);
    }

    #[test]
    fn test_scenarios_share_base_components() {
        let input = create_input("4500", "22000", date(2015, 3, 10), date(2025, 8, 20));
        let result = compare_scenarios(&input);

        for component in SettlementComponent::ALL.into_iter().filter(|c| c.is_base()) {
            assert_eq!(
                result.resignation.amount(component),
                result.indirect_termination.amount(component),
                "{:?} differs between scenarios",
                component
            );
        }
    }

    #[test]
    fn test_same_day_hire_and_exit() {
        // 2024-03-15 is 74 days into the year: ceil(74 / 30) = 3 months
        let input = create_input("2400", "1000", date(2024, 3, 15), date(2024, 3, 15));
        let audited = compare_scenarios_audited(&input);

        assert_eq!(audited.tenure.full_years, 0);
        assert_eq!(audited.tenure.remaining_months, 0);
        assert_eq!(audited.months_in_exit_year, 3);
        assert_eq!(audited.result.resignation.vacation_accrual, Decimal::ZERO);
        assert_eq!(audited.result.resignation.proportional_thirteenth_pay, dec("600"));
        assert_eq!(audited.result.indirect_termination.notice_pay_in_lieu, dec("2400"));
    }

    #[test]
    fn test_short_tenure_mid_year() {
        // 2023-01-01 to 2023-07-20: 200 days, 0 years, 6 months
        // exit year months: 200 days since Jan 1 -> ceil(200 / 30) = 7
        let input = create_input("2400", "0", date(2023, 1, 1), date(2023, 7, 20));
        let result = compare_scenarios(&input);

        assert_eq!(result.resignation.proportional_thirteenth_pay, dec("1400"));
        // 2400 / 12 * 6 = 1200; + 400 = 1600
        assert_eq!(result.resignation.vacation_accrual, dec("1600"));
        assert_eq!(result.resignation.total, dec("5400"));
        assert_eq!(result.indirect_termination.notice_pay_in_lieu, dec("2400"));
        assert_eq!(result.difference, dec("2400"));
    }

    #[test]
    fn test_all_zero_input() {
        let input = create_input("0", "0", date(2019, 5, 1), date(2024, 11, 30));
        let result = compare_scenarios(&input);

        assert_eq!(result.resignation.total, Decimal::ZERO);
        assert_eq!(result.indirect_termination.total, Decimal::ZERO);
        assert_eq!(result.difference, Decimal::ZERO);
    }

    #[test]
    fn test_reason_does_not_affect_amounts() {
        let base = create_input("3100", "9000", date(2018, 2, 1), date(2024, 6, 30));
        let expected = compare_scenarios(&base);

        for reason in ReasonCode::ALL {
            let input = SettlementInput { reason, ..base };
            assert_eq!(compare_scenarios(&input), expected);
        }
    }

    #[test]
    fn test_comparison_is_idempotent() {
        let input = create_input("3333.33", "12345.67", date(2017, 9, 13), date(2025, 2, 28));
        let first = compare_scenarios_audited(&input);
        let second = compare_scenarios_audited(&input);

        assert_eq!(first.result, second.result);
        assert_eq!(first.audit_steps, second.audit_steps);
    }

    #[test]
    fn test_audit_steps_numbered_in_order() {
        let input = create_input("3000", "15000", date(2020, 1, 1), date(2024, 1, 1));
        let audited = compare_scenarios_audited(&input);

        let step_numbers: Vec<u32> = audited.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, (1..=9).collect::<Vec<u32>>());

        let rule_ids: Vec<&str> = audited
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "tenure",
                "exit_year_months",
                "accrued_salary",
                "thirteenth_pay",
                "vacation_accrual",
                "notice_pay_in_lieu",
                "fund_exit_penalty",
                "fund_withdrawal",
                "scenario_comparison",
            ]
        );
    }

    #[test]
    fn test_reversed_dates_still_compute() {
        let forward = create_input("3000", "5000", date(2020, 1, 1), date(2024, 1, 1));
        let reversed = SettlementInput {
            hire_date: forward.exit_date,
            exit_date: forward.hire_date,
            ..forward
        };

        let result = compare_scenarios(&reversed);
        assert_eq!(
            result.indirect_termination.notice_pay_in_lieu,
            compare_scenarios(&forward).indirect_termination.notice_pay_in_lieu
        );
    }
}
