//! Plain-text rendering of a comparison for on-screen display.

use crate::models::{ComparisonResult, Scenario, SettlementComponent, SettlementInput};

use super::format::{format_currency, format_date, pad_line};

/// Column width of the on-screen summary.
pub const SUMMARY_WIDTH: usize = 56;

/// Placeholder for a line item that is not owed under resignation.
pub const NOT_OWED: &str = "—";

/// Placeholder for the fund withdrawal under resignation.
pub const UNAVAILABLE: &str = "Indisponível";

/// Renders both scenario cards followed by the estimated difference.
///
/// Resignation shows the three base items as owed and the remaining items
/// with a placeholder instead of an amount. Indirect termination shows every
/// item.
///
/// # Examples
///
/// ```
/// use settlement_comparator::calculation::compare_scenarios;
/// use settlement_comparator::export::render_summary;
/// use settlement_comparator::models::{ReasonCode, SettlementInput};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput {
///     gross_monthly_salary: Decimal::new(3000, 0),
///     severance_fund_balance: Decimal::new(15000, 0),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     reason: ReasonCode::WageDelay,
/// };
/// let text = render_summary(&input, &compare_scenarios(&input));
/// assert!(text.contains("Diferença Estimada"));
/// ```
pub fn render_summary(input: &SettlementInput, result: &ComparisonResult) -> String {
    let mut lines = vec![
        format!("Situação: {}", input.reason.label()),
        format!(
            "Período: {} a {}",
            format_date(input.hire_date),
            format_date(input.exit_date)
        ),
        String::new(),
    ];

    lines.extend(scenario_lines(result, Scenario::Resignation, SUMMARY_WIDTH));
    lines.push(String::new());
    lines.extend(scenario_lines(result, Scenario::IndirectTermination, SUMMARY_WIDTH));
    lines.push(String::new());
    lines.push(pad_line(
        "Diferença Estimada:",
        &format_currency(result.difference),
        SUMMARY_WIDTH,
    ));

    lines.join("\n")
}

/// Builds the card for one scenario: title, owed items, items not owed, total.
pub(crate) fn scenario_lines(
    result: &ComparisonResult,
    scenario: Scenario,
    width: usize,
) -> Vec<String> {
    let breakdown = result.scenario(scenario);
    let mut lines = vec![scenario.title().to_uppercase()];

    match scenario {
        Scenario::Resignation => {
            lines.push("Verbas Devidas:".to_string());
            for (component, amount) in breakdown.lines().filter(|(c, _)| c.is_base()) {
                lines.push(item_line(component.label(), &format_currency(amount), width));
            }
            lines.push("Verbas Não Devidas:".to_string());
            for component in SettlementComponent::ALL.into_iter().filter(|c| !c.is_base()) {
                let placeholder = match component {
                    SettlementComponent::FundWithdrawal => UNAVAILABLE,
                    _ => NOT_OWED,
                };
                lines.push(item_line(component.label(), placeholder, width));
            }
        }
        Scenario::IndirectTermination => {
            lines.push("Verbas Devidas (Estimativa):".to_string());
            for (component, amount) in breakdown.lines().filter(|(c, _)| c.is_base()) {
                lines.push(item_line(component.label(), &format_currency(amount), width));
            }
            lines.push("Verbas Adicionais:".to_string());
            for (component, amount) in breakdown.lines().filter(|(c, _)| !c.is_base()) {
                lines.push(item_line(component.label(), &format_currency(amount), width));
            }
        }
    }

    lines.push(pad_line(
        "Total Estimado:",
        &format_currency(breakdown.total),
        width,
    ));
    lines
}

fn item_line(label: &str, value: &str, width: usize) -> String {
    pad_line(&format!("  {}", label), value, width)
}
