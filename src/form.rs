//! Input form handling.
//!
//! A [`SettlementForm`] is the draft the user is filling in: every field is
//! the raw string as typed. [`SettlementForm::submit`] turns a complete draft
//! into a validated [`SettlementInput`]. Amounts that cannot be parsed are
//! coerced to zero; blank required fields, bad dates, unknown reasons and
//! negative amounts are rejected.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ReasonCode, SettlementInput};

/// Date format accepted by the form (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The raw, editable form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementForm {
    /// Gross monthly salary as typed.
    #[serde(default)]
    pub gross_monthly_salary: String,
    /// Severance fund balance as typed.
    #[serde(default)]
    pub severance_fund_balance: String,
    /// Hire date, `YYYY-MM-DD`.
    #[serde(default)]
    pub hire_date: String,
    /// Exit date, `YYYY-MM-DD`. Blank means "today".
    #[serde(default)]
    pub exit_date: String,
    /// Reason tag or label.
    #[serde(default)]
    pub reason: String,
}

impl SettlementForm {
    /// Creates an empty draft with the exit date prefilled.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_comparator::form::SettlementForm;
    /// use chrono::NaiveDate;
    ///
    /// let form = SettlementForm::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    /// assert_eq!(form.exit_date, "2025-03-01");
    /// assert!(!form.is_complete());
    /// ```
    pub fn new(today: NaiveDate) -> Self {
        Self {
            exit_date: today.format(DATE_FORMAT).to_string(),
            ..Self::default()
        }
    }

    /// Returns the names of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("gross_monthly_salary", &self.gross_monthly_salary),
            ("severance_fund_balance", &self.severance_fund_balance),
            ("hire_date", &self.hire_date),
            ("reason", &self.reason),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Returns true once every required field has a value.
    ///
    /// The comparison should not be triggered before this is true.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Converts the draft into a validated settlement input.
    ///
    /// # Arguments
    ///
    /// * `today` - Used as the exit date when the exit date field is blank
    ///
    /// # Returns
    ///
    /// Returns the input, or an error if:
    /// - A required field is blank (`MissingField`)
    /// - A date is not `YYYY-MM-DD` (`InvalidDate`)
    /// - The reason is not recognised (`InvalidReason`)
    /// - An amount is negative or above [`max_amount`](crate::models::max_amount) (`InvalidAmount`)
    /// - The exit date is before the hire date (`InvalidDateRange`)
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_comparator::form::SettlementForm;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let form = SettlementForm {
    ///     gross_monthly_salary: "3000".to_string(),
    ///     severance_fund_balance: "abc".to_string(),
    ///     hire_date: "2020-01-01".to_string(),
    ///     exit_date: "2024-01-01".to_string(),
    ///     reason: "harassment".to_string(),
    /// };
    ///
    /// let input = form.submit(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).unwrap();
    /// assert_eq!(input.severance_fund_balance, Decimal::ZERO);
    /// ```
    pub fn submit(&self, today: NaiveDate) -> EngineResult<SettlementInput> {
        if let Some(field) = self.missing_fields().first() {
            return Err(EngineError::MissingField {
                field: (*field).to_string(),
            });
        }

        let hire_date = parse_date("hire_date", &self.hire_date)?;
        let exit_date = if self.exit_date.trim().is_empty() {
            today
        } else {
            parse_date("exit_date", &self.exit_date)?
        };
        let reason = ReasonCode::from_str(&self.reason)?;

        let input = SettlementInput {
            gross_monthly_salary: coerce_amount(&self.gross_monthly_salary),
            severance_fund_balance: coerce_amount(&self.severance_fund_balance),
            hire_date,
            exit_date,
            reason,
        };
        input.validate()?;

        Ok(input)
    }
}

/// Parses a monetary amount, falling back to zero.
///
/// Accepts a plain decimal (`3000.50`), a comma decimal separator
/// (`3000,50`), pt-BR grouping (`3.000,50`) and an optional `R$` prefix.
/// Anything else, including blank input, becomes zero.
///
/// # Examples
///
/// ```
/// use settlement_comparator::form::coerce_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_amount("R$ 3.000,50"), Decimal::new(300050, 2));
/// assert_eq!(coerce_amount("not a number"), Decimal::ZERO);
/// ```
pub fn coerce_amount(raw: &str) -> Decimal {
    let cleaned = raw.trim().trim_start_matches("R$").trim();

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.to_string()
    };

    Decimal::from_str(&normalized).unwrap_or(Decimal::ZERO)
}

fn parse_date(field: &str, raw: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}
