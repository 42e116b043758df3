//! Request types for the Settlement Comparator API.
//!
//! Every endpoint accepts the same body: the raw form fields. Amounts may be
//! sent as JSON numbers or as strings in either `3000.50` or `3.000,50` form.

use serde::{Deserialize, Deserializer, Serialize};

use crate::form::SettlementForm;

/// Request body for `/compare`, `/export/document` and `/share`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Gross monthly salary.
    #[serde(deserialize_with = "string_or_number")]
    pub gross_monthly_salary: String,
    /// Severance fund balance.
    #[serde(deserialize_with = "string_or_number")]
    pub severance_fund_balance: String,
    /// Hire date, `YYYY-MM-DD`.
    pub hire_date: String,
    /// Exit date, `YYYY-MM-DD`. Defaults to the server's current date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<String>,
    /// Reason tag (e.g. `wage_delay`) or its display label.
    pub reason: String,
}

impl From<ComparisonRequest> for SettlementForm {
    fn from(req: ComparisonRequest) -> Self {
        SettlementForm {
            gross_monthly_salary: req.gross_monthly_salary,
            severance_fund_balance: req.severance_fund_balance,
            hire_date: req.hire_date,
            exit_date: req.exit_date.unwrap_or_default(),
            reason: req.reason,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Text(text) => text,
        RawAmount::Number(number) => number.to_string(),
    })
}
