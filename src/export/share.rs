//! Share links that open a prefilled chat with a labor lawyer.

use serde::Serialize;

use crate::config::ShareConfig;
use crate::models::{ComparisonResult, Scenario, SettlementInput};

use super::format::format_currency;

/// A prefilled message and the deep link carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    /// The plain-text message.
    pub message: String,
    /// The message percent-encoded for use in a query string.
    pub encoded_message: String,
    /// `{base_url}/{phone_number}?text={encoded_message}`.
    pub url: String,
}

/// Builds [`ShareLink`]s for a configured destination.
#[derive(Debug, Clone, Copy)]
pub struct ShareLinkBuilder<'a> {
    config: &'a ShareConfig,
}

impl<'a> ShareLinkBuilder<'a> {
    /// Creates a builder targeting the configured base URL and phone number.
    pub fn new(config: &'a ShareConfig) -> Self {
        Self { config }
    }

    /// Builds the message and link for one comparison.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_comparator::calculation::compare_scenarios;
    /// use settlement_comparator::config::ShareConfig;
    /// use settlement_comparator::export::ShareLinkBuilder;
    /// use settlement_comparator::models::{ReasonCode, SettlementInput};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let config = ShareConfig {
    ///     base_url: "https://wa.me".to_string(),
    ///     phone_number: "5511999999999".to_string(),
    /// };
    /// let input = SettlementInput {
    ///     gross_monthly_salary: Decimal::new(3000, 0),
    ///     severance_fund_balance: Decimal::new(15000, 0),
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     reason: ReasonCode::WageDelay,
    /// };
    ///
    /// let link = ShareLinkBuilder::new(&config).build(&input, &compare_scenarios(&input));
    /// assert!(link.url.starts_with("https://wa.me/5511999999999?text="));
    /// assert!(link.message.contains("Atraso Reiterado de Salário"));
    /// ```
    pub fn build(&self, input: &SettlementInput, result: &ComparisonResult) -> ShareLink {
        let message = compose_message(input, result);
        let encoded_message = percent_encode(&message);
        let url = format!(
            "{}/{}?text={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.phone_number,
            encoded_message
        );

        ShareLink {
            message,
            encoded_message,
            url,
        }
    }
}

fn compose_message(input: &SettlementInput, result: &ComparisonResult) -> String {
    let lines = [
        "Olá! Utilizei o simulador de rescisão trabalhista e gostaria de uma análise \
         detalhada do meu caso."
            .to_string(),
        String::new(),
        "*Dados Informados:*".to_string(),
        format!("• Salário: {}", format_currency(input.gross_monthly_salary)),
        format!("• FGTS: {}", format_currency(input.severance_fund_balance)),
        format!("• Situação: {}", input.reason.label()),
        String::new(),
        "*Valores Estimados:*".to_string(),
        format!(
            "• {}: {}",
            Scenario::Resignation.title(),
            format_currency(result.resignation.total)
        ),
        format!(
            "• {}: {}",
            Scenario::IndirectTermination.title(),
            format_currency(result.indirect_termination.total)
        ),
        format!("• Diferença: {}", format_currency(result.difference)),
        String::new(),
        "Gostaria de agendar uma consulta para avaliar minha situação.".to_string(),
    ];

    lines.join("\n")
}

/// Percent-encodes text the way a URI component is encoded.
///
/// ASCII letters, digits and `-_.!~*'()` pass through; every other byte of the
/// UTF-8 encoding becomes `%XX` with uppercase hex.
///
/// # Examples
///
/// ```
/// use settlement_comparator::export::percent_encode;
///
/// assert_eq!(percent_encode("R$ 1.000,00"), "R%24%201.000%2C00");
/// assert_eq!(percent_encode("ção"), "%C3%A7%C3%A3o");
/// ```
pub fn percent_encode(text: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(HEX[(byte >> 4) as usize] as char);
            encoded.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    encoded
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
