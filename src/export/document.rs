//! Paginated calculation statement ("memória de cálculo").
//!
//! The [`DocumentExporter`] lays the comparison out as fixed-width text lines
//! and splits them into pages of at most `lines_per_page` body lines. Every
//! page carries the configured footer and a page counter when rendered.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::ExportConfig;
use crate::models::{ComparisonResult, Scenario, SettlementInput};

use super::format::{center, format_currency, format_date, pad_line, wrap_text};
use super::renderer::scenario_lines;

/// Separator placed between rendered pages.
pub const PAGE_BREAK: char = '\u{000C}';

/// One page of an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Body lines, without the footer.
    pub lines: Vec<String>,
}

/// An exported calculation statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Title printed at the top of the first page.
    pub title: String,
    /// When the document was issued.
    pub issued_at: NaiveDateTime,
    /// The paginated body.
    pub pages: Vec<Page>,
    footer: String,
    line_width: usize,
}

impl Document {
    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the download file name, keyed by issue date.
    ///
    /// # Examples
    ///
    /// ```
    /// use settlement_comparator::config::ConfigLoader;
    /// use settlement_comparator::calculation::compare_scenarios;
    /// use settlement_comparator::export::DocumentExporter;
    /// use settlement_comparator::models::{ReasonCode, SettlementInput};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::load("./config/default").unwrap();
    /// let input = SettlementInput {
    ///     gross_monthly_salary: Decimal::new(3000, 0),
    ///     severance_fund_balance: Decimal::ZERO,
    ///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     exit_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     reason: ReasonCode::Harassment,
    /// };
    /// let issued_at = NaiveDate::from_ymd_opt(2025, 2, 3)
    ///     .unwrap()
    ///     .and_hms_opt(9, 30, 0)
    ///     .unwrap();
    ///
    /// let document = DocumentExporter::new(loader.export())
    ///     .export(&input, &compare_scenarios(&input), issued_at);
    /// assert_eq!(document.file_name(), "Memoria_Calculo_Rescisao_2025-02-03.txt");
    /// ```
    pub fn file_name(&self) -> String {
        format!(
            "Memoria_Calculo_Rescisao_{}.txt",
            self.issued_at.format("%Y-%m-%d")
        )
    }

    /// Renders every page as plain text.
    ///
    /// Each page ends with a rule, the footer and `Página n de m`. Pages are
    /// separated by a form feed.
    pub fn render(&self) -> String {
        let total = self.page_count();
        let rule = "-".repeat(self.line_width);

        self.pages
            .iter()
            .map(|page| {
                let mut out = page.lines.join("\n");
                out.push('\n');
                out.push_str(&rule);
                out.push('\n');
                out.push_str(&center(&self.footer, self.line_width));
                out.push('\n');
                out.push_str(&center(
                    &format!("Página {} de {}", page.number, total),
                    self.line_width,
                ));
                out.push('\n');
                out
            })
            .collect::<Vec<_>>()
            .join(&PAGE_BREAK.to_string())
    }
}

/// Builds [`Document`]s from comparison results.
#[derive(Debug, Clone, Copy)]
pub struct DocumentExporter<'a> {
    config: &'a ExportConfig,
}

impl<'a> DocumentExporter<'a> {
    /// Creates an exporter using the given layout and disclaimer.
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    /// Lays out and paginates the statement for one comparison.
    pub fn export(
        &self,
        input: &SettlementInput,
        result: &ComparisonResult,
        issued_at: NaiveDateTime,
    ) -> Document {
        let layout = &self.config.document;
        let body = self.body_lines(input, result, issued_at);

        let pages = body
            .chunks(layout.lines_per_page.max(1))
            .enumerate()
            .map(|(index, chunk)| Page {
                number: index + 1,
                lines: chunk.to_vec(),
            })
            .collect();

        Document {
            title: layout.title.clone(),
            issued_at,
            pages,
            footer: layout.footer.clone(),
            line_width: layout.line_width,
        }
    }

    fn body_lines(
        &self,
        input: &SettlementInput,
        result: &ComparisonResult,
        issued_at: NaiveDateTime,
    ) -> Vec<String> {
        let layout = &self.config.document;
        let width = layout.line_width;
        let rule = "=".repeat(width);

        let mut lines = vec![
            center(&layout.title, width),
            center(&layout.subtitle, width),
            center(
                &format!(
                    "Emitido em {} às {}",
                    format_date(issued_at.date()),
                    issued_at.format("%H:%M:%S")
                ),
                width,
            ),
            rule.clone(),
            String::new(),
            "DADOS INFORMADOS".to_string(),
            pad_line(
                "Salário Bruto Mensal:",
                &format_currency(input.gross_monthly_salary),
                width,
            ),
            pad_line(
                "Saldo do FGTS:",
                &format_currency(input.severance_fund_balance),
                width,
            ),
            pad_line("Data de Admissão:", &format_date(input.hire_date), width),
            pad_line("Data de Saída:", &format_date(input.exit_date), width),
            pad_line("Situação:", input.reason.label(), width),
            String::new(),
        ];

        lines.extend(scenario_lines(result, Scenario::Resignation, width));
        lines.push(String::new());
        lines.extend(scenario_lines(result, Scenario::IndirectTermination, width));
        lines.push(String::new());

        lines.push(rule);
        lines.push(center("DIFERENÇA ESTIMADA ENTRE MODALIDADES", width));
        lines.push(center(&format_currency(result.difference), width));
        lines.push(String::new());

        lines.push("AVISO LEGAL IMPORTANTE".to_string());
        lines.extend(wrap_text(&self.config.disclaimer, width));

        lines
    }
}
