//! Report export.
//!
//! The shell takes a [`ReportDocument`] snapshot of the current result and
//! hands it to a [`ReportExporter`] running on a background task. The
//! exporter only reads the snapshot; it never touches the session.

use std::fmt::Write as _;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Local};
use clap::ValueEnum;
use margin_core::calculations::common::round_half_up;
use margin_core::presentation::{ReportRow, report_rows};
use margin_core::report::{ReportNarrative, compose, context_paragraph};
use margin_core::{CalculationResult, MarginTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const FILE_STEM: &str = "Gross_Profit_Analysis";

/// Highest copy number tried before giving up on a free file name.
const MAX_COPIES: u32 = 999;

/// Output format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Self::Markdown),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Returns the exporter for this format.
    pub fn exporter(&self) -> Box<dyn ReportExporter> {
        match self {
            Self::Markdown => Box::new(MarkdownExporter),
            Self::Csv => Box::new(CsvExporter),
        }
    }
}

/// Immutable copy of everything an exported report shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Local>,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub gross_profit: Decimal,
    pub gross_profit_margin: Decimal,
    pub tier: MarginTier,
    pub narrative: ReportNarrative,
    pub rows: Vec<ReportRow>,
}

impl ReportDocument {
    pub fn snapshot(
        result: &CalculationResult,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            generated_at,
            revenue: result.revenue(),
            cost: result.cost(),
            gross_profit: result.gross_profit(),
            gross_profit_margin: result.gross_profit_margin(),
            tier: result.tier(),
            narrative: compose(result),
            rows: report_rows(result),
        }
    }

    /// File name for this document, e.g. `Gross_Profit_Analysis_2025-03-01.md`.
    pub fn file_name(
        &self,
        format: ExportFormat,
    ) -> String {
        self.numbered_file_name(format, 1)
    }

    /// File name for the `copy`-th report of the same day and format.
    /// Copy 1 has no suffix; later copies end in `_2`, `_3` and so on.
    pub fn numbered_file_name(
        &self,
        format: ExportFormat,
        copy: u32,
    ) -> String {
        let date = self.generated_at.format("%Y-%m-%d");
        let ext = format.extension();
        if copy <= 1 {
            format!("{FILE_STEM}_{date}.{ext}")
        } else {
            format!("{FILE_STEM}_{date}_{copy}.{ext}")
        }
    }
}

/// Renders and writes a [`ReportDocument`].
#[async_trait]
pub trait ReportExporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    /// Renders the document to bytes.
    fn render(
        &self,
        document: &ReportDocument,
    ) -> Result<Vec<u8>>;

    /// Writes the rendered document into `dir`, creating it if needed, and
    /// returns the path of the written file.
    async fn export(
        &self,
        document: &ReportDocument,
        dir: &Path,
    ) -> Result<PathBuf> {
        let bytes = self.render(document)?;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let (path, mut file) = create_unique(dir, document, self.format()).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "writing report");
        file.write_all(&bytes)
            .await
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        file.flush()
            .await
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}

/// Creates the first free report file in `dir`.
///
/// Names are claimed with `create_new`, so concurrent exports of the same
/// day never write to the same file.
async fn create_unique(
    dir: &Path,
    document: &ReportDocument,
    format: ExportFormat,
) -> Result<(PathBuf, File)> {
    for copy in 1..=MAX_COPIES {
        let path = dir.join(document.numbered_file_name(format, copy));
        match OpenOptions::new().write(true).create_new(true).open(&path).await {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create report: {}", path.display()));
            }
        }
    }
    anyhow::bail!(
        "No free report name left in {} after {MAX_COPIES} copies",
        dir.display()
    )
}

/// Sectioned Markdown report: summary table, analysis and recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExporter;

#[async_trait]
impl ReportExporter for MarkdownExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Markdown
    }

    fn render(
        &self,
        document: &ReportDocument,
    ) -> Result<Vec<u8>> {
        let mut out = String::new();

        writeln!(out, "# Gross Profit Margin Analysis")?;
        writeln!(out)?;
        writeln!(
            out,
            "Generated on {} at {}",
            document.generated_at.format("%Y-%m-%d"),
            document.generated_at.format("%H:%M:%S")
        )?;
        writeln!(out)?;

        writeln!(out, "## Gross Profit Margin Summary")?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|:-------|------:|")?;
        for row in &document.rows {
            if row.emphasized {
                writeln!(out, "| **{}** | **{}** |", row.label, row.value)?;
            } else {
                writeln!(out, "| {} | {} |", row.label, row.value)?;
            }
        }
        writeln!(out)?;

        writeln!(out, "## Analysis")?;
        writeln!(out)?;
        writeln!(out, "{}", document.narrative.summary_line)?;
        writeln!(out)?;
        writeln!(out, "{}", context_paragraph())?;
        writeln!(out)?;

        writeln!(out, "## Recommendations")?;
        writeln!(out)?;
        for item in document.narrative.recommendations {
            writeln!(out, "- {item}")?;
        }
        writeln!(out)?;

        writeln!(out, "---")?;
        writeln!(out)?;
        writeln!(
            out,
            "This report was generated by the gross profit margin calculator."
        )?;
        writeln!(out, "© {}", document.generated_at.year())?;

        Ok(out.into_bytes())
    }
}

/// Two-column `metric,value` CSV with unformatted amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

#[async_trait]
impl ReportExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(
        &self,
        document: &ReportDocument,
    ) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let rows = [
            ("generated_at", document.generated_at.to_rfc3339()),
            ("revenue", document.revenue.to_string()),
            ("cost_of_goods_sold", document.cost.to_string()),
            ("gross_profit", document.gross_profit.to_string()),
            (
                "gross_profit_margin",
                format!("{:.2}", round_half_up(document.gross_profit_margin)),
            ),
            ("margin_tier", document.tier.as_str().to_string()),
        ];

        writer.write_record(["metric", "value"])?;
        for (metric, value) in &rows {
            writer.write_record([*metric, value.as_str()])?;
        }

        writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush CSV report: {}", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use margin_core::{RawInput, compute, validate};
    use pretty_assertions::assert_eq;

    use super::*;

    fn document(
        revenue: &str,
        cost: &str,
    ) -> ReportDocument {
        let validated = validate(&RawInput::new(revenue, cost)).expect("test input should validate");
        let generated_at = Local
            .with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
            .single()
            .expect("unambiguous local time");
        ReportDocument::snapshot(&compute(&validated.input), generated_at)
    }

    // =========================================================================
    // ExportFormat tests
    // =========================================================================

    #[test]
    fn export_format_parse_accepts_aliases() {
        assert_eq!(ExportFormat::parse("md"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::parse("Markdown"), Some(ExportFormat::Markdown));
        assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("pdf"), None);
    }

    #[test]
    fn file_name_uses_generation_date() {
        let doc = document("100000", "60000");

        assert_eq!(
            doc.file_name(ExportFormat::Markdown),
            "Gross_Profit_Analysis_2025-03-01.md"
        );
        assert_eq!(
            doc.file_name(ExportFormat::Csv),
            "Gross_Profit_Analysis_2025-03-01.csv"
        );
    }

    #[test]
    fn later_copies_get_a_numbered_suffix() {
        let doc = document("100000", "60000");

        assert_eq!(
            doc.numbered_file_name(ExportFormat::Markdown, 1),
            "Gross_Profit_Analysis_2025-03-01.md"
        );
        assert_eq!(
            doc.numbered_file_name(ExportFormat::Csv, 3),
            "Gross_Profit_Analysis_2025-03-01_3.csv"
        );
    }

    // =========================================================================
    // export tests
    // =========================================================================

    #[tokio::test]
    async fn export_never_overwrites_an_earlier_report() {
        let dir = std::env::temp_dir().join("margin_export_no_overwrite");
        let _ = std::fs::remove_dir_all(&dir);
        let first = document("100000", "60000");
        let second = document("100000", "10000");

        let first_path = CsvExporter.export(&first, &dir).await.unwrap();
        let second_path = CsvExporter.export(&second, &dir).await.unwrap();

        assert_eq!(first_path, dir.join("Gross_Profit_Analysis_2025-03-01.csv"));
        assert_eq!(second_path, dir.join("Gross_Profit_Analysis_2025-03-01_2.csv"));
        let first_text = std::fs::read_to_string(&first_path).unwrap();
        let second_text = std::fs::read_to_string(&second_path).unwrap();
        assert!(first_text.contains("gross_profit_margin,40.00"));
        assert!(second_text.contains("gross_profit_margin,90.00"));
    }

    // =========================================================================
    // MarkdownExporter tests
    // =========================================================================

    #[test]
    fn markdown_contains_summary_table() {
        let bytes = MarkdownExporter.render(&document("100000", "60000")).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("Generated on 2025-03-01 at 09:30:00"));
        assert!(text.contains("| Total Revenue | ₹1,00,000 |"));
        assert!(text.contains("| Cost of Goods Sold (COGS) | ₹60,000 |"));
        assert!(text.contains("| **Gross Profit** | **₹40,000** |"));
        assert!(text.contains("| **Gross Profit Margin** | **40.00%** |"));
    }

    #[test]
    fn markdown_contains_analysis_and_recommendations() {
        let bytes = MarkdownExporter.render(&document("100", "90")).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("This is below the average margin."));
        assert!(text.contains("- Negotiate better terms with suppliers"));
        assert!(text.contains(context_paragraph()));
        assert!(text.contains("© 2025"));
    }

    // =========================================================================
    // CsvExporter tests
    // =========================================================================

    #[test]
    fn csv_has_unformatted_values() {
        let bytes = CsvExporter.render(&document("100", "150")).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "metric,value");
        assert!(lines[1].starts_with("generated_at,2025-03-01T09:30:00"));
        assert_eq!(
            &lines[2..],
            &[
                "revenue,100",
                "cost_of_goods_sold,150",
                "gross_profit,-50",
                "gross_profit_margin,-50.00",
                "margin_tier,loss",
            ]
        );
    }
}
