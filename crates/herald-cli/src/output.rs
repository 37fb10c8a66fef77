//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use herald_domain::{AutomationOutcome, Insight};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a structured insight.
    pub fn format_insight(&self, insight: &Insight) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(insight)?),
            OutputFormat::Table => Ok(self.format_insight_table(insight)),
            OutputFormat::Quiet => Ok(insight.risk_level.to_string()),
        }
    }

    /// Format an automation outcome - exactly the three returned values.
    pub fn format_outcome(&self, outcome: &AutomationOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
            OutputFormat::Quiet => Ok(outcome.email_status.clone()),
        }
    }

    /// Pretty-print a raw JSON body for diagnostics.
    pub fn raw_json(&self, value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    fn format_insight_table(&self, insight: &Insight) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Risk Level", insight.risk_level.as_str()]);
        builder.push_record(["Risk Reason", &insight.risk_reason]);
        builder.push_record(["Summary", &insight.summary]);
        builder.push_record(["Key Points", &insight.key_points.join("\n")]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn format_outcome_table(&self, outcome: &AutomationOutcome) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Final Answer", &outcome.final_answer]);
        builder.push_record(["Email Body", &outcome.email_body]);
        builder.push_record(["Email Status", &outcome.email_status]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the extracted-text preview block.
    pub fn preview(&self, source_name: &str, text: &str) -> String {
        let header = self.colorize(&format!("── {} ──", source_name), "cyan");
        format!("{}\n{}", header, text)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
