//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use herald_domain::{Document, InsightRequest};
use herald_insight::{Analyzer, InsightReport};
use herald_llm::OpenRouterProvider;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let document = herald_extract::extract_file(&args.file)?;

    println!(
        "{}",
        formatter.info(&format!(
            "Extracted {} chars from '{}' ({})",
            document.text.len(),
            document.source_name,
            document.format
        ))
    );

    if !args.no_preview {
        println!(
            "{}",
            formatter.preview(
                &document.source_name,
                document.preview(config.settings.preview_chars)
            )
        );
    }

    let report = run_analysis(&document, &args.question, config).await?;

    println!("{}", formatter.format_insight(&report.insight)?);
    println!(
        "{}",
        formatter.success(&format!(
            "Analyzed with {} in {} ms ({} attempt(s))",
            report.metadata.model_name,
            report.metadata.processing_time_ms,
            report.metadata.attempts
        ))
    );

    Ok(())
}

/// Run the analysis stage of the pipeline.
///
/// Shared by the analyze and send commands and the interactive session.
pub async fn run_analysis(
    document: &Document,
    question: &str,
    config: &Config,
) -> Result<InsightReport> {
    config
        .analyzer
        .validate()
        .map_err(CliError::Config)?;

    let api_key = config.resolve_api_key()?;

    let provider = OpenRouterProvider::new(&config.completion.endpoint, api_key)
        .with_model(&config.completion.model);
    let model_name = provider.model().to_string();

    let analyzer =
        Analyzer::new(provider, config.analyzer.clone()).with_model_name(model_name);

    let request = InsightRequest {
        document_text: document.text.clone(),
        question: question.to_string(),
    };

    Ok(analyzer.analyze(request).await?)
}
