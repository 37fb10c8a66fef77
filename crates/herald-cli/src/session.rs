//! Interactive session - the default surface.
//!
//! Walks the pipeline stage by stage: document path, question, analysis with
//! preview and rendered insight, then an optional recipient and the
//! automation dispatch. Every failure is reported and the session continues;
//! nothing here exits the process.

use crate::commands::{render_dispatch_failure, run_analysis, validate_recipient};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use herald_dispatch::WebhookDispatcher;
use herald_domain::AutomationPayload;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive session.
pub async fn run_session(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info(
            "Herald session - analyze a document, then optionally trigger the alert automation"
        )
    );
    println!(
        "{}",
        formatter.info("Type 'exit' at any prompt to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        // Stage 1: document and question
        let file = match prompt(&mut editor, "document path> ", false, formatter)? {
            Input::Exit => break,
            Input::Line(file) => file,
        };

        let document = match herald_extract::extract_file(&file) {
            Ok(document) => document,
            Err(e) => {
                eprintln!("{}", formatter.error(&e.to_string()));
                continue;
            }
        };

        println!(
            "{}",
            formatter.info(&format!(
                "Extracted {} chars ({})",
                document.text.len(),
                document.format
            ))
        );
        println!(
            "{}",
            formatter.preview(
                &document.source_name,
                document.preview(config.settings.preview_chars)
            )
        );

        let question = match prompt(&mut editor, "question> ", false, formatter)? {
            Input::Exit => break,
            Input::Line(question) => question,
        };

        // Stage 2: analysis
        println!("{}", formatter.info("Analyzing document..."));
        let report = match run_analysis(&document, &question, config).await {
            Ok(report) => report,
            Err(e) => {
                eprintln!("{}", formatter.error(&e.to_string()));
                continue;
            }
        };
        println!("{}", formatter.format_insight(&report.insight)?);

        // Stage 3: optional alert email
        let recipient = match prompt(
            &mut editor,
            "recipient email (blank to skip)> ",
            true,
            formatter,
        )? {
            Input::Exit => break,
            Input::Line(recipient) => recipient,
        };

        if recipient.is_empty() {
            println!("{}", formatter.info("Automation skipped"));
            continue;
        }

        if let Err(e) = validate_recipient(&recipient) {
            eprintln!("{}", formatter.error(&e.to_string()));
            continue;
        }

        let webhook_url = match config.resolve_webhook_url() {
            Ok(url) => url,
            Err(e) => {
                eprintln!("{}", formatter.error(&e.to_string()));
                continue;
            }
        };

        // Stage 4: automation
        println!("{}", formatter.info("Triggering automation..."));
        let payload = AutomationPayload {
            document_text: document.text.clone(),
            question: question.clone(),
            structured_data: report.insight.clone(),
            recipient_email: recipient,
        };

        match WebhookDispatcher::new(webhook_url).dispatch(&payload).await {
            Ok(outcome) => {
                println!("{}", formatter.format_outcome(&outcome)?);
                println!(
                    "{}",
                    formatter.success(&format!("Email status: {}", outcome.email_status))
                );
            }
            Err(e) => {
                render_dispatch_failure(&e, formatter);
                eprintln!("{}", formatter.error(&e.to_string()));
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// One line of user input.
enum Input {
    Line(String),
    Exit,
}

/// Read a line, handling interrupts and EOF like a shell.
fn prompt(
    editor: &mut DefaultEditor,
    text: &str,
    allow_empty: bool,
    formatter: &Formatter,
) -> Result<Input> {
    loop {
        match editor.readline(text) {
            Ok(line) => {
                let line = line.trim().to_string();

                if line.is_empty() {
                    if allow_empty {
                        return Ok(Input::Line(line));
                    }
                    continue;
                }

                editor.add_history_entry(&line).ok();

                if matches!(line.as_str(), "exit" | "quit" | "q") {
                    return Ok(Input::Exit);
                }

                return Ok(Input::Line(line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => return Ok(Input::Exit),
            Err(err) => {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    err.to_string(),
                )));
            }
        }
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let herald_dir = home.join(".herald");
    std::fs::create_dir_all(&herald_dir)?;
    Ok(herald_dir.join("history.txt"))
}
