//! Send command implementation - the full pipeline ending in the automation
//! webhook.

use crate::cli::SendArgs;
use crate::commands::analyze::run_analysis;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use herald_dispatch::{DispatchError, WebhookDispatcher};
use herald_domain::AutomationPayload;

/// Execute the send command.
pub async fn execute_send(args: SendArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    validate_recipient(&args.to)?;

    // Resolve the webhook before spending a completion call
    let webhook_url = config.resolve_webhook_url()?;

    let document = herald_extract::extract_file(&args.file)?;
    let report = run_analysis(&document, &args.question, config).await?;

    println!("{}", formatter.format_insight(&report.insight)?);

    let payload = AutomationPayload {
        document_text: document.text,
        question: args.question,
        structured_data: report.insight,
        recipient_email: args.to,
    };

    let dispatcher = WebhookDispatcher::new(webhook_url);

    match dispatcher.dispatch(&payload).await {
        Ok(outcome) => {
            println!("{}", formatter.format_outcome(&outcome)?);
            println!(
                "{}",
                formatter.success(&format!("Email status: {}", outcome.email_status))
            );
            Ok(())
        }
        Err(e) => {
            render_dispatch_failure(&e, formatter);
            Err(e.into())
        }
    }
}

/// Show the raw webhook body for shape failures so the external automation
/// can be debugged; other failures carry their context in the error itself.
pub fn render_dispatch_failure(error: &DispatchError, formatter: &Formatter) {
    match error {
        DispatchError::MissingFields { missing, raw } => {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "Webhook response is missing: {}. Raw response:",
                    missing.join(", ")
                ))
            );
            eprintln!("{}", formatter.raw_json(raw));
        }
        DispatchError::InvalidJson { raw, .. } => {
            eprintln!(
                "{}",
                formatter.warning("Webhook returned a non-JSON body. Raw response:")
            );
            eprintln!("{}", raw);
        }
        DispatchError::EmptyResponse => {
            eprintln!(
                "{}",
                formatter.warning("Webhook returned an empty response. Check the automation workflow configuration.")
            );
        }
        _ => {}
    }
}

/// Syntactic check on the recipient email.
///
/// Delivery problems are the automation's concern; this only rejects input
/// that cannot possibly be an address.
pub fn validate_recipient(email: &str) -> Result<()> {
    let email = email.trim();

    let valid = match email.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && !host.is_empty()
                && host.contains('.')
                && !host.starts_with('.')
                && !host.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "'{}' does not look like an email address",
            email
        )))
    }
}
