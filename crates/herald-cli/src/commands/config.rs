//! Config command implementation.

use crate::cli::ConfigAction;
use crate::config::{mask_secret, Config};
use crate::error::Result;
use crate::output::Formatter;

/// Execute the config command.
pub fn execute_config(
    action: ConfigAction,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let api_key = config
                .completion
                .api_key
                .as_deref()
                .map(mask_secret)
                .unwrap_or_else(|| "(not set)".to_string());
            let webhook_url = config
                .automation
                .webhook_url
                .as_deref()
                .unwrap_or("(not set)");

            println!("completion.api_key      = {}", api_key);
            println!("completion.model        = {}", config.completion.model);
            println!("completion.endpoint     = {}", config.completion.endpoint);
            println!("automation.webhook_url  = {}", webhook_url);
            println!("settings.preview_chars  = {}", config.settings.preview_chars);
            println!(
                "analyzer.max_document_chars = {}",
                config.analyzer.max_document_chars
            );
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Set { key, value } => {
            config.set_value(&key, &value)?;
            config.save()?;
            println!("{}", formatter.success(&format!("Set {}", key)));
        }
    }

    Ok(())
}
