//! Herald CLI - analyze documents with AI and trigger conditional alert emails.

use clap::Parser;
use herald_cli::{commands, session, Cli, Command, Config, Formatter};

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Session) => {
            session::run_session(&config, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            commands::execute_analyze(args, &config, &formatter).await?;
        }
        Some(Command::Send(args)) => {
            commands::execute_send(args, &config, &formatter).await?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args.action, &mut config, &formatter)?;
        }
    }

    Ok(())
}
