//! CLI entrypoint for oraculo
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use oraculo_application::{OracleGateway, SessionController, Submission};
use oraculo_infrastructure::{ConfigLoader, YesNoGateway};
use oraculo_presentation::{Cli, ConsoleFormatter, OracleRepl, OutputFormat, WaitingSpinner};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    info!(endpoint = %config.oracle.endpoint, "starting oraculo");

    // === Dependency Injection ===
    let gateway: Arc<dyn OracleGateway> = Arc::new(YesNoGateway::new(&config.oracle)?);

    // Chat mode
    if cli.chat {
        let mut repl = OracleRepl::new(gateway)
            .with_spinner(!cli.quiet && config.repl.show_spinner)
            .with_saved_history(config.repl.save_history);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let mut controller = SessionController::new(gateway);
    controller.on_input_change(question);

    let show_spinner = !cli.quiet && matches!(cli.output, OutputFormat::Text);
    let spinner = WaitingSpinner::start(show_spinner && config.repl.show_spinner);
    let submission = controller.submit().await;
    spinner.finish();

    match (submission, cli.output) {
        (Submission::Resolved(outcome), OutputFormat::Text) => {
            print!("{}", ConsoleFormatter::format_outcome(&outcome));
        }
        (Submission::Resolved(outcome), OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_outcome_json(&outcome));
        }
        (Submission::Rejected(_) | Submission::Failed, format) => {
            if let Some(error) = controller.state().error() {
                match format {
                    OutputFormat::Text => eprint!("{}", ConsoleFormatter::format_error(error)),
                    OutputFormat::Json => {
                        println!("{}", ConsoleFormatter::format_error_json(error))
                    }
                }
            }
            std::process::exit(1);
        }
        (Submission::Ignored, _) => bail!("Question is empty."),
    }

    Ok(())
}
