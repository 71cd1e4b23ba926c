//! CLI entrypoint for SocialFlip
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod answers;

use anyhow::{Result, anyhow};
use clap::Parser;
use socialflip_application::{
    AssessmentEventLogger, AssessmentSession, ExportReportUseCase, NoEventLogger,
    RegisterLeadUseCase,
};
use socialflip_domain::{Lead, Section};
use socialflip_infrastructure::{
    ConfigLoader, FileConfig, JsonlEventLogger, PdfReportExporter, WebhookLeadSubmitter,
};
use socialflip_presentation::{AssessmentRepl, Cli, OutputConfig, formatter_for};
use std::sync::Arc;
use tracing::{info, warn};
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    info!("Starting SocialFlip assessment");

    let output = OutputConfig::new(config.output.format, config.output.color)
        .with_cli_overrides(cli.output, cli.no_color);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let event_logger: Arc<dyn AssessmentEventLogger> = match &cli.event_log {
        Some(path) => match JsonlEventLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Event logging disabled");
                Arc::new(NoEventLogger)
            }
        },
        None => Arc::new(NoEventLogger),
    };

    let register = RegisterLeadUseCase::new(Arc::new(WebhookLeadSubmitter::new(
        config.webhook.url.clone(),
    )))
    .with_event_logger(event_logger.clone());

    let export = ExportReportUseCase::new(
        Arc::new(PdfReportExporter::new()),
        config.report.to_settings(),
    )
    .with_event_logger(event_logger.clone());

    let session = AssessmentSession::new().with_event_logger(event_logger);
    let formatter = formatter_for(output.format);

    // Answers file mode
    if let Some(path) = &cli.answers {
        return run_answers_file(&cli, &config, path, session, register, export, formatter).await;
    }

    // Interactive mode
    let mut repl = AssessmentRepl::new(session, formatter).with_export(export, cli.pdf.clone());
    if !cli.skip_lead {
        repl = repl.with_registration(register, prefilled_lead(&cli));
    }
    repl.run().await?;

    Ok(())
}

async fn run_answers_file(
    cli: &Cli,
    config: &FileConfig,
    path: &std::path::Path,
    mut session: AssessmentSession,
    register: RegisterLeadUseCase,
    export: ExportReportUseCase,
    formatter: Box<dyn socialflip_presentation::OutputFormatter>,
) -> Result<()> {
    let answers = answers::load_answers(path)?;

    if !cli.skip_lead && cli.has_lead() {
        info!("Registering lead with {}", config.webhook.url);
        register.execute(&prefilled_lead(cli)).await?;
    }

    for section in Section::ALL {
        if let Some(record) = answers.section(section) {
            session.replace(section, record.clone());
        }
    }

    println!("{}", formatter.assessment(session.assessment()));

    match &cli.pdf {
        Some(target) => {
            let result = export.execute(session.assessment(), target.as_deref())?;
            eprintln!("Report saved to {}", result.path.display());
        }
        None if session.is_complete() => info!(
            "Pass --pdf to export the report (default {})",
            config.report.output_path.display()
        ),
        None => {}
    }

    Ok(())
}

fn prefilled_lead(cli: &Cli) -> Lead {
    Lead::new(
        cli.name.clone().unwrap_or_default(),
        cli.email.clone().unwrap_or_default(),
    )
}
