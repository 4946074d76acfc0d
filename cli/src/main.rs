//! CLI entrypoint for mock-interview
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use interview_application::{
    AnswerCollector, InterviewConfig, InterviewProgress, NoSessionLogger,
    PrepareDocumentsUseCase, RunInterviewUseCase, SessionLogger, SilentSpeaker, SpeechNotifier,
    Transcriber,
};
use interview_domain::InterviewOutcome;
use interview_infrastructure::{
    AudioSettings, CommandSpeaker, ConfigLoader, DisabledTranscriber, FileConfig, GeminiGateway,
    JsonlSessionLogger, PdfDocumentReader, WhisperTranscriber, build_capture,
};
use interview_presentation::{
    Cli, ConsoleAnswerInput, DocumentIntake, LinePrompter, ProgressReporter, SimpleProgress,
    formatter_for,
};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_tracing(&cli)?;

    info!("Starting mock-interview");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    let Some(api_key) = config.gemini.resolve_api_key() else {
        bail!(
            "No Gemini API key found. Set the {} environment variable or [gemini] api_key in the config file.",
            config.gemini.api_key_env
        );
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(
        api_key,
        &config.gemini.model,
        &config.gemini.base_url,
    ));
    let transcriber = build_transcriber(&config);
    let capture = build_capture(AudioSettings {
        sample_rate: config.audio.sample_rate,
        device: config.audio.device.clone(),
    });
    let speak = config.speech.enabled && !cli.no_speech;
    let speaker = build_speaker(&config, speak);
    let logger = build_logger(&cli, &config);

    let prompter = Arc::new(LinePrompter::stdin());

    println!();
    println!(
        "{}",
        "=== AI-Powered Interview Practice Assistant ===".cyan().bold()
    );
    println!();

    // Document intake; any invalid input ends the session here
    let sources = DocumentIntake::new(prompter.clone())
        .collect(cli.resume.clone(), cli.job.clone())
        .context("Failed to read document locations")?;
    let documents = match PrepareDocumentsUseCase::new(Arc::new(PdfDocumentReader::new()))
        .execute(sources)
        .await
    {
        Ok(documents) => documents,
        Err(e) => {
            warn!(error = %e, "Document intake failed");
            println!("{} {}", "[ERROR]".red().bold(), e);
            return Ok(());
        }
    };

    let collector = Arc::new(AnswerCollector::new(
        Arc::new(ConsoleAnswerInput::new(prompter)),
        transcriber,
        capture,
    ));

    let mut interview_config = InterviewConfig::new(config.interview.to_policy());
    if !speak {
        interview_config = interview_config.without_speech();
    }

    let use_case = RunInterviewUseCase::new(gateway, collector, interview_config)
        .with_speech(speaker)
        .with_logger(logger);

    let progress: Box<dyn InterviewProgress> = if cli.quiet {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let outcome = use_case
        .execute_with_progress(documents, progress.as_ref())
        .await?;

    if let InterviewOutcome::Completed(report) = &outcome {
        let summary = report.summary();
        info!(
            questions = summary.questions,
            answered = summary.answered,
            follow_ups = summary.follow_ups,
            "Interview finished"
        );
    }

    let format = config.output.resolve_format(cli.output);
    println!("{}", formatter_for(format).format_outcome(&outcome));

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    let mut errors = Vec::new();
    for issue in config.validate() {
        if issue.is_warning() {
            warn!("{}", issue);
            eprintln!("{} {}", "Warning:".yellow().bold(), issue);
        } else {
            errors.push(issue.to_string());
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(config)
}

fn build_transcriber(config: &FileConfig) -> Arc<dyn Transcriber> {
    let settings = &config.transcription;
    if !settings.enabled {
        info!("Transcription disabled");
        return Arc::new(DisabledTranscriber);
    }
    Arc::new(
        WhisperTranscriber::new(&settings.base_url, &settings.model)
            .with_api_key(settings.resolve_api_key())
            .with_language(settings.language.clone()),
    )
}

fn build_speaker(config: &FileConfig, speak: bool) -> Arc<dyn SpeechNotifier> {
    if !speak {
        return Arc::new(SilentSpeaker);
    }
    match CommandSpeaker::detect(config.speech.command.as_deref(), config.speech.rate) {
        Some(speaker) => {
            info!(program = %speaker.program().display(), "Speech enabled");
            Arc::new(speaker)
        }
        None => {
            warn!("No speech command found; questions will not be read aloud");
            Arc::new(SilentSpeaker)
        }
    }
}

fn build_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn SessionLogger> {
    let logger = match (&cli.transcript, &config.logging.transcript_dir) {
        (Some(path), _) => JsonlSessionLogger::new(path),
        (None, Some(dir)) => JsonlSessionLogger::in_dir(dir),
        (None, None) => return Arc::new(NoSessionLogger),
    };
    match logger {
        Some(logger) => {
            info!(path = %logger.path().display(), "Writing session transcript");
            Arc::new(logger)
        }
        None => Arc::new(NoSessionLogger),
    }
}
