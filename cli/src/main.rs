//! CLI entrypoint for custom-chatbot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use chatbot_application::{ChatStore, ChatWidget, MessageObserver, ReplyTransport, WidgetOptions};
use chatbot_infrastructure::{ConfigLoader, FileConfig, HttpReplyTransport, JsonlTranscriptLogger};
use chatbot_presentation::{ChatRepl, Cli, TuiApp, TuiState, WidgetVariant};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Heading of the standalone widget
const STANDALONE_TITLE: &str = "Chatbot";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, !cli.plain);

    info!("Starting custom-chatbot ({} widget)", cli.variant());
    for issue in config.validate() {
        warn!("Config {}", issue);
    }

    // === Dependency Injection ===
    let transcript: Option<Arc<dyn MessageObserver>> = config
        .transcript
        .path()
        .and_then(JsonlTranscriptLogger::new)
        .map(|logger| {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn MessageObserver>
        });

    let (widget, title) = match cli.variant() {
        WidgetVariant::Standalone => {
            let mut options = config.widget.to_widget_options();
            if let Some(observer) = transcript {
                options = options.with_on_message(observer);
            }
            let transport: Arc<dyn ReplyTransport> = Arc::new(
                HttpReplyTransport::new(options.request_timeout)
                    .context("Failed to create HTTP client")?,
            );
            (
                ChatWidget::standalone(&options, transport),
                STANDALONE_TITLE.to_string(),
            )
        }
        WidgetVariant::Connected => {
            let mut options: WidgetOptions = config.app.to_widget_options();
            if let Some(observer) = transcript {
                options = options.with_on_message(observer);
            }
            let store = Arc::new(ChatStore::new());
            (ChatWidget::connected(store, &options), config.app.title.clone())
        }
    };

    if cli.plain {
        let mut repl = ChatRepl::new(widget, title).with_color(config.output.color);
        repl.run().await?;
    } else {
        let state = TuiState::new()
            .with_title(title)
            .with_variant(cli.variant())
            .with_placeholder(config.tui.placeholder.clone())
            .with_empty_text(config.tui.empty_text.clone());
        let mut app = TuiApp::new(widget, state);
        app.run().await?;
    }

    info!("custom-chatbot exiting");
    Ok(())
}

/// Apply CLI flags on top of the loaded configuration
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(api_url) = cli.api_url() {
        config.widget.api_url = api_url.to_string();
    }
    if let Some(path) = &cli.transcript {
        config.transcript.path = path.display().to_string();
    }
}

/// Initialize logging based on verbosity level.
///
/// The full-screen window owns the terminal, so in that mode log lines go
/// to a file; line mode logs to stderr.
fn init_logging(verbose: u8, to_file: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    if to_file
        && let Some(dir) = log_dir()
        && std::fs::create_dir_all(&dir).is_ok()
        && let Ok(appender) = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("chatbot.log")
            .build(&dir)
    {
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Some(guard);
    }

    if to_file {
        // No writable log file; stay silent rather than draw over the window
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .init();
        return None;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("custom-chatbot").join("logs"))
}
