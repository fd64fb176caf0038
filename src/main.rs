//! Binary entry point for the fix-imports CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Rewrite alias imports under ./src/components/ui
//! fix-imports
//!
//! # Run against another checkout, machine-readable output
//! fix-imports --workspace ../web --format json
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use importfix::cli::{report_error, run_fix, OutputFormat};

// ============================================================================
// CLI Structure
// ============================================================================

/// Rewrite alias imports in `src/components/ui/*.tsx` into relative imports.
#[derive(Parser, Debug)]
#[command(name = "fix-imports", version, about)]
struct Cli {
    /// Workspace root holding `src/components/ui` (default: current directory).
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level for tracing output (overridden by `RUST_LOG`).
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log line format on stderr.
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Log line format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_level, cli.log_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_fix(cli.workspace.as_deref(), cli.format, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "fix pass failed");
            let _ = report_error(&err, cli.format, &mut out, &mut io::stderr());
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initialize tracing subscriber.
///
/// Logs always go to stderr so they never mix with the report on stdout.
fn init_tracing(level: LogLevel, format: LogFormat) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

// ============================================================================
// Tests
// ============================================================================
