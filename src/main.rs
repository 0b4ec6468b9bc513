//! CLI entry point for the borough rater.
//!
//! Provides subcommands for correlating inspection grades with market
//! density, and for inspecting either input on its own.

use anyhow::{Context, Result};
use borough_rater::output::print_json;
use borough_rater::{
    CorrelateOptions, CsvOptions, JoinPolicy, count_markets, correlate_to_path, summarize_grades,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "borough_rater")]
#[command(about = "Correlate restaurant inspection grades with green market density by borough", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join grade summaries with market counts and write the result as JSON
    Correlate {
        /// Inspection results CSV
        #[arg(value_name = "INSPECTIONS")]
        inspections: PathBuf,

        /// Green markets JSON
        #[arg(value_name = "MARKETS")]
        markets: PathBuf,

        /// JSON file to write the combined summary to (overwritten)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// JSON options file; any header or join flag given overrides its setting
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the first row of the inspection CSV
        #[arg(long, conflicts_with = "no_header")]
        has_header: bool,

        /// Scan the first row of the inspection CSV as data
        #[arg(long)]
        no_header: bool,

        /// Match boroughs exactly instead of normalizing case and trailing whitespace
        #[arg(long, conflicts_with = "normalized_join")]
        strict_join: bool,

        /// Normalize case and trailing whitespace before matching boroughs
        #[arg(long)]
        normalized_join: bool,
    },
    /// Print the per-borough restaurant count and average grade score
    Grades {
        /// Inspection results CSV
        #[arg(value_name = "INSPECTIONS")]
        inspections: PathBuf,

        /// Skip the first row of the inspection CSV
        #[arg(long, default_value_t = false)]
        has_header: bool,
    },
    /// Print the per-borough green market count
    Markets {
        /// Green markets JSON
        #[arg(value_name = "MARKETS")]
        markets: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/borough_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("borough_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("info")));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::try_from_env("RUST_LOG_JSON").unwrap_or_else(|_| EnvFilter::new("debug")),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Correlate {
            inspections,
            markets,
            output,
            config,
            has_header,
            no_header,
            strict_join,
            normalized_join,
        } => {
            let loaded = match &config {
                Some(path) => CorrelateOptions::load(path)
                    .with_context(|| format!("loading options from {}", path.display()))?,
                None => CorrelateOptions::default(),
            };
            let options = loaded.with_overrides(
                flag_pair(has_header, no_header),
                flag_pair(strict_join, normalized_join)
                    .map(|strict| if strict { JoinPolicy::Strict } else { JoinPolicy::Normalized }),
            );

            let combined = correlate_to_path(&inspections, &markets, &output, &options)
                .context("correlating inspections with markets")?;

            info!(
                boroughs = combined.len(),
                output = %output.display(),
                "Correlation complete"
            );
        }
        Commands::Grades {
            inspections,
            has_header,
        } => {
            let summary = summarize_grades(&inspections, &CsvOptions { has_header })
                .with_context(|| format!("summarizing {}", inspections.display()))?;
            print_json(&summary)?;
        }
        Commands::Markets { markets } => {
            let counts = count_markets(&markets)
                .with_context(|| format!("counting markets in {}", markets.display()))?;
            print_json(&counts)?;
        }
    }

    Ok(())
}

/// Collapses an `--x` / `--no-x` style pair into an optional override.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_pair() {
        assert_eq!(flag_pair(true, false), Some(true));
        assert_eq!(flag_pair(false, true), Some(false));
        assert_eq!(flag_pair(false, false), None);
    }

    #[test]
    fn test_no_header_and_normalized_join_parse() {
        let cli = Cli::try_parse_from([
            "borough_rater",
            "correlate",
            "in.csv",
            "m.json",
            "out.json",
            "--no-header",
            "--normalized-join",
        ])
        .unwrap();
        match cli.command {
            Commands::Correlate {
                has_header,
                no_header,
                strict_join,
                normalized_join,
                ..
            } => {
                assert_eq!(flag_pair(has_header, no_header), Some(false));
                assert_eq!(flag_pair(strict_join, normalized_join), Some(false));
            }
            _ => panic!("expected correlate"),
        }
    }

    #[test]
    fn test_conflicting_header_flags_rejected() {
        let result = Cli::try_parse_from([
            "borough_rater",
            "correlate",
            "in.csv",
            "m.json",
            "out.json",
            "--has-header",
            "--no-header",
        ]);
        assert!(result.is_err());
    }
}
