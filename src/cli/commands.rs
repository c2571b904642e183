//! Command implementation for schedule-obs
//!
//! Wires the parsed arguments to the parser and the observation writer,
//! with logging setup, a progress bar over the dates being written and a
//! human-readable summary.

use crate::ExtractionSummary;
use crate::app::models::ScheduleDocument;
use crate::app::services::observation_writer::{EmitStats, ObservationWriter};
use crate::app::services::schedule_parser::{ParseResult, ParseStats, ScheduleParser};
use crate::cli::args::Args;
use crate::error::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("schedule_obs={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Run the extraction described by `args`
pub fn run(args: &Args) -> Result<ExtractionSummary> {
    let start = Instant::now();
    let writer = ObservationWriter::new(args.to_config())?;

    info!("Reading schedule file: {}", args.input.display());
    let ParseResult { document, stats } = ScheduleParser::new().parse_file(&args.input)?;

    if stats.ended_in_open_block {
        warn!("Schedule ended inside an open DATES or WCONHIST block");
    }

    if args.dry_run {
        if !args.quiet {
            print_dry_run(&writer, &document);
        }
        return Ok(ExtractionSummary {
            parse: stats,
            emit: EmitStats::default(),
        });
    }

    let emit = write_with_progress(&writer, &document, args.show_progress())?;
    let summary = ExtractionSummary { parse: stats, emit };

    if !args.quiet {
        print_summary(&writer, &summary, start.elapsed());
    }

    Ok(summary)
}

/// Write every date, advancing the progress bar for each observation file
fn write_with_progress(
    writer: &ObservationWriter,
    document: &ScheduleDocument,
    show_progress: bool,
) -> Result<EmitStats> {
    let total = document.dates_with_rates().count() as u64;
    let pb = if show_progress && total > 0 {
        create_progress_bar(total, "Writing observations")
    } else {
        ProgressBar::hidden()
    };

    let emit = writer
        .write_document_with(document, |_| pb.inc(1))
        .inspect_err(|_| pb.abandon_with_message("Failed"))?;

    pb.finish_with_message("Done");
    Ok(emit)
}

fn print_dry_run(writer: &ObservationWriter, document: &ScheduleDocument) {
    println!("{}", "Dry run: no files will be written".bright_yellow().bold());
    for date in document.dates_with_rates() {
        println!(
            "  {} {} {}",
            writer.config().date_file(date.index).display().to_string().bright_cyan(),
            format!("({} rows)", date.rates().len()).bright_black(),
            date.label().unwrap_or_default()
        );
    }
    if document.dates_with_rates().next().is_none() {
        println!("  {}", "No producing well rates found".bright_black());
    }
}

fn print_summary(writer: &ObservationWriter, summary: &ExtractionSummary, elapsed: Duration) {
    let ParseStats {
        logical_lines,
        date_blocks,
        rates_retained,
        rates_discarded,
        ..
    } = summary.parse;

    println!("{}", "Extraction complete".bright_green().bold());
    println!(
        "  {} lines, {} date blocks, {} rates kept, {} discarded ({:.1}% retained)",
        logical_lines,
        date_blocks,
        rates_retained,
        rates_discarded,
        summary.parse.retention_rate()
    );
    println!(
        "  {} observation files ({} new directories) under {}",
        summary.emit.files_written.to_string().bright_yellow().bold(),
        summary.emit.directories_created,
        writer.config().output_dir.display().to_string().bright_cyan()
    );
    println!("  {}", format!("Finished in {:.2?}", elapsed).bright_black());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const SCHEDULE: &str = "DATES\n 1 'JAN' 2020 /\n/\nWCONHIST\n 'P1' 'OPEN' 'ORAT' 100 5 80 /\n 'P2' 'SHUT' 'ORAT' 0 /\n/\n";

    fn create_args(temp_dir: &TempDir, extra: &[&str]) -> Args {
        let input = temp_dir.path().join("SCHEDULE.INC");
        fs::write(&input, SCHEDULE).unwrap();
        let output = temp_dir.path().join("obs");

        let mut argv = vec![
            "schedule-obs".to_string(),
            "-q".to_string(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv.push(input.to_string_lossy().into_owned());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_writes_observations() {
        let temp_dir = TempDir::new().unwrap();
        let args = create_args(&temp_dir, &[]);

        let summary = run(&args).unwrap();

        assert_eq!(summary.parse.rates_retained, 1);
        assert_eq!(summary.parse.rates_discarded, 1);
        assert_eq!(summary.emit.files_written, 1);
        assert_eq!(summary.emit.dates_skipped, 1);

        let written = fs::read_to_string(temp_dir.path().join("obs/0002/PROD")).unwrap();
        assert_eq!(
            written,
            "1\nP1               100.0000            5.0000           80.0000 \n"
        );
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let args = create_args(&temp_dir, &["--dry-run"]);

        let summary = run(&args).unwrap();

        assert_eq!(summary.parse.rates_retained, 1);
        assert_eq!(summary.emit, EmitStats::default());
        assert!(!temp_dir.path().join("obs").exists());
    }

    #[test]
    fn test_invalid_file_name_fails_before_reading() {
        let temp_dir = TempDir::new().unwrap();
        let args = create_args(&temp_dir, &["--file-name", "a/b"]);

        assert!(run(&args).is_err());
        assert!(!temp_dir.path().join("obs").exists());
    }
}
