//! Command implementation for the converter CLI
//!
//! Sets up logging, runs the conversion with a progress bar and prints the
//! summary in the requested format.

use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::args::{Args, OutputFormat};
use crate::converter::Converter;
use crate::models::{ConversionSummary, FileOutcome, FileStatus};

/// Main command runner
///
/// 1. Set up logging
/// 2. Build and validate the configuration
/// 3. Convert the input directory with progress reporting
/// 4. Report the summary
pub fn run(args: Args) -> Result<ConversionSummary> {
    setup_logging(&args)?;

    info!("Starting line protocol to CSV conversion");
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    debug!("Configuration: {:?}", config);

    let converter = Converter::new(config).context("Invalid configuration")?;
    let files = converter.discover().with_context(|| {
        format!(
            "Failed to list input files in '{}'",
            converter.config().input_dir.display()
        )
    })?;

    let progress_bar = if args.show_progress() && !files.is_empty() {
        Some(create_progress_bar(files.len() as u64)?)
    } else {
        None
    };

    let summary = converter
        .convert_files(&files, &mut |outcome: &FileOutcome| {
            if let Some(pb) = &progress_bar {
                pb.set_message(outcome.input_name());
                pb.inc(1);
            }
        })
        .context("Conversion aborted")?;

    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_human_summary(&summary);
            }
        }
        OutputFormat::Json => print_json_summary(&summary)?,
    }

    Ok(summary)
}

/// Set up tracing; `RUST_LOG` takes precedence over `-v` / `-q`
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lp2csv={}", log_level)));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let layer = if args.quiet {
        layer.compact().boxed()
    } else {
        layer.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn create_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

fn print_human_summary(summary: &ConversionSummary) {
    println!();
    println!("{}", "Conversion Summary".bright_green().bold());
    println!("{}", "==================".bright_green());
    println!(
        "  {} {}",
        "Input:".bright_cyan(),
        summary.input_dir.display()
    );
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        summary.output_dir.display()
    );

    if summary.dry_run {
        println!(
            "  {} {}",
            "Files that would be converted:".bright_cyan(),
            summary.files_planned().to_string().bright_white().bold()
        );
        for file in &summary.files {
            if let (FileStatus::Planned, Some(output)) = (file.status, &file.output) {
                println!("    {} -> {}", file.input_name(), output.display());
            }
        }
    } else {
        println!(
            "  {} {}",
            "Files converted:".bright_cyan(),
            summary.files_converted().to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Files without records:".bright_cyan(),
            summary.files_empty()
        );
        println!(
            "  {} {}",
            "Records written:".bright_cyan(),
            summary.total_records().to_string().bright_white().bold()
        );

        let malformed = summary.total_malformed();
        if malformed > 0 {
            println!(
                "  {} {}",
                "Malformed lines skipped:".bright_yellow(),
                malformed.to_string().bright_yellow()
            );
            for file in summary.files.iter().filter(|f| f.stats.malformed_lines > 0) {
                println!(
                    "    {} {:.1}% of {} lines parsed",
                    file.input_name(),
                    file.stats.success_rate(),
                    file.stats.candidate_lines()
                );
            }
        }
    }

    let failed = summary.files_failed();
    if failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            failed.to_string().bright_red().bold()
        );
        for file in summary.files.iter().filter(|f| f.status == FileStatus::Failed) {
            println!(
                "    {} {}",
                file.input_name().as_str().red(),
                file.error.as_deref().unwrap_or("unknown error").bright_black()
            );
        }
    }

    println!(
        "  {} {:.2}s",
        "Elapsed:".bright_cyan(),
        summary.elapsed_ms as f64 / 1000.0
    );
}

fn print_json_summary(summary: &ConversionSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    println!("{}", json);
    Ok(())
}
