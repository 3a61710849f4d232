//! Run the analysis pipeline and write the report.

use std::path::PathBuf;

use chrono::Local;
use colored::Colorize;
use datasieve::{ReportWriter, Sieve};

use crate::cli::Cli;

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !cli.file.exists() {
        return Err(format!("File not found: {}", cli.file.display()).into());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        cli.file.display().to_string().white()
    );

    let sieve = Sieve::new();
    let result = sieve.analyze(&cli.file)?;

    println!(
        "Loaded {} rows x {} columns ({})",
        result.source.row_count.to_string().white().bold(),
        result.source.column_count.to_string().white().bold(),
        result.source.format
    );

    if cli.verbose {
        println!();
        println!("{}", "Blocks:".yellow().bold());
        for block in &result.report.blocks {
            println!("  {:20} {} rows", block.name, block.row_count());
        }
        println!();
    }

    for failure in &result.failures {
        println!(
            "{} module '{}' failed: {}",
            "Warning:".yellow().bold(),
            failure.module,
            failure.cause
        );
    }

    // Timestamped directory unless the caller picked one
    let output_dir = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "quality_report_{}",
            Local::now().format("%Y%m%d_%H%M%S")
        ))
    });

    let written = ReportWriter::new().write(&result, &output_dir)?;

    println!();
    println!(
        "{} {} ({} files)",
        "Saved to".green().bold(),
        output_dir.display().to_string().white(),
        written.len()
    );

    if result.failures.is_empty() {
        println!("{}", "All analysis modules completed.".green());
    } else {
        println!(
            "{}",
            format!(
                "{} of {} modules failed; their blocks are absent from the report.",
                result.failures.len(),
                result.failures.len() + result.report.blocks.len()
            )
            .yellow()
        );
    }

    Ok(())
}
