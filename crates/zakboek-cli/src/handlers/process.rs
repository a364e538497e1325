use crate::types::OutputFormat;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use zakboek_runtime::{BatchReport, ProcessService, find_statements};
use zakboek_sheet::LedgerGateway;
use zakboek_types::SyncStatus;

pub fn handle(gateway: &dyn LedgerGateway, path: &Path, format: OutputFormat) -> Result<()> {
    let statements = find_statements(path)?;
    if statements.is_empty() {
        anyhow::bail!("no .chr statements under {}", path.display());
    }

    let service = ProcessService::new(gateway);
    let mut reports = Vec::with_capacity(statements.len());
    for statement in &statements {
        let report = service
            .process_file(statement)
            .with_context(|| format!("statement {}", statement.display()))?;
        reports.push(report);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Plain => {
            for report in &reports {
                print_report(report);
            }
        }
    }

    Ok(())
}

fn print_report(report: &BatchReport) {
    if let Some(source) = &report.source {
        println!("Statement: {}", source.display());
    }
    println!("Processed: {}", report.processing_date.format("%Y-%m-%d"));
    println!(
        "Counted: {} bags, {} total",
        report.totals.bag_count, report.totals.total_amount
    );

    // inserted bags only show up in the summary line
    for outcome in &report.outcomes {
        match outcome.status {
            SyncStatus::Inserted => {}
            SyncStatus::Updated => println!("  {} bag {} reconciled", "✓".green(), outcome.id),
            SyncStatus::DuplicateRejected => println!(
                "  {} bag {} skipped ({})",
                "-".yellow(),
                outcome.id,
                outcome.detail.as_deref().unwrap_or("duplicate")
            ),
            SyncStatus::Error => println!(
                "  {} bag {} rejected ({})",
                "✗".red(),
                outcome.id,
                outcome.detail.as_deref().unwrap_or("error")
            ),
        }
    }

    for issue in &report.issues {
        println!("  {} line {}: {}", "✗".red(), issue.line, issue.reason);
    }

    let counts = report.counts();
    println!(
        "Result: {} inserted, {} reconciled, {} duplicates, {} errors",
        counts.inserted, counts.updated, counts.duplicates, counts.errors
    );
    println!();
}
