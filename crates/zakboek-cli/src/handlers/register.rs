use crate::types::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use zakboek_runtime::{CodeOutcome, Config, RegisterService};
use zakboek_sheet::LedgerGateway;
use zakboek_types::{BagType, SyncStatus};

pub fn handle(
    gateway: &dyn LedgerGateway,
    config: &Config,
    mut codes: Vec<String>,
    source: Option<String>,
    bag_type: BagType,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    // A scanner wedge usually pipes one code per line
    if codes.is_empty() && !std::io::stdin().is_terminal() {
        codes = read_codes_from_stdin()?;
    }
    if codes.is_empty() {
        anyhow::bail!("no codes given; pass them as arguments or pipe one per line");
    }

    let source = match source {
        Some(source) => source,
        None => single_configured_source(config)?,
    };
    let submission_date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let service = RegisterService::new(gateway, config.barcode_prefix.as_str());
    let outcomes = service.register(&codes, &source, bag_type, submission_date)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        OutputFormat::Plain => print_outcomes(&outcomes, &source, submission_date),
    }

    Ok(())
}

fn read_codes_from_stdin() -> Result<Vec<String>> {
    let mut codes = Vec::new();
    for line in std::io::stdin().lines() {
        let line = line?;
        let code = line.trim();
        if !code.is_empty() {
            codes.push(code.to_string());
        }
    }
    Ok(codes)
}

fn single_configured_source(config: &Config) -> Result<String> {
    match config.sources.as_slice() {
        [only] => Ok(only.clone()),
        [] => anyhow::bail!("no sources configured; pass --source"),
        many => anyhow::bail!(
            "several sources configured; pass --source (one of: {})",
            many.join(", ")
        ),
    }
}

fn print_outcomes(outcomes: &[CodeOutcome], source: &str, date: NaiveDate) {
    println!("Handed in at {} on {}:", source, date.format("%Y-%m-%d"));

    for outcome in outcomes {
        let label = match &outcome.id {
            Some(id) => format!("bag {}", id),
            None => format!("code {:?}", outcome.code),
        };

        match outcome.status {
            SyncStatus::Inserted => println!("  {} {} registered", "✓".green(), label),
            SyncStatus::Updated => println!("  {} {} reconciled", "✓".green(), label),
            SyncStatus::DuplicateRejected => println!(
                "  {} {} skipped ({})",
                "-".yellow(),
                label,
                outcome.detail.as_deref().unwrap_or("duplicate")
            ),
            SyncStatus::Error => println!(
                "  {} {} rejected ({})",
                "✗".red(),
                label,
                outcome.detail.as_deref().unwrap_or("error")
            ),
        }
    }
}
