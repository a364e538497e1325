use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use zakboek_runtime::Config;
use zakboek_sheet::CsvWorkbook;

#[derive(Serialize)]
struct InitReport {
    data_dir: PathBuf,
    config_path: PathBuf,
    config_created: bool,
    workbook_path: PathBuf,
    workbook_created: bool,
}

pub fn handle(
    data_dir: &Path,
    workbook_override: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let config_path = Config::config_path(data_dir);
    let config_created = !config_path.exists();
    let config = if config_created {
        let config = Config::default();
        config.save_to(&config_path)?;
        config
    } else {
        Config::load_from(&config_path)?
    };

    let workbook_path = workbook_override.unwrap_or_else(|| config.workbook_path(data_dir));
    let workbook = CsvWorkbook::new(&workbook_path);
    let workbook_created = workbook.create_if_missing()?;

    let report = InitReport {
        data_dir: data_dir.to_path_buf(),
        config_path,
        config_created,
        workbook_path,
        workbook_created,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &InitReport) {
    println!("Data directory: {}", report.data_dir.display());

    let note = if report.config_created {
        "created"
    } else {
        "already present"
    };
    println!(
        "  {} config {} ({})",
        "✓".green(),
        report.config_path.display(),
        note
    );

    let note = if report.workbook_created {
        "created"
    } else {
        "already present"
    };
    println!(
        "  {} workbook {} ({})",
        "✓".green(),
        report.workbook_path.display(),
        note
    );

    println!();
    println!("Next:");
    println!("  zakboek register <CODE>...    # Register handed-in bags");
    println!("  zakboek process <FILE|DIR>    # Count CHR statements into the ledger");
}
