use crate::types::OutputFormat;
use anyhow::Result;
use zakboek_runtime::{LedgerFilter, LedgerService};
use zakboek_sheet::LedgerGateway;
use zakboek_sheet::columns::{HEADERS, record_to_row};
use zakboek_types::BagRecord;

pub fn handle(
    gateway: &dyn LedgerGateway,
    pending: bool,
    processed: bool,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let filter = if pending {
        LedgerFilter::Pending
    } else if processed {
        LedgerFilter::Processed
    } else {
        LedgerFilter::All
    };

    let service = LedgerService::new(gateway);
    let rows = service.list(filter, limit)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => print_rows(&rows),
    }

    Ok(())
}

fn print_rows(rows: &[BagRecord]) {
    if rows.is_empty() {
        println!("The workbook is empty.");
        return;
    }

    print_row(&HEADERS.map(String::from));
    for record in rows {
        print_row(&record_to_row(record));
    }
    println!("({} rows)", rows.len());
}

fn print_row(cells: &[String; 7]) {
    println!(
        "{:>9}  {:<14} {:<5} {:<12} {:^8} {:<16} {:>8}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6]
    );
}
