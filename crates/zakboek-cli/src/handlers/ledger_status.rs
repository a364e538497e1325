use crate::types::OutputFormat;
use anyhow::Result;
use zakboek_runtime::LedgerService;
use zakboek_sheet::LedgerGateway;

pub fn handle(gateway: &dyn LedgerGateway, format: OutputFormat) -> Result<()> {
    let service = LedgerService::new(gateway);
    let stats = service.stats()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Plain => {
            println!("Rows: {}", stats.total);
            println!("  pending:   {}", stats.pending);
            println!("  processed: {}", stats.processed);
            println!("Paid out: {}", stats.total_amount);
        }
    }

    Ok(())
}
