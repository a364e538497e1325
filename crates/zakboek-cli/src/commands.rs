use super::args::{Cli, Commands, LedgerCommand};
use super::handlers;
use anyhow::Result;
use std::path::{Path, PathBuf};
use zakboek_runtime::{Config, resolve_data_path};
use zakboek_sheet::CsvWorkbook;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir)?;
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&data_dir, cli.workbook, cli.format),

        Commands::Process { path } => {
            let config = Config::load_from(&Config::config_path(&data_dir))?;
            let workbook = open_workbook(&config, &data_dir, cli.workbook)?;
            handlers::process::handle(&workbook, &path, cli.format)
        }

        Commands::Register {
            codes,
            source,
            bag_type,
            date,
        } => {
            let config = Config::load_from(&Config::config_path(&data_dir))?;
            let workbook = open_workbook(&config, &data_dir, cli.workbook)?;
            handlers::register::handle(
                &workbook,
                &config,
                codes,
                source,
                bag_type.into(),
                date,
                cli.format,
            )
        }

        Commands::Ledger { command } => {
            let config = Config::load_from(&Config::config_path(&data_dir))?;
            let workbook = open_workbook(&config, &data_dir, cli.workbook)?;

            match command {
                LedgerCommand::List {
                    pending,
                    processed,
                    limit,
                } => {
                    handlers::ledger_list::handle(&workbook, pending, processed, limit, cli.format)
                }
                LedgerCommand::Status => handlers::ledger_status::handle(&workbook, cli.format),
            }
        }
    }
}

fn open_workbook(
    config: &Config,
    data_dir: &Path,
    override_path: Option<PathBuf>,
) -> Result<CsvWorkbook> {
    let path = override_path.unwrap_or_else(|| config.workbook_path(data_dir));
    if !path.exists() {
        anyhow::bail!(
            "no workbook at {}; run 'zakboek init' first or pass --workbook",
            path.display()
        );
    }
    Ok(CsvWorkbook::new(path))
}

fn show_guidance(data_dir: &PathBuf) -> Result<()> {
    let config_path = Config::config_path(data_dir);

    println!("zakboek - Deposit bag ledger\n");

    if !config_path.exists() {
        println!("Get started:");
        println!("  zakboek init\n");
        println!("The init command will:");
        println!("  1. Create the data directory and a default config");
        println!("  2. Create an empty workbook ledger\n");
    } else {
        println!("Quick commands:");
        println!("  zakboek register <CODE>...    # Register handed-in bags");
        println!("  zakboek process <FILE|DIR>    # Count CHR statements into the ledger");
        println!("  zakboek ledger list           # View the workbook");
        println!("  zakboek ledger status         # Totals at a glance\n");
    }

    println!("For more commands:");
    println!("  zakboek --help");

    Ok(())
}
