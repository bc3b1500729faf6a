use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use ledger_cli::cli::{handle_command, LedgerCommands};
use ledger_cli::config::{LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "ledger records dated income and expense entries in a plain text \
                  file and reports totals, spending by category against budget \
                  limits, and transactions per month. Run without a subcommand \
                  for the interactive menu."
)]
struct Cli {
    /// Directory holding config.json and transactions.txt
    #[arg(long, global = true, env = "LEDGER_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<LedgerCommands>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    log::debug!("Using data directory {}", paths.base_dir().display());

    let settings = Settings::load_or_create(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handle_command(
        cli.command.unwrap_or(LedgerCommands::Shell),
        &paths,
        &settings,
        &mut out,
    )?;

    Ok(())
}
