mod config;

use chrono::Local;
use clap::{ArgAction, Parser};
use saftlib::{
    config::Policy,
    error::Result,
    export::{export_all, OutputTemplate},
    pipeline::Reconciliation,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "saft", version, about = "Сверка SAF-T: счета, проводки и контрольные суммы")]
pub struct Cli {
    /// Входной SAF-T файл
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// Шаблон имени CSV: {0} таблица, {1} время формирования
    #[arg(short = 'o', long = "output-template", default_value = OutputTemplate::DEFAULT)]
    output_template: String,

    /// Повторяющиеся AccountID
    #[arg(long = "duplicate-accounts", value_enum, default_value_t = Policy::Warn)]
    duplicate_accounts: Policy,

    /// Проводки по счетам, которых нет в GeneralLedgerAccounts
    #[arg(long = "orphan-transactions", value_enum, default_value_t = Policy::Warn)]
    orphan_transactions: Policy,

    /// Только вывести отчёт, без записи CSV
    #[arg(short = 'p', long = "print-only")]
    print_only: bool,

    /// Подробный лог (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("saft={level},saftlib={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::from_args(&cli)?;

    let rec = Reconciliation::from_path(&config.input, &config.reconcile)?;
    print!("{}", rec.report);

    if config.print_only {
        return Ok(());
    }
    for path in export_all(&config.template, &rec, Local::now().naive_local())? {
        tracing::debug!(path = %path.display(), "written");
    }
    Ok(())
}
