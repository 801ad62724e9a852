use crate::Cli;
use saftlib::{config::ReconcileConfig, error::Result, export::OutputTemplate};
use std::path::PathBuf;

/// Настройки одного прогона, собранные из аргументов командной строки.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub template: OutputTemplate,
    pub reconcile: ReconcileConfig,
    pub print_only: bool,
}

impl Config {
    pub fn from_args(cli: &Cli) -> Result<Self> {
        Ok(Config {
            input: cli.input.clone(),
            template: OutputTemplate::new(cli.output_template.as_str())?,
            reconcile: ReconcileConfig {
                duplicate_accounts: cli.duplicate_accounts,
                orphan_transactions: cli.orphan_transactions,
            },
            print_only: cli.print_only,
        })
    }
}
