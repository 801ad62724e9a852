//! Полный прогон: загрузка → экстракция → сверка → отчёты.

use crate::{
    config::ReconcileConfig,
    error::Result,
    extract::{extract_accounts, extract_controls, extract_transactions},
    formats::saft::Document,
    model::{Account, AccountMovement, ControlTotals, Transactions},
    reconcile::{apply_policies, reconcile},
    report::Report,
};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub accounts: Vec<Account>,
    pub transactions: Transactions,
    pub controls: ControlTotals,
    pub movement: Vec<AccountMovement>,
    pub report: Report,
}

impl Reconciliation {
    pub fn from_document(doc: &Document, config: &ReconcileConfig) -> Result<Self> {
        let transactions = extract_transactions(doc)?;
        let accounts = extract_accounts(doc)?;
        let controls = extract_controls(doc)?;

        apply_policies(&accounts, &transactions.lines, config)?;
        let movement = reconcile(&transactions.lines, &accounts)?;
        let report = Report::new(&controls, &transactions, &movement)?;

        tracing::info!(
            accounts = accounts.len(),
            lines = transactions.lines.len(),
            mismatched = report.movement.nonzero_count,
            "reconciliation complete"
        );
        Ok(Reconciliation {
            accounts,
            transactions,
            controls,
            movement,
            report,
        })
    }

    pub fn from_reader<R: BufRead>(r: R, config: &ReconcileConfig) -> Result<Self> {
        Self::from_document(&Document::from_reader(r)?, config)
    }

    pub fn from_path(path: impl AsRef<Path>, config: &ReconcileConfig) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading SAF-T file");
        Self::from_reader(BufReader::new(File::open(path)?), config)
    }
}
