//! GeneralLedgerEntries/Journal/Transaction/Line → строки проводок.

use super::{optional_text, read_side, required_text};
use crate::{
    error::{Result, SaftError},
    formats::saft::{Document, Element},
    model::{TransactionLine, Transactions},
};

pub(crate) const SECTION: &str = "generalledgerentries";

/// Одна запись на каждую `Line`, сортировка по счёту, затем по флагу
/// ("Credit" раньше "Debit").
pub fn extract_transactions(doc: &Document) -> Result<Transactions> {
    let section = doc
        .find(SECTION)
        .ok_or_else(|| SaftError::missing("GeneralLedgerEntries", "document"))?;

    let mut lines = Vec::new();
    let mut transaction_count = 0usize;

    for journal in section.find_all("journal") {
        for transaction in journal.find_all("transaction") {
            transaction_count += 1;
            let transaction_id = optional_text(transaction, "TransactionID");
            for (n, line) in transaction.find_all("line").into_iter().enumerate() {
                lines.push(parse_line(transaction_count, transaction_id.as_deref(), n, line)?);
            }
        }
    }

    lines.sort_by(|a, b| {
        a.account_id
            .cmp(&b.account_id)
            .then_with(|| a.amount.flag().as_str().cmp(b.amount.flag().as_str()))
    });
    tracing::debug!(
        transactions = transaction_count,
        lines = lines.len(),
        "transaction lines extracted"
    );
    Ok(Transactions {
        lines,
        transaction_count,
    })
}

fn parse_line(
    tx_index: usize,
    transaction_id: Option<&str>,
    line_index: usize,
    el: &Element,
) -> Result<TransactionLine> {
    let ctx = match transaction_id {
        Some(id) => format!("transaction {id}, line #{}", line_index + 1),
        None => format!("transaction #{tx_index}, line #{}", line_index + 1),
    };

    Ok(TransactionLine {
        account_id: required_text(el, "AccountID", &ctx)?.to_owned(),
        transaction_id: transaction_id.map(str::to_owned),
        record_id: optional_text(el, "RecordID"),
        amount: read_side(el, "DebitAmount", "CreditAmount", Some("Amount"), &ctx)?,
    })
}
