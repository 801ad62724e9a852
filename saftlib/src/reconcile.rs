//! Сверка движения по счетам с суммами проводок (полное внешнее соединение
//! по `account_id`).

use crate::{
    config::{Policy, ReconcileConfig},
    error::{Result, SaftError},
    model::{Account, AccountMovement, TransactionLine},
};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// Сумма знаковых проводок по каждому счёту.
pub fn net_transacted(lines: &[TransactionLine]) -> Result<BTreeMap<&str, Decimal>> {
    let mut net: BTreeMap<&str, Decimal> = BTreeMap::new();
    for line in lines {
        let sum = net.entry(line.account_id.as_str()).or_default();
        *sum = sum.checked_add(line.amount.signed()).ok_or_else(|| {
            SaftError::overflow(format!("net transacted for account {}", line.account_id))
        })?;
    }
    Ok(net)
}

/// Одна строка на каждую запись счёта плюс одна на каждый счёт, который
/// встречается только в проводках. Отсутствующая сторона считается нулём.
pub fn reconcile(lines: &[TransactionLine], accounts: &[Account]) -> Result<Vec<AccountMovement>> {
    let net = net_transacted(lines)?;
    let known: BTreeSet<&str> = accounts.iter().map(|a| a.account_id.as_str()).collect();

    let mut rows: Vec<AccountMovement> = accounts
        .iter()
        .map(|account| -> Result<AccountMovement> {
            let transacted = net
                .get(account.account_id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            let difference = account
                .net_movement()
                .and_then(|m| m.checked_sub(transacted))
                .ok_or_else(|| {
                    SaftError::overflow(format!("movement of account {}", account.account_id))
                })?;
            Ok(AccountMovement {
                account_id: account.account_id.clone(),
                difference,
                net_transacted: transacted,
                account: Some(account.clone()),
            })
        })
        .collect::<Result<_>>()?;

    rows.extend(
        net.iter()
            .filter(|(id, _)| !known.contains(*id))
            .map(|(id, transacted)| AccountMovement {
                account_id: (*id).to_owned(),
                account: None,
                net_transacted: *transacted,
                difference: -*transacted,
            }),
    );

    rows.sort_by(|a, b| a.account_id.cmp(&b.account_id));
    tracing::debug!(rows = rows.len(), "account movement reconciled");
    Ok(rows)
}

/// Проверка дубликатов счетов и проводок на неизвестные счета.
pub fn apply_policies(
    accounts: &[Account],
    lines: &[TransactionLine],
    config: &ReconcileConfig,
) -> Result<()> {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for account in accounts {
        if !seen.insert(account.account_id.as_str()) {
            duplicates.insert(account.account_id.as_str());
        }
    }
    for id in duplicates {
        match config.duplicate_accounts {
            Policy::Allow => {}
            Policy::Warn => tracing::warn!(account_id = id, "duplicate account id"),
            Policy::Reject => return Err(SaftError::DuplicateAccount(id.to_owned())),
        }
    }

    let orphans: BTreeSet<&str> = lines
        .iter()
        .map(|l| l.account_id.as_str())
        .filter(|id| !seen.contains(id))
        .collect();
    for id in orphans {
        match config.orphan_transactions {
            Policy::Allow => {}
            Policy::Warn => tracing::warn!(account_id = id, "transaction lines for unknown account"),
            Policy::Reject => return Err(SaftError::OrphanTransaction(id.to_owned())),
        }
    }
    Ok(())
}
