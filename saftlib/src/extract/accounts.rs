//! GeneralLedgerAccounts → `Vec<Account>`.

use super::{read_side, required_text};
use crate::{
    error::{Result, SaftError},
    formats::saft::{Document, Element},
    model::Account,
};

const SECTION: &str = "generalledgeraccounts";

/// Счета, отсортированные по `account_id`; дубликаты не удаляются.
pub fn extract_accounts(doc: &Document) -> Result<Vec<Account>> {
    let section = doc
        .find(SECTION)
        .ok_or_else(|| SaftError::missing("GeneralLedgerAccounts", "document"))?;

    let mut accounts = section
        .find_all("account")
        .into_iter()
        .enumerate()
        .map(|(i, el)| parse_account(i, el))
        .collect::<Result<Vec<_>>>()?;

    accounts.sort_by(|a, b| a.account_id.cmp(&b.account_id));
    tracing::debug!(count = accounts.len(), "accounts extracted");
    Ok(accounts)
}

fn parse_account(index: usize, el: &Element) -> Result<Account> {
    let account_id = required_text(el, "AccountID", &format!("account #{}", index + 1))?.to_owned();
    let ctx = format!("account {account_id}");

    Ok(Account {
        description: required_text(el, "AccountDescription", &ctx)?.to_owned(),
        standard_account_id: required_text(el, "StandardAccountID", &ctx)?.to_owned(),
        account_type: required_text(el, "AccountType", &ctx)?.to_owned(),
        creation_date: required_text(el, "AccountCreationDate", &ctx)?.to_owned(),
        opening: read_side(el, "OpeningDebitBalance", "OpeningCreditBalance", None, &ctx)?,
        closing: read_side(el, "ClosingDebitBalance", "ClosingCreditBalance", None, &ctx)?,
        account_id,
    })
}
