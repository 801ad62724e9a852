//! CSV-выгрузка трёх таблиц. Заголовки совпадают с подписями отчёта,
//! суммы пишутся без округления, отсутствующее значение пишется пустой ячейкой.

use crate::{
    error::Result,
    model::{Account, AccountMovement, TransactionLine},
    traits::WriteFormat,
};
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

const ACCOUNT_HEADER: [&str; 11] = [
    "Account ID",
    "Description",
    "Standard ID",
    "Account Type",
    "Account Creation Date",
    "Opening Balance Amount",
    "Opening Balance Flag",
    "Closing Balance Amount",
    "Closing Balance Flag",
    "Opening Balance Amount, +/-",
    "Closing Balance Amount, +/-",
];

const TRANSACTION_HEADER: [&str; 6] = [
    "Account ID",
    "Transaction ID",
    "Record ID",
    "Transaction Amount",
    "Transaction Flag",
    "Transaction Amount, +/-",
];

const MOVEMENT_HEADER: [&str; 9] = [
    "Account ID",
    "Description",
    "Standard ID",
    "Account Type",
    "Opening Balance Amount, +/-",
    "Closing Balance Amount, +/-",
    "Net Movement, Balance",
    "Transaction Amount, +/-",
    "Difference",
];

// Порядок полей совпадает с заголовком таблицы.
#[derive(Serialize)]
struct AccountOutRow<'a> {
    account_id: &'a str,
    description: &'a str,
    standard_account_id: &'a str,
    account_type: &'a str,
    creation_date: &'a str,
    opening_amount: Decimal,
    opening_flag: &'static str,
    closing_amount: Decimal,
    closing_flag: &'static str,
    opening_signed: Decimal,
    closing_signed: Decimal,
}

#[derive(Serialize)]
struct TransactionOutRow<'a> {
    account_id: &'a str,
    transaction_id: Option<&'a str>,
    record_id: Option<&'a str>,
    amount: Decimal,
    flag: &'static str,
    signed: Decimal,
}

#[derive(Serialize)]
struct MovementOutRow<'a> {
    account_id: &'a str,
    description: Option<&'a str>,
    standard_account_id: Option<&'a str>,
    account_type: Option<&'a str>,
    opening_signed: Option<Decimal>,
    closing_signed: Option<Decimal>,
    net_movement: Option<Decimal>,
    net_transacted: Decimal,
    difference: Decimal,
}

pub struct Csv;

impl Csv {
    /// Заголовок пишется всегда, в том числе для пустой таблицы.
    fn write_rows<W: Write, S: Serialize>(
        w: W,
        header: &[&str],
        rows: impl IntoIterator<Item = S>,
    ) -> Result<()> {
        let mut wrt = WriterBuilder::new().has_headers(false).from_writer(w);
        wrt.write_record(header)?;
        for row in rows {
            wrt.serialize(row)?;
        }
        wrt.flush()?;
        Ok(())
    }
}

impl WriteFormat<Account> for Csv {
    fn write<W: Write>(w: W, rows: &[Account]) -> Result<()> {
        Csv::write_rows(
            w,
            &ACCOUNT_HEADER,
            rows.iter().map(|a| AccountOutRow {
                account_id: &a.account_id,
                description: &a.description,
                standard_account_id: &a.standard_account_id,
                account_type: &a.account_type,
                creation_date: &a.creation_date,
                opening_amount: a.opening.amount(),
                opening_flag: a.opening.flag().as_str(),
                closing_amount: a.closing.amount(),
                closing_flag: a.closing.flag().as_str(),
                opening_signed: a.opening.signed(),
                closing_signed: a.closing.signed(),
            }),
        )
    }
}

impl WriteFormat<TransactionLine> for Csv {
    fn write<W: Write>(w: W, rows: &[TransactionLine]) -> Result<()> {
        Csv::write_rows(
            w,
            &TRANSACTION_HEADER,
            rows.iter().map(|l| TransactionOutRow {
                account_id: &l.account_id,
                transaction_id: l.transaction_id.as_deref(),
                record_id: l.record_id.as_deref(),
                amount: l.amount.amount(),
                flag: l.amount.flag().as_str(),
                signed: l.amount.signed(),
            }),
        )
    }
}

impl WriteFormat<AccountMovement> for Csv {
    fn write<W: Write>(w: W, rows: &[AccountMovement]) -> Result<()> {
        Csv::write_rows(
            w,
            &MOVEMENT_HEADER,
            rows.iter().map(|m| MovementOutRow {
                account_id: &m.account_id,
                description: m.account.as_ref().map(|a| a.description.as_str()),
                standard_account_id: m.account.as_ref().map(|a| a.standard_account_id.as_str()),
                account_type: m.account.as_ref().map(|a| a.account_type.as_str()),
                opening_signed: m.opening_signed(),
                closing_signed: m.closing_signed(),
                net_movement: m.net_movement(),
                net_transacted: m.net_transacted,
                difference: m.difference,
            }),
        )
    }
}
