//! Сборка небольших SAF-T файлов для тестов.
#![allow(dead_code)]

pub fn account(id: &str, opening: (&str, &str), closing: (&str, &str)) -> String {
    format!(
        r#"<n1:Account>
            <n1:AccountID>{id}</n1:AccountID>
            <n1:AccountDescription>Account {id}</n1:AccountDescription>
            <n1:StandardAccountID>{sid}</n1:StandardAccountID>
            <n1:AccountType>GL</n1:AccountType>
            <n1:AccountCreationDate>2019-01-01</n1:AccountCreationDate>
            <n1:Opening{of}Balance>{oa}</n1:Opening{of}Balance>
            <n1:Closing{cf}Balance>{ca}</n1:Closing{cf}Balance>
        </n1:Account>"#,
        sid = &id[..2.min(id.len())],
        of = opening.0,
        oa = opening.1,
        cf = closing.0,
        ca = closing.1,
    )
}

pub fn line(record: u32, account_id: &str, flag: &str, amount: &str) -> String {
    format!(
        r#"<n1:Line>
            <n1:RecordID>{record}</n1:RecordID>
            <n1:AccountID>{account_id}</n1:AccountID>
            <n1:{flag}Amount><n1:Amount>{amount}</n1:Amount></n1:{flag}Amount>
        </n1:Line>"#
    )
}

pub fn transaction(id: &str, lines: &[String]) -> String {
    format!(
        r#"<n1:Transaction>
            <n1:TransactionID>{id}</n1:TransactionID>
            <n1:TransactionDate>2023-05-01</n1:TransactionDate>
            {}
        </n1:Transaction>"#,
        lines.concat()
    )
}

pub fn audit_file(
    accounts: &[String],
    number_of_entries: &str,
    total_debit: &str,
    total_credit: &str,
    journals: &[Vec<String>],
) -> String {
    let journals: String = journals
        .iter()
        .enumerate()
        .map(|(i, txs)| {
            format!(
                "<n1:Journal><n1:JournalID>J{i}</n1:JournalID>{}</n1:Journal>",
                txs.concat()
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<n1:AuditFile xmlns:n1="urn:StandardAuditFile-Taxation-Financial:NO">
  <n1:Header><n1:AuditFileVersion>1.10</n1:AuditFileVersion></n1:Header>
  <n1:MasterFiles>
    <n1:GeneralLedgerAccounts>{}</n1:GeneralLedgerAccounts>
  </n1:MasterFiles>
  <n1:GeneralLedgerEntries>
    <n1:NumberOfEntries>{number_of_entries}</n1:NumberOfEntries>
    <n1:TotalDebit>{total_debit}</n1:TotalDebit>
    <n1:TotalCredit>{total_credit}</n1:TotalCredit>
    {journals}
  </n1:GeneralLedgerEntries>
</n1:AuditFile>"#,
        accounts.concat()
    )
}

/// 1000 сходится; 2000 расходится на 180.00; 3000 без проводок;
/// 9999 есть только в проводках. TotalCredit объявлен на 5.00 меньше.
pub fn sample() -> String {
    audit_file(
        &[
            account("2000", ("Credit", "200.00"), ("Credit", "180.00")),
            account("1000", ("Debit", "100.00"), ("Credit", "50.00")),
            account("3000", ("Debit", "10.00"), ("Debit", "10.00")),
        ],
        "3",
        "360.00",
        "355.00",
        &[vec![
            transaction(
                "T1",
                &[line(1, "1000", "Debit", "80.00"), line(2, "2000", "Credit", "80.00")],
            ),
            transaction(
                "T2",
                &[line(3, "1000", "Credit", "230.00"), line(4, "2000", "Debit", "230.00")],
            ),
            transaction(
                "T3",
                &[line(5, "2000", "Debit", "50.00"), line(6, "9999", "Credit", "50.00")],
            ),
        ]],
    )
}
