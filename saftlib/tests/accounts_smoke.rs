mod common;

use common::{account, audit_file, sample};
use rust_decimal::Decimal;
use saftlib::{
    error::SaftError,
    extract::extract_accounts,
    formats::saft::Document,
    model::{BalanceSide, DebitCredit},
};

#[test]
fn accounts_sorted_with_flags_and_signs() {
    let doc = Document::parse(&sample()).expect("parse sample");
    let accounts = extract_accounts(&doc).expect("extract accounts");

    let ids: Vec<_> = accounts.iter().map(|a| a.account_id.as_str()).collect();
    assert_eq!(ids, vec!["1000", "2000", "3000"]);

    let cash = &accounts[0];
    assert_eq!(cash.description, "Account 1000");
    assert_eq!(cash.standard_account_id, "10");
    assert_eq!(cash.account_type, "GL");
    assert_eq!(cash.creation_date, "2019-01-01");
    assert_eq!(cash.opening, BalanceSide::Debit(Decimal::new(10000, 2)));
    assert_eq!(cash.opening.signed(), Decimal::new(-10000, 2));
    assert_eq!(cash.closing.flag(), DebitCredit::Credit);
    assert_eq!(cash.closing.signed(), Decimal::new(5000, 2));
    assert_eq!(cash.net_movement(), Some(Decimal::new(15000, 2)));
}

#[test]
fn debit_element_wins_when_both_present() {
    let xml = audit_file(
        &[r#"<n1:Account>
            <n1:AccountID>4000</n1:AccountID>
            <n1:AccountDescription>Both</n1:AccountDescription>
            <n1:StandardAccountID>40</n1:StandardAccountID>
            <n1:AccountType>GL</n1:AccountType>
            <n1:AccountCreationDate>2019-01-01</n1:AccountCreationDate>
            <n1:OpeningCreditBalance>5.00</n1:OpeningCreditBalance>
            <n1:OpeningDebitBalance>7.00</n1:OpeningDebitBalance>
            <n1:ClosingCreditBalance>0.00</n1:ClosingCreditBalance>
        </n1:Account>"#
            .to_string()],
        "0",
        "0",
        "0",
        &[],
    );
    let accounts = extract_accounts(&Document::parse(&xml).unwrap()).unwrap();
    assert_eq!(accounts[0].opening, BalanceSide::Debit(Decimal::new(700, 2)));
    assert_eq!(accounts[0].closing.signed(), Decimal::ZERO);
}

#[test]
fn duplicate_ids_are_kept() {
    let xml = audit_file(
        &[
            account("1000", ("Debit", "1"), ("Debit", "1")),
            account("1000", ("Credit", "2"), ("Credit", "2")),
        ],
        "0",
        "0",
        "0",
        &[],
    );
    let accounts = extract_accounts(&Document::parse(&xml).unwrap()).unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].opening.flag(), DebitCredit::Debit);
    assert_eq!(accounts[1].opening.flag(), DebitCredit::Credit);
}

#[test]
fn missing_section_and_fields_fail() {
    let doc = Document::parse("<AuditFile><MasterFiles/></AuditFile>").unwrap();
    assert!(matches!(
        extract_accounts(&doc),
        Err(SaftError::MissingElement { element: "GeneralLedgerAccounts", .. })
    ));

    let no_type = account("1000", ("Debit", "1"), ("Debit", "1"))
        .replace("<n1:AccountType>GL</n1:AccountType>", "");
    let xml = audit_file(&[no_type], "0", "0", "0", &[]);
    match extract_accounts(&Document::parse(&xml).unwrap()) {
        Err(SaftError::MissingElement { element, context }) => {
            assert_eq!(element, "AccountType");
            assert_eq!(context, "account 1000");
        }
        other => panic!("unexpected: {other:?}"),
    }

    let no_closing = account("1000", ("Debit", "1"), ("Debit", "1"))
        .replace("<n1:ClosingDebitBalance>1</n1:ClosingDebitBalance>", "");
    let xml = audit_file(&[no_closing], "0", "0", "0", &[]);
    assert!(matches!(
        extract_accounts(&Document::parse(&xml).unwrap()),
        Err(SaftError::MissingElement { element: "ClosingCreditBalance", .. })
    ));
}

#[test]
fn malformed_balance_fails() {
    let xml = audit_file(&[account("1000", ("Debit", "1.0.0"), ("Debit", "1"))], "0", "0", "0", &[]);
    match extract_accounts(&Document::parse(&xml).unwrap()) {
        Err(SaftError::MalformedAmount { field, value, .. }) => {
            assert_eq!(field, "OpeningDebitBalance");
            assert_eq!(value, "1.0.0");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn plain_lowercase_markup_is_accepted() {
    let xml = r#"<auditfile><generalledgeraccounts><account>
        <accountid>7</accountid><accountdescription>x</accountdescription>
        <standardaccountid>7</standardaccountid><accounttype>GL</accounttype>
        <accountcreationdate>2020-01-01</accountcreationdate>
        <openingcreditbalance>3.5</openingcreditbalance>
        <closingdebitbalance>1.5</closingdebitbalance>
    </account></generalledgeraccounts></auditfile>"#;
    let accounts = extract_accounts(&Document::parse(xml).unwrap()).unwrap();
    assert_eq!(accounts[0].net_movement(), Some(Decimal::new(-50, 1)));
}
