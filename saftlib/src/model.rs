//! Доменные модели: типизированный слой между XML-деревом и отчётами.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DebitCredit {
    Debit,
    Credit,
}

impl DebitCredit {
    /// Debit → −1, Credit → +1.
    pub fn sign(self) -> Decimal {
        match self {
            DebitCredit::Debit => Decimal::NEGATIVE_ONE,
            DebitCredit::Credit => Decimal::ONE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DebitCredit::Debit => "Debit",
            DebitCredit::Credit => "Credit",
        }
    }
}

impl fmt::Display for DebitCredit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Сумма, записанная либо в дебетовом, либо в кредитовом элементе.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BalanceSide {
    Debit(Decimal),
    Credit(Decimal),
}

impl BalanceSide {
    pub fn new(flag: DebitCredit, amount: Decimal) -> Self {
        match flag {
            DebitCredit::Debit => BalanceSide::Debit(amount),
            DebitCredit::Credit => BalanceSide::Credit(amount),
        }
    }

    /// Сумма как в файле, без знака.
    pub fn amount(&self) -> Decimal {
        match *self {
            BalanceSide::Debit(a) | BalanceSide::Credit(a) => a,
        }
    }

    pub fn flag(&self) -> DebitCredit {
        match self {
            BalanceSide::Debit(_) => DebitCredit::Debit,
            BalanceSide::Credit(_) => DebitCredit::Credit,
        }
    }

    pub fn signed(&self) -> Decimal {
        let signed = self.amount() * self.flag().sign();
        // без "-0.00" в выгрузке
        if signed.is_zero() {
            signed.abs()
        } else {
            signed
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub account_id: String,
    pub description: String,
    pub standard_account_id: String,
    pub account_type: String,
    pub creation_date: String,
    pub opening: BalanceSide,
    pub closing: BalanceSide,
}

impl Account {
    /// closing − opening, оба со знаком; `None` при выходе за диапазон Decimal.
    pub fn net_movement(&self) -> Option<Decimal> {
        self.closing.signed().checked_sub(self.opening.signed())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionLine {
    pub account_id: String,
    pub transaction_id: Option<String>,
    pub record_id: Option<String>,
    pub amount: BalanceSide,
}

/// Контрольные значения, объявленные в самом файле.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ControlTotals {
    pub number_of_entries: i64,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

/// Результат экстракции проводок: строки и число элементов `Transaction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transactions {
    pub lines: Vec<TransactionLine>,
    pub transaction_count: usize,
}

/// Строка сверки движения по счёту. Поля сальдо пустые, если счёт
/// встречается только в проводках.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountMovement {
    pub account_id: String,
    pub account: Option<Account>,
    pub net_transacted: Decimal,
    pub difference: Decimal,
}

impl AccountMovement {
    pub fn opening_signed(&self) -> Option<Decimal> {
        self.account.as_ref().map(|a| a.opening.signed())
    }

    pub fn closing_signed(&self) -> Option<Decimal> {
        self.account.as_ref().map(|a| a.closing.signed())
    }

    pub fn net_movement(&self) -> Option<Decimal> {
        self.account.as_ref().and_then(Account::net_movement)
    }
}
