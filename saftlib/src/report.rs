//! Контрольные проверки и отчёт о расхождениях.
//!
//! Все отчёты являются обычными структурами; `Display` печатает блоки фиксированной
//! ширины для консоли. Числа выводятся без округления.

use crate::{
    error::{Result, SaftError},
    model::{AccountMovement, ControlTotals, DebitCredit, Transactions},
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const RULE: &str = "----------------------------------";

/// Объявленное число проводок против фактического; difference = control − calculated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TransactionCountCheck {
    pub control: i64,
    pub calculated: i64,
    pub difference: i64,
}

impl TransactionCountCheck {
    pub fn new(controls: &ControlTotals, transactions: &Transactions) -> Result<Self> {
        let overflow = || SaftError::overflow("transaction count check");
        let calculated =
            i64::try_from(transactions.transaction_count).map_err(|_| overflow())?;
        Ok(TransactionCountCheck {
            control: controls.number_of_entries,
            calculated,
            difference: controls
                .number_of_entries
                .checked_sub(calculated)
                .ok_or_else(overflow)?,
        })
    }
}

impl fmt::Display for TransactionCountCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Transaction Count")?;
        writeln!(f, "Control:    {:>4}", self.control)?;
        writeln!(f, "Calculated: {:>4}", self.calculated)?;
        writeln!(f, "Difference: {:>4}", self.difference)
    }
}

/// Объявленные TotalDebit/TotalCredit против сумм строк (без знака).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TransactionAmountCheck {
    pub control_debit: Decimal,
    pub control_credit: Decimal,
    pub calculated_debit: Decimal,
    pub calculated_credit: Decimal,
    pub difference_debit: Decimal,
    pub difference_credit: Decimal,
}

impl TransactionAmountCheck {
    pub fn new(controls: &ControlTotals, transactions: &Transactions) -> Result<Self> {
        let total = |flag: DebitCredit| -> Result<Decimal> {
            let amounts = transactions
                .lines
                .iter()
                .filter(|l| l.amount.flag() == flag)
                .map(|l| l.amount.amount());
            checked_sum(amounts, &format!("total {flag} amount"))
        };
        let diff = |control: Decimal, calculated: Decimal, flag: DebitCredit| {
            control
                .checked_sub(calculated)
                .ok_or_else(|| SaftError::overflow(format!("{flag} amount check")))
        };
        let calculated_debit = total(DebitCredit::Debit)?;
        let calculated_credit = total(DebitCredit::Credit)?;
        Ok(TransactionAmountCheck {
            control_debit: controls.total_debit,
            control_credit: controls.total_credit,
            calculated_debit,
            calculated_credit,
            difference_debit: diff(controls.total_debit, calculated_debit, DebitCredit::Debit)?,
            difference_credit: diff(controls.total_credit, calculated_credit, DebitCredit::Credit)?,
        })
    }
}

impl fmt::Display for TransactionAmountCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Transaction Amount")?;
        writeln!(f, "             Debit        Credit")?;
        writeln!(f, "Control:    {:>12} {:>12}", self.control_debit, self.control_credit)?;
        writeln!(f, "Calculated: {:>12} {:>12}", self.calculated_debit, self.calculated_credit)?;
        writeln!(f, "Difference: {:>12} {:>12}", self.difference_debit, self.difference_credit)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AccountDifference {
    pub account_id: String,
    pub absolute: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovementReport {
    /// Число строк с ненулевой разницей.
    pub nonzero_count: usize,
    pub accounts: Vec<AccountDifference>,
    pub total_absolute: Decimal,
    pub total_net: Decimal,
}

impl MovementReport {
    pub fn new(movement: &[AccountMovement]) -> Result<Self> {
        let mut by_account: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
        let mut nonzero_count = 0;
        for row in movement.iter().filter(|r| !r.difference.is_zero()) {
            nonzero_count += 1;
            let overflow = || SaftError::overflow(format!("difference of account {}", row.account_id));
            let (abs, net) = by_account.entry(row.account_id.as_str()).or_default();
            *abs = abs.checked_add(row.difference.abs()).ok_or_else(overflow)?;
            *net = net.checked_add(row.difference).ok_or_else(overflow)?;
        }

        Ok(MovementReport {
            nonzero_count,
            accounts: by_account
                .into_iter()
                .map(|(id, (absolute, net))| AccountDifference {
                    account_id: id.to_owned(),
                    absolute,
                    net,
                })
                .collect(),
            total_absolute: checked_sum(
                movement.iter().map(|r| r.difference.abs()),
                "total absolute difference",
            )?,
            total_net: checked_sum(movement.iter().map(|r| r.difference), "total net difference")?,
        })
    }
}

impl fmt::Display for MovementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Accounts with non-Zero Difference:")?;
        writeln!(f, "Count: {:>3}", self.nonzero_count)?;
        writeln!(f, "{RULE}")?;
        for a in &self.accounts {
            writeln!(f, "Account ID: {}", a.account_id)?;
            writeln!(f, "Absolute Difference: {:>10}", a.absolute)?;
            writeln!(f, "Net Difference:      {:>10}", a.net)?;
            writeln!(f, "{RULE}")?;
        }
        writeln!(f, "Total:")?;
        writeln!(f, "Absolute Difference: {:>10}", self.total_absolute)?;
        writeln!(f, "Net Difference:      {:>10}", self.total_net)?;
        writeln!(f, "{RULE}")
    }
}

/// Три блока в порядке вывода в консоль.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Report {
    pub count: TransactionCountCheck,
    pub amount: TransactionAmountCheck,
    pub movement: MovementReport,
}

impl Report {
    pub fn new(
        controls: &ControlTotals,
        transactions: &Transactions,
        movement: &[AccountMovement],
    ) -> Result<Self> {
        Ok(Report {
            count: TransactionCountCheck::new(controls, transactions)?,
            amount: TransactionAmountCheck::new(controls, transactions)?,
            movement: MovementReport::new(movement)?,
        })
    }
}

fn checked_sum(mut values: impl Iterator<Item = Decimal>, context: &str) -> Result<Decimal> {
    values.try_fold(Decimal::ZERO, |acc, v| {
        acc.checked_add(v).ok_or_else(|| SaftError::overflow(context))
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.count, self.amount, self.movement)
    }
}
