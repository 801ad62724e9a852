//! Экстракция типизированных записей из дерева SAF-T.

pub mod accounts;
pub mod controls;
pub mod transactions;

use crate::{
    error::{Result, SaftError},
    formats::saft::Element,
    model::{BalanceSide, DebitCredit},
};
use rust_decimal::Decimal;

pub use accounts::extract_accounts;
pub use controls::extract_controls;
pub use transactions::extract_transactions;

pub(crate) fn required_text<'a>(
    parent: &'a Element,
    element: &'static str,
    context: &str,
) -> Result<&'a str> {
    parent
        .find(element)
        .map(Element::text)
        .ok_or_else(|| SaftError::missing(element, context))
}

pub(crate) fn optional_text(parent: &Element, element: &str) -> Option<String> {
    parent
        .find(element)
        .map(Element::text)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

pub(crate) fn parse_amount(text: &str, field: &'static str, context: &str) -> Result<Decimal> {
    Decimal::from_str_exact(text)
        .or_else(|_| text.parse::<Decimal>())
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| SaftError::MalformedAmount {
            field,
            value: text.to_owned(),
            context: context.to_owned(),
        })
}

/// Элемент дебета отсутствует → читается кредит, иначе дебет.
/// `amount` задаёт вложенный элемент суммы (у строк проводок это `Amount`).
pub(crate) fn read_side(
    parent: &Element,
    debit: &'static str,
    credit: &'static str,
    amount: Option<&'static str>,
    context: &str,
) -> Result<BalanceSide> {
    let (flag, holder, name) = match parent.find(debit) {
        Some(el) => (DebitCredit::Debit, el, debit),
        None => {
            let el = parent
                .find(credit)
                .ok_or_else(|| SaftError::missing(credit, context))?;
            (DebitCredit::Credit, el, credit)
        }
    };
    let (text, field) = match amount {
        Some(inner) => (required_text(holder, inner, context)?, inner),
        None => (holder.text(), name),
    };
    Ok(BalanceSide::new(flag, parse_amount(text, field, context)?))
}
