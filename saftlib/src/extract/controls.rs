use super::{parse_amount, required_text, transactions::SECTION};
use crate::{
    error::{Result, SaftError},
    formats::saft::Document,
    model::ControlTotals,
};

/// NumberOfEntries / TotalDebit / TotalCredit из GeneralLedgerEntries.
pub fn extract_controls(doc: &Document) -> Result<ControlTotals> {
    let ctx = "GeneralLedgerEntries";
    let section = doc
        .find(SECTION)
        .ok_or_else(|| SaftError::missing("GeneralLedgerEntries", "document"))?;

    let entries = required_text(section, "NumberOfEntries", ctx)?;
    let number_of_entries = entries
        .parse::<i64>()
        .map_err(|_| SaftError::MalformedAmount {
            field: "NumberOfEntries",
            value: entries.to_owned(),
            context: ctx.to_owned(),
        })?;

    Ok(ControlTotals {
        number_of_entries,
        total_debit: parse_amount(required_text(section, "TotalDebit", ctx)?, "TotalDebit", ctx)?,
        total_credit: parse_amount(required_text(section, "TotalCredit", ctx)?, "TotalCredit", ctx)?,
    })
}
