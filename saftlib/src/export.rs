//! Имена файлов выгрузки и запись трёх таблиц.

use crate::{
    error::{Result, SaftError},
    formats::csv::Csv,
    pipeline::Reconciliation,
    traits::WriteFormat,
};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

pub const ACCOUNTS_TABLE: &str = "Accounts Table";
pub const TRANSACTIONS_TABLE: &str = "Transactions Table";
pub const MOVEMENT_TABLE: &str = "Account Movement Table";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H%M%S";

/// Шаблон пути с позиционными подстановками: `{0}` имя таблицы,
/// `{1}` время формирования.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    pub const DEFAULT: &'static str = "{0} - Extract {1}.csv";

    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains("{0}") {
            return Err(SaftError::Config(format!(
                "output template {template:?} has no {{0}} placeholder for the table name"
            )));
        }
        Ok(OutputTemplate(template))
    }

    pub fn render(&self, table: &str, generated_at: NaiveDateTime) -> PathBuf {
        let stamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
        PathBuf::from(self.0.replace("{0}", table).replace("{1}", &stamp))
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        OutputTemplate(Self::DEFAULT.to_owned())
    }
}

fn write_table<T>(path: PathBuf, rows: &[T]) -> Result<PathBuf>
where
    Csv: WriteFormat<T>,
{
    let file = File::create(&path)?;
    Csv::write(BufWriter::new(file), rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "table exported");
    Ok(path)
}

/// Пишет таблицы счетов, проводок и движения; возвращает пути файлов.
pub fn export_all(
    template: &OutputTemplate,
    rec: &Reconciliation,
    generated_at: NaiveDateTime,
) -> Result<Vec<PathBuf>> {
    Ok(vec![
        write_table(template.render(ACCOUNTS_TABLE, generated_at), &rec.accounts)?,
        write_table(
            template.render(TRANSACTIONS_TABLE, generated_at),
            &rec.transactions.lines,
        )?,
        write_table(template.render(MOVEMENT_TABLE, generated_at), &rec.movement)?,
    ])
}
