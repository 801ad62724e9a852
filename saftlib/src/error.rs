//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("missing element <{element}> in {context}")]
    MissingElement { element: &'static str, context: String },

    #[error("malformed amount in <{field}> ({context}): {value:?}")]
    MalformedAmount {
        field: &'static str,
        value: String,
        context: String,
    },

    #[error("amount overflow in {context}")]
    AmountOverflow { context: String },

    #[error("duplicate account id: {0}")]
    DuplicateAccount(String),

    #[error("transaction line references unknown account id: {0}")]
    OrphanTransaction(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl SaftError {
    pub(crate) fn missing(element: &'static str, context: impl Into<String>) -> Self {
        SaftError::MissingElement {
            element,
            context: context.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        SaftError::AmountOverflow {
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SaftError>;
