//! saftlib: экстракция и сверка SAF-T (Standard Audit File for Tax): счета,
//! проводки, контрольные суммы, выгрузка в CSV.

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod saft;
}
