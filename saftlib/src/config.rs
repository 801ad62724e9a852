//! Настройки сверки: что делать с дубликатами счетов и «сиротскими» проводками.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Строка сохраняется молча.
    Allow,
    /// Строка сохраняется, в лог пишется предупреждение.
    #[default]
    Warn,
    /// Прогон завершается ошибкой.
    Reject,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReconcileConfig {
    pub duplicate_accounts: Policy,
    pub orphan_transactions: Policy,
}
