//! gasto の保存先 Outbound ポート

use crate::domain::ExpenseRecord;
use common::error::Error;

/// 追記専用の保存先。初回書き込み時に保存媒体（ヘッダ行など）を用意する。
pub trait ExpenseSink: Send + Sync {
    fn append(&self, record: &ExpenseRecord) -> Result<(), Error>;
}

/// 保存済み gasto の読み出し（集計用）
pub trait ExpenseLedger: Send + Sync {
    /// 保存されていなければ空
    fn load_all(&self) -> Result<Vec<ExpenseRecord>, Error>;
}
