//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::{ExpenseReport, ProcessError, RawMessage, YearMonth};
use common::error::Error;

/// メッセージ 1 件を処理し、要約（改行区切り）を返す
///
/// 分類・LLM 応答の形式崩れでは失敗しない。完了呼び出しや保存の失敗だけを返す。
pub trait ProcessMessage: Send + Sync {
    fn process(&self, message: &RawMessage) -> Result<String, ProcessError>;
}

/// 記録済み gasto の集計
pub trait ReportExpenses: Send + Sync {
    fn monthly_report(&self, month: Option<YearMonth>) -> Result<ExpenseReport, Error>;
}

/// CLI の Config を受け取り、終了コードを返す（main の Runner が実装する）
pub trait UseCaseRunner {
    fn run(&self, config: crate::cli::Config) -> Result<i32, Error>;
}
