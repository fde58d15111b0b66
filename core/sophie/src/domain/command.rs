//! sophie コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の Runner で match する。

use crate::domain::report::YearMonth;
use common::domain::{ModelName, ProviderName};

/// sophie の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum SophieCommand {
    /// ヘルプ表示
    Help,
    /// メッセージを解析し、gasto / estudio を記録する
    Process {
        message: String,
        profile: Option<ProviderName>,
        model: Option<ModelName>,
    },
    /// 月次の gasto 集計（month 未指定なら全期間）
    Summary { month: Option<YearMonth> },
}

impl SophieCommand {
    /// ログ出力用の短い名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Process { .. } => "process",
            Self::Summary { .. } => "summary",
        }
    }
}
