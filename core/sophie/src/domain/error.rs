//! sophie の処理エラー
//!
//! LLM 応答の形式崩れは抽出側で既定値に置き換えるためここには現れない。
//! 完了呼び出しそのものの失敗と、永続化の失敗だけを呼び出し元へ返す。

use crate::domain::intent::Intent;
use crate::domain::summary::ActionSummaryLine;
use thiserror::Error as ThisError;

/// 完了呼び出し（LLM）が利用できなかった
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("extraction unavailable: {reason}")]
pub struct ExtractionUnavailable {
    pub reason: String,
}

impl ExtractionUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// process の失敗
///
/// `completed` には、失敗より前に記録まで終わった行を固定順で保持する。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ProcessError {
    #[error("{intent} extraction failed: {source}")]
    ExtractionUnavailable {
        intent: Intent,
        source: ExtractionUnavailable,
        completed: Vec<ActionSummaryLine>,
    },
    #[error("{intent} record could not be saved: {reason}")]
    Persistence {
        intent: Intent,
        reason: String,
        completed: Vec<ActionSummaryLine>,
    },
}

impl ProcessError {
    pub fn intent(&self) -> Intent {
        match self {
            Self::ExtractionUnavailable { intent, .. } | Self::Persistence { intent, .. } => *intent,
        }
    }

    pub fn completed(&self) -> &[ActionSummaryLine] {
        match self {
            Self::ExtractionUnavailable { completed, .. } | Self::Persistence { completed, .. } => {
                completed
            }
        }
    }

    /// 外部サービス・ファイル I/O の失敗として扱う（sysexits EX_IOERR）
    pub fn exit_code(&self) -> i32 {
        74
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_carries_completed_lines() {
        let line = ActionSummaryLine::no_action();
        let err = ProcessError::ExtractionUnavailable {
            intent: Intent::Study,
            source: ExtractionUnavailable::new("timeout"),
            completed: vec![line.clone()],
        };
        assert_eq!(err.intent(), Intent::Study);
        assert_eq!(err.completed(), &[line]);
        assert_eq!(err.exit_code(), 74);
        assert_eq!(
            err.to_string(),
            "study extraction failed: extraction unavailable: timeout"
        );
    }
}
