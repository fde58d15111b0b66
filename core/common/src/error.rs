//! エラーハンドリング
//!
//! 全クレートで共有するエラー型。終了コードは sysexits に合わせる。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（usage エラー）
    #[error("{0}")]
    InvalidArgument(String),
    /// ファイル I/O
    #[error("{0}")]
    Io(String),
    /// JSON の読み書き
    #[error("{0}")]
    Json(String),
    /// 環境変数の解決
    #[error("{0}")]
    Env(String),
    /// HTTP 通信・API エラー
    #[error("{0}")]
    Http(String),
    /// 設定値の不整合
    #[error("{0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// usage エラー（ヘルプ表示が適切なもの）か
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード
    ///
    /// 64: 引数不正 / 74: I/O・HTTP / 70: その他
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) | Self::Http(_) => 74,
            Self::Json(_) | Self::Env(_) | Self::Config(_) => 70,
        }
    }
}
