//! 実行時ディレクトリ（SOPHIE_HOME / XDG 解決結果）
//!
//! EnvResolver::resolve_dirs() で取得し、設定・データ・ログのパス計算に使う。

use std::path::PathBuf;

/// 解決済みの config / data ディレクトリ
#[derive(Debug, Clone)]
pub struct Dirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl Dirs {
    /// config.json のパス
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// JSONL ログファイルのパス
    pub fn log_file(&self) -> PathBuf {
        self.config_dir.join("logs").join("sophie.jsonl")
    }
}
