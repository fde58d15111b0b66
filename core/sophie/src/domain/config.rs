//! sophie の実行設定
//!
//! 起動時に 1 度だけ組み立て、以後は読み取り専用で各ユースケースへ渡す。
//! config.json のうち timezone / data_dir / keywords を読む（providers は common::llm 側）。

use crate::domain::keywords::Keywords;
use chrono_tz::Tz;
use common::error::Error;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Santiago;

#[derive(Debug, Clone, PartialEq)]
pub struct SophieConfig {
    /// 「今日」を決めるタイムゾーン
    pub timezone: Tz,
    /// gastos.csv / estudio/ の置き場（None のとき Dirs::data_dir）
    pub data_dir: Option<PathBuf>,
    pub keywords: Keywords,
}

impl Default for SophieConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            data_dir: None,
            keywords: Keywords::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SophieConfigRaw {
    timezone: Option<String>,
    data_dir: Option<PathBuf>,
    #[serde(default)]
    keywords: KeywordsRaw,
}

#[derive(Debug, Default, Deserialize)]
struct KeywordsRaw {
    #[serde(default)]
    expense: Vec<String>,
    #[serde(default)]
    study: Vec<String>,
}

/// IANA 名（例: America/Santiago）からタイムゾーンを得る
pub fn parse_timezone(name: &str) -> Result<Tz, Error> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| Error::config(format!("Unknown timezone '{}': {}", name, e)))
}

impl SophieConfig {
    /// JSON 文字列からパース。キーワードは既定集合への追加として扱う。
    pub fn parse(json: &str) -> Result<Self, Error> {
        let raw: SophieConfigRaw = serde_json::from_str(json)
            .map_err(|e| Error::json(format!("Failed to parse config: {}", e)))?;
        let mut cfg = Self::default();
        if let Some(tz) = raw.timezone.as_deref() {
            cfg.timezone = parse_timezone(tz)?;
        }
        cfg.data_dir = raw.data_dir;
        cfg.keywords.expense.extend(raw.keywords.expense);
        cfg.keywords.study.extend(raw.keywords.study);
        Ok(cfg)
    }
}
