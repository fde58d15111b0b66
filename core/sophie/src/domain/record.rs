//! 抽出・正規化済みのレコード（作成後は変更しない）

use crate::domain::category::Category;
use crate::domain::date::ResolvedDate;
use std::fmt;

/// DURACION_MIN が得られないときの既定値（分）
pub const DEFAULT_DURATION_MIN: u32 = 25;
/// 1 レコードあたりの漢字の上限
pub const MAX_KANJIS: usize = 5;

/// gasto の種別。現状は予定（futuro）のみ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpenseKind {
    #[default]
    Futuro,
}

impl ExpenseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Futuro => "futuro",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub date: ResolvedDate,
    pub concept: String,
    pub category: Category,
    pub amount_clp: u64,
    pub kind: ExpenseKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRecord {
    pub date: ResolvedDate,
    pub objective: String,
    /// 0〜MAX_KANJIS 文字、順序保持・重複なし
    pub kanji: Vec<char>,
    /// 常に 1 以上
    pub duration_minutes: u32,
}

/// CJK 統合漢字（基本ブロック）と 々〆ヵヶ を漢字として扱う
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '々' | '〆' | 'ヵ' | 'ヶ')
}

/// 文字列から漢字を出現順・重複なしで最大 MAX_KANJIS 個取り出す
pub fn collect_kanji<'a, I>(parts: I) -> Vec<char>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<char> = Vec::new();
    for part in parts {
        for c in part.chars().filter(|c| is_kanji(*c)) {
            if out.len() == MAX_KANJIS {
                return out;
            }
            if !out.contains(&c) {
                out.push(c);
            }
        }
    }
    out
}
