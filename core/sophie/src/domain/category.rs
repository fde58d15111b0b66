use serde::{Deserialize, Serialize};
use std::fmt;

/// gasto のカテゴリ（固定 6 種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comida,
    Transporte,
    Ocio,
    Hogar,
    Estudios,
    Otros,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Comida,
            Category::Transporte,
            Category::Ocio,
            Category::Hogar,
            Category::Estudios,
            Category::Otros,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comida => "comida",
            Category::Transporte => "transporte",
            Category::Ocio => "ocio",
            Category::Hogar => "hogar",
            Category::Estudios => "estudios",
            Category::Otros => "otros",
        }
    }

    /// 完全一致（前後の空白・記号と大文字小文字は無視）のみ受け付ける
    pub fn parse(s: &str) -> Option<Category> {
        let cleaned = s
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        Self::all().iter().copied().find(|c| c.as_str() == cleaned)
    }

    /// プロンプトに埋め込む列挙（`comida|transporte|...`）
    pub fn choices_for_prompt() -> String {
        Self::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Otros
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
