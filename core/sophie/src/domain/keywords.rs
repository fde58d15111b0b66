//! 意図判定用のキーワード集合
//!
//! 分類ロジックに触れずに語彙を拡張・ローカライズできるよう、設定として注入する。

const DEFAULT_EXPENSE_KEYWORDS: &[&str] = &[
    "gasto",
    "gasté",
    "pagué",
    "compré",
    "comprar",
    "combo",
    "mcdonald",
    "cuarto de libra",
    "burger",
    "hamburguesa",
    "supermercado",
    "almuerzo",
    "desayuno",
    "comerme",
    "comida",
    "café",
    "uber",
    "taxi",
    "bencina",
    "pasaje",
    "arriendo",
    "cuenta de",
    "boleta",
    "clp",
    "$",
];

const DEFAULT_STUDY_KEYWORDS: &[&str] = &[
    "kanji",
    "japonés",
    "japones",
    "nihongo",
    "hiragana",
    "katakana",
    "jlpt",
    "estudiar",
    "estudio",
    "repasar",
    "repaso",
    "vocabulario",
];

/// 小文字化済み・重複なしのキーワード集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// 空文字・既存語は無視して追加する
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let w = w.as_ref().trim().to_lowercase();
            if !w.is_empty() && !self.0.contains(&w) {
                self.0.push(w);
            }
        }
    }

    /// `lowered` は小文字化済みの本文。いずれかの語を部分文字列として含めば true。
    pub fn matches(&self, lowered: &str) -> bool {
        self.0.iter().any(|w| lowered.contains(w.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

/// gasto / estudio の 2 集合（互いに独立）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    pub expense: KeywordSet,
    pub study: KeywordSet,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            expense: KeywordSet::new(DEFAULT_EXPENSE_KEYWORDS),
            study: KeywordSet::new(DEFAULT_STUDY_KEYWORDS),
        }
    }
}
