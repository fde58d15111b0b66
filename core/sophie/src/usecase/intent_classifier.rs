//! キーワード照合による意図の判定

use crate::domain::{IntentFlags, Keywords, RawMessage};

/// 2 つの独立したキーワード集合で判定する（排他ではない）
pub struct IntentClassifier {
    keywords: Keywords,
}

impl IntentClassifier {
    pub fn new(keywords: Keywords) -> Self {
        Self { keywords }
    }

    pub fn classify(&self, message: &RawMessage) -> IntentFlags {
        let lowered = message.lowered();
        IntentFlags {
            is_expense: self.keywords.expense.matches(&lowered),
            is_study: self.keywords.study.matches(&lowered),
        }
    }
}
