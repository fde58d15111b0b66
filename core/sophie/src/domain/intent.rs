//! 意図（gasto / estudio）と分類結果のフラグ

use std::fmt;

/// メッセージの目的
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Expense,
    Study,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Study => "study",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// キーワード照合の結果。両方・片方・どちらも立たない、のいずれもあり得る。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub is_expense: bool,
    pub is_study: bool,
}

impl IntentFlags {
    pub fn is_empty(&self) -> bool {
        !self.is_expense && !self.is_study
    }

    /// 立っている意図を固定順（gasto → estudio）で返す
    pub fn intents(&self) -> Vec<Intent> {
        let mut out = Vec::with_capacity(2);
        if self.is_expense {
            out.push(Intent::Expense);
        }
        if self.is_study {
            out.push(Intent::Study);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intents_order_is_expense_then_study() {
        let flags = IntentFlags {
            is_expense: true,
            is_study: true,
        };
        assert_eq!(flags.intents(), vec![Intent::Expense, Intent::Study]);
        assert!(!flags.is_empty());
        assert!(IntentFlags::default().is_empty());
        assert!(IntentFlags::default().intents().is_empty());
    }
}
