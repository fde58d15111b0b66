//! 入力メッセージのドメイン型（自由文、UTF-8 以外の構造は仮定しない）

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage(String);

impl RawMessage {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// 大文字小文字を区別しない照合用
    pub fn lowered(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::ops::Deref for RawMessage {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for RawMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
