//! 単発の完了呼び出し Outbound ポート
//!
//! system + user で 1 回だけ呼び出し、応答全文を受け取る。
//! 認証・タイムアウト・HTTP エラーは実装側で ExtractionUnavailable に変換する。

use crate::domain::ExtractionUnavailable;

pub trait Completion: Send + Sync {
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ExtractionUnavailable>;
}
