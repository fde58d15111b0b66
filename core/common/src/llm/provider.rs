//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（OpenAI 互換、Echo）はこのトレイトを実装する。
/// 単発の system + user 完了のみを扱う（ストリーミング・ツール呼び出しは持たない）。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `query` - ユーザーメッセージ
    /// * `system_instruction` - システム指示（オプション）
    /// * `temperature` - 温度
    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        temperature: f32,
    ) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスJSON文字列を取得
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出（存在しない場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// ペイロード生成 → HTTP → テキスト抽出を 1 回で行う
    fn complete(
        &self,
        query: &str,
        system_instruction: Option<&str>,
        temperature: f32,
    ) -> Result<Option<String>, Error> {
        let payload = self.make_request_payload(query, system_instruction, temperature)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)
    }
}
